//! JSON form of a score.
//!
//! ```text
//! Note   := { number: int, dot_level: int }
//! Group  := { notes: [Note], duration: number }
//! Voice  := { groups: [Group] }
//! Stave  := { voices: [Voice], total_duration: number }
//! Score  := { title: string, author: string, staves: [Stave],
//!             instruments: [string], default_time_signature: [int, int] }
//! ```
//!
//! Only the tree is written. Reading rebuilds parent links with fresh
//! identities and rejects documents that would break the model's
//! invariants (an empty level, a stave count not matching the
//! instruments, a non-positive duration).

use crate::{dom::Score, error::ScoreResult};

impl Score {
    /// Pretty-printed, two-space indented.
    pub fn to_json(&self) -> ScoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// # Example
    /// ```
    /// # use jianpu_score::dom::Score;
    /// let score = Score::from_json(r#"{
    ///     "title": "Untitled", "author": "Author",
    ///     "staves": [{"voices": [{"groups": [
    ///         {"notes": [{"number": 1, "dot_level": 0}], "duration": 0.5},
    ///         {"notes": [{"number": 0, "dot_level": 0}], "duration": 3.5}
    ///     ]}], "total_duration": 4}],
    ///     "instruments": ["dizi"],
    ///     "default_time_signature": [4, 4]
    /// }"#).unwrap();
    /// assert_eq!(score.first_note().get().number, 1);
    /// assert_eq!(score.first_note().right().get().number, 0);
    /// ```
    pub fn from_json(json: &str) -> ScoreResult<Self> {
        let score: Score = serde_json::from_str(json)?;
        log::debug!(
            "loaded `{}` with {} measures",
            score.title,
            score.measure_count()
        );
        Ok(score)
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{round_half_up, Duration};

/// Meter of a measure: `numerator` beats of a `1/denominator` note.
///
/// Written as a `[beats, beat_unit]` pair on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct TimeSignature {
    pub numerator: u32,
    pub denominator: u32,
}
impl TimeSignature {
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.numerator > 0 && self.denominator > 0
    }

    /// Measure length in whole quarters, `round(4 / denominator * numerator)`.
    ///
    /// Meters shorter than half a quarter still get one quarter, so a
    /// measure never has zero length.
    ///
    /// # Example
    /// ```
    /// # use jianpu_score::primitives::{Duration, TimeSignature};
    /// let quarters = |n, d| TimeSignature::new(n, d).measure_duration();
    /// assert_eq!(quarters(4, 4), Duration::new(4, 1));
    /// assert_eq!(quarters(6, 8), Duration::new(3, 1));
    /// assert_eq!(quarters(7, 8), Duration::new(4, 1));
    /// ```
    pub fn measure_duration(&self) -> Duration {
        let quarters = round_half_up(
            4 * u64::from(self.numerator),
            u64::from(self.denominator),
        )
        .unwrap_or(0);
        Duration::new(quarters.max(1), 1)
    }
}
impl Default for TimeSignature {
    fn default() -> Self {
        Self::new(4, 4)
    }
}
impl From<(u32, u32)> for TimeSignature {
    fn from((numerator, denominator): (u32, u32)) -> Self {
        Self::new(numerator, denominator)
    }
}
impl From<TimeSignature> for (u32, u32) {
    fn from(ts: TimeSignature) -> Self {
        (ts.numerator, ts.denominator)
    }
}
impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

use derivative::Derivative;
use serde::{Deserialize, Serialize};

use super::{NodeId, Voice};
use crate::{
    error::{ScoreError, ScoreResult},
    primitives::Duration,
};

/// Voices of one instrument during one measure, bottom voice first.
#[derive(Derivative, Serialize, Deserialize)]
#[derivative(Debug, PartialEq)]
#[serde(try_from = "StaveRepr")]
pub struct Stave {
    #[serde(skip_serializing)]
    #[derivative(PartialEq = "ignore")]
    id: NodeId,
    #[serde(skip_serializing)]
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    score: Option<NodeId>,
    voices: Vec<Voice>,
    total_duration: Duration,
}
impl Stave {
    /// Stave of the given voices. No voices makes one rest voice.
    ///
    /// A total duration that is not positive becomes a quarter.
    pub fn with_voices(
        total_duration: Duration,
        voices: impl IntoIterator<Item = Voice>,
    ) -> Self {
        let total_duration =
            total_duration.positive().unwrap_or_else(|error| {
                log::warn!("{}, stave gets a quarter", error);
                Duration::quarter()
            });
        let mut stave = Self {
            id: NodeId::next(),
            score: None,
            voices: Vec::new(),
            total_duration,
        };
        for voice in voices {
            stave.add_voice(voice);
        }
        if stave.voices.is_empty() {
            stave.add_voice(Voice::rest(total_duration));
        }
        stave
    }
    /// One voice resting through the whole measure.
    pub fn rest(total_duration: Duration) -> Self {
        Self::with_voices(total_duration, [])
    }

    pub fn id(&self) -> NodeId {
        self.id
    }
    /// Score the stave currently sits in.
    pub fn score_id(&self) -> Option<NodeId> {
        self.score
    }
    pub(crate) fn set_score(&mut self, score: Option<NodeId>) {
        self.score = score;
    }

    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }
    pub fn set_total_duration(
        &mut self,
        total_duration: Duration,
    ) -> ScoreResult<()> {
        self.total_duration = total_duration.positive()?;
        Ok(())
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }
    pub fn voice(&self, index: usize) -> Option<&Voice> {
        self.voices.get(index)
    }
    pub fn voice_mut(&mut self, index: usize) -> Option<&mut Voice> {
        self.voices.get_mut(index)
    }
    pub(crate) fn voices_mut(&mut self) -> &mut [Voice] {
        &mut self.voices
    }
    // `voices` is never empty.
    pub fn first_voice(&self) -> &Voice {
        &self.voices[0]
    }
    pub fn last_voice(&self) -> &Voice {
        &self.voices[self.voices.len() - 1]
    }

    /// Put a voice on top of the stack.
    pub fn add_voice(&mut self, mut voice: Voice) {
        voice.set_stave(Some(self.id));
        self.voices.push(voice);
    }

    pub fn voice_index(&self, voice: NodeId) -> Option<usize> {
        self.voices.iter().position(|v| v.id() == voice)
    }
    /// `index`, or the top voice when the stave has fewer voices.
    pub fn voice_at_index(&self, index: usize) -> usize {
        index.min(self.voices.len() - 1)
    }

    fn link(&mut self) {
        let id = self.id;
        for voice in self.voices.iter_mut() {
            voice.set_stave(Some(id));
        }
    }
}

#[derive(Deserialize)]
struct StaveRepr {
    voices: Vec<Voice>,
    total_duration: Duration,
}
impl TryFrom<StaveRepr> for Stave {
    type Error = ScoreError;

    fn try_from(repr: StaveRepr) -> Result<Self, Self::Error> {
        if repr.voices.is_empty() {
            return Err(ScoreError::EmptyStave);
        }
        let mut stave = Self {
            id: NodeId::next(),
            score: None,
            voices: repr.voices,
            total_duration: repr.total_duration.positive()?,
        };
        stave.link();
        Ok(stave)
    }
}

#[cfg(test)]
mod tests {
    use super::Stave;
    use crate::{dom::Voice, error::ScoreError, primitives::Duration};

    #[test]
    fn total_duration_stays_positive() {
        let mut stave = Stave::rest(Duration::zero());
        assert_eq!(stave.total_duration(), Duration::quarter());
        assert_eq!(stave.first_voice().duration_sum(), Duration::quarter());
        assert!(matches!(
            stave.set_total_duration(Duration::zero()),
            Err(ScoreError::NonPositiveDuration(_))
        ));
        stave.set_total_duration(Duration::new(3, 1)).unwrap();
        assert_eq!(stave.total_duration(), Duration::new(3, 1));
    }

    #[test]
    fn rest_stave() {
        let stave = Stave::rest(Duration::new(3, 1));
        assert_eq!(stave.voices().len(), 1);
        let voice = stave.first_voice();
        assert_eq!(voice.stave_id(), Some(stave.id()));
        assert!(voice.first_group().is_empty());
        assert_eq!(voice.duration_sum(), Duration::new(3, 1));
    }

    #[test]
    fn voice_lookup() {
        let mut stave = Stave::rest(Duration::new(4, 1));
        let upper = Voice::rest(Duration::new(4, 1));
        let upper_id = upper.id();
        stave.add_voice(upper);
        assert_eq!(stave.voice_index(upper_id), Some(1));
        assert_eq!(stave.last_voice().id(), upper_id);
        assert_eq!(stave.voice_at_index(0), 0);
        assert_eq!(stave.voice_at_index(5), 1);
    }
}

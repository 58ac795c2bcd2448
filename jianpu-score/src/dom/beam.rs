//! How far sub-quarter underlines (beams) reach.
//!
//! A beam never crosses a quarter boundary and only joins groups of the
//! same duration. Nested levels carry over: a sixteenth under an eighth
//! beam keeps the eighth line running.

use super::{Group, Voice};
use crate::primitives::Duration;

/// One underline level below the quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeamLevel {
    Eighth,
    Sixteenth,
    ThirtySecond,
}
impl BeamLevel {
    pub const ALL: [BeamLevel; 3] =
        [Self::Eighth, Self::Sixteenth, Self::ThirtySecond];

    /// Duration of a note that opens this level.
    pub fn duration(&self) -> Duration {
        match self {
            Self::Eighth => Duration::new(1, 2),
            Self::Sixteenth => Duration::new(1, 4),
            Self::ThirtySecond => Duration::new(1, 8),
        }
    }
    fn index(&self) -> usize {
        match self {
            Self::Eighth => 0,
            Self::Sixteenth => 1,
            Self::ThirtySecond => 2,
        }
    }
}

/// Beam state under one group: for every level, how many groups the line
/// still spans starting here. Zero means no line at that level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeamLevels {
    spans: [usize; 3],
}
impl BeamLevels {
    pub fn new(eighth: usize, sixteenth: usize, thirty_second: usize) -> Self {
        Self {
            spans: [eighth, sixteenth, thirty_second],
        }
    }
    pub fn get(&self, level: BeamLevel) -> usize {
        self.spans[level.index()]
    }
    pub fn is_visible(&self) -> bool {
        self.spans.iter().any(|span| *span > 0)
    }

    fn step(self, duration: Duration, span: usize) -> Self {
        let [eighth, sixteenth, _] = self.spans;
        if duration >= Duration::quarter() {
            Self::default()
        } else if duration == BeamLevel::ThirtySecond.duration() {
            Self::new(eighth.max(span), sixteenth.max(span), span)
        } else if duration == BeamLevel::Sixteenth.duration() {
            Self::new(eighth.max(span), span, 0)
        } else if duration == BeamLevel::Eighth.duration() {
            Self::new(span, 0, 0)
        } else {
            self
        }
    }
}

impl Voice {
    /// Groups from `index` on needed to land exactly on the next whole
    /// quarter, counting the group itself.
    ///
    /// A group already ending on a quarter gives 1. `None` when the sums
    /// jump over the boundary or the voice ends first.
    pub fn notes_until_next_quarter(&self, index: usize) -> Option<usize> {
        let group = self.group(index)?;
        let mut current =
            self.precumulative_duration_at(index) + group.duration();
        let next_quarter = current.ceil();
        let mut count = 1;
        for group in &self.groups()[index + 1..] {
            if current >= next_quarter {
                break;
            }
            current += group.duration();
            count += 1;
        }
        match current == next_quarter {
            true => Some(count),
            false => None,
        }
    }

    /// Length of the run of equal durations starting at `index`.
    pub fn notes_in_same_duration_run(&self, index: usize) -> usize {
        let duration = match self.group(index) {
            Some(group) => group.duration(),
            None => return 0,
        };
        self.groups()[index..]
            .iter()
            .take_while(|g| g.duration() == duration)
            .count()
    }

    /// Groups a beam starting at `index` spans: the same-duration run cut
    /// at the next quarter boundary. Without an exact boundary the run
    /// alone decides.
    pub fn beam_span(&self, index: usize) -> usize {
        let run = self.notes_in_same_duration_run(index);
        match self.notes_until_next_quarter(index) {
            Some(until) => run.min(until),
            None => run,
        }
    }

    /// Beam state under every group, left to right.
    pub fn beam_levels(&self) -> Vec<BeamLevels> {
        let mut state = BeamLevels::default();
        self.groups()
            .iter()
            .enumerate()
            .map(|(index, group): (usize, &Group)| {
                let span = match group.duration() < Duration::quarter() {
                    true => self.beam_span(index),
                    false => 0,
                };
                state = state.step(group.duration(), span);
                state
            })
            .collect()
    }
}

//! Moving through the score: left/right is time, up/down is register.
//!
//! Nodes do not store neighbour links. A view (`NoteRef`, `GroupRef`,
//! `VoiceRef`, `StaveRef`) is a borrow of the score plus the index path
//! down to one node; it answers a move by asking its parent view for the
//! neighbouring sibling, all the way up to the score if a boundary is
//! hit, and walks back down by index.
//!
//! Wrapping rules:
//! - time wraps across barlines and from the last measure back to the
//!   first, staying on the same instrument and voice index;
//! - register moves through the voices of a stave, then on to the
//!   neighbouring stave in the flat stave list, which stops at both ends;
//! - between voices a move keeps its onset: it lands on the group sounding
//!   at the same time in the other voice, whatever the subdivision.
//!
//! A document whose every level is non-empty makes every move total.

use super::{Group, NodeId, Note, Score, Stave, Voice};
use crate::primitives::Duration;

/// Index coordinates of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotePath {
    pub stave: usize,
    pub voice: usize,
    pub group: usize,
    pub note: usize,
}
impl NotePath {
    pub fn new(stave: usize, voice: usize, group: usize, note: usize) -> Self {
        Self {
            stave,
            voice,
            group,
            note,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StaveRef<'a> {
    score: &'a Score,
    index: usize,
}
impl<'a> StaveRef<'a> {
    pub(crate) fn new(score: &'a Score, index: usize) -> Self {
        Self { score, index }
    }
    pub fn score(&self) -> &'a Score {
        self.score
    }
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn get(&self) -> &'a Stave {
        &self.score.staves()[self.index]
    }
    pub fn id(&self) -> NodeId {
        self.get().id()
    }

    /// Voice by index, clamped to the top voice.
    pub fn voice(&self, index: usize) -> VoiceRef<'a> {
        VoiceRef {
            stave: *self,
            index: self.get().voice_at_index(index),
        }
    }
    pub fn first_voice(&self) -> VoiceRef<'a> {
        self.voice(0)
    }
    pub fn last_voice(&self) -> VoiceRef<'a> {
        self.voice(self.get().voices().len() - 1)
    }

    pub fn left(&self) -> StaveRef<'a> {
        Self::new(self.score, self.score.left_stave(self.index))
    }
    pub fn right(&self) -> StaveRef<'a> {
        Self::new(self.score, self.score.right_stave(self.index))
    }
    pub fn up(&self) -> StaveRef<'a> {
        Self::new(self.score, self.score.up_stave(self.index))
    }
    pub fn down(&self) -> StaveRef<'a> {
        Self::new(self.score, self.score.down_stave(self.index))
    }

    /// Same voice index in the previous measure.
    pub fn left_voice(&self, voice: usize) -> VoiceRef<'a> {
        self.left().voice(voice)
    }
    /// Same voice index in the next measure.
    pub fn right_voice(&self, voice: usize) -> VoiceRef<'a> {
        self.right().voice(voice)
    }
    /// Voice above; above the top voice comes the bottom voice of the
    /// stave above.
    pub fn up_voice(&self, voice: usize) -> VoiceRef<'a> {
        match voice + 1 >= self.get().voices().len() {
            true => self.up().first_voice(),
            false => self.voice(voice + 1),
        }
    }
    /// Voice below; below the bottom voice comes the top voice of the
    /// stave below.
    pub fn down_voice(&self, voice: usize) -> VoiceRef<'a> {
        match voice {
            0 => self.down().last_voice(),
            _ => self.voice(voice - 1),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct VoiceRef<'a> {
    stave: StaveRef<'a>,
    index: usize,
}
impl<'a> VoiceRef<'a> {
    pub fn stave(&self) -> StaveRef<'a> {
        self.stave
    }
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn get(&self) -> &'a Voice {
        &self.stave.get().voices()[self.index]
    }
    pub fn id(&self) -> NodeId {
        self.get().id()
    }
    /// Length of the measure this voice fills.
    pub fn total_duration(&self) -> Duration {
        self.stave.get().total_duration()
    }

    /// Group by index, clamped to the last group.
    pub fn group(&self, index: usize) -> GroupRef<'a> {
        GroupRef {
            voice: *self,
            index: index.min(self.get().groups().len() - 1),
        }
    }
    pub fn first_group(&self) -> GroupRef<'a> {
        self.group(0)
    }
    pub fn last_group(&self) -> GroupRef<'a> {
        self.group(self.get().groups().len() - 1)
    }
    pub fn group_at_precumulative_duration(
        &self,
        target: Duration,
    ) -> GroupRef<'a> {
        self.group(self.get().index_at_precumulative_duration(target))
    }

    pub fn left(&self) -> VoiceRef<'a> {
        self.stave.left_voice(self.index)
    }
    pub fn right(&self) -> VoiceRef<'a> {
        self.stave.right_voice(self.index)
    }
    pub fn up(&self) -> VoiceRef<'a> {
        self.stave.up_voice(self.index)
    }
    pub fn down(&self) -> VoiceRef<'a> {
        self.stave.down_voice(self.index)
    }

    /// Previous group in time, crossing into the previous measure.
    pub fn left_group(&self, group: usize) -> GroupRef<'a> {
        match group {
            0 => self.left().last_group(),
            _ => self.group(group - 1),
        }
    }
    /// Next group in time, crossing into the next measure.
    pub fn right_group(&self, group: usize) -> GroupRef<'a> {
        match group + 1 >= self.get().groups().len() {
            true => self.right().first_group(),
            false => self.group(group + 1),
        }
    }
    /// Group of the voice above sounding at the onset of `group`.
    pub fn up_group(&self, group: usize) -> GroupRef<'a> {
        let onset = self.get().precumulative_duration_at(group);
        self.up().group_at_precumulative_duration(onset)
    }
    /// Group of the voice below sounding at the onset of `group`.
    pub fn down_group(&self, group: usize) -> GroupRef<'a> {
        let onset = self.get().precumulative_duration_at(group);
        self.down().group_at_precumulative_duration(onset)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GroupRef<'a> {
    voice: VoiceRef<'a>,
    index: usize,
}
impl<'a> GroupRef<'a> {
    pub fn voice(&self) -> VoiceRef<'a> {
        self.voice
    }
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn get(&self) -> &'a Group {
        &self.voice.get().groups()[self.index]
    }
    pub fn id(&self) -> NodeId {
        self.get().id()
    }
    pub fn precumulative_duration(&self) -> Duration {
        self.voice.get().precumulative_duration_at(self.index)
    }

    /// Note by index, clamped to the top note.
    pub fn note(&self, index: usize) -> NoteRef<'a> {
        NoteRef {
            group: *self,
            index: index.min(self.get().notes().len() - 1),
        }
    }
    pub fn bottom_note(&self) -> NoteRef<'a> {
        self.note(0)
    }
    pub fn top_note(&self) -> NoteRef<'a> {
        self.note(self.get().notes().len() - 1)
    }

    pub fn left_group(&self) -> GroupRef<'a> {
        self.voice.left_group(self.index)
    }
    pub fn right_group(&self) -> GroupRef<'a> {
        self.voice.right_group(self.index)
    }

    /// Note above `note` in the chord, or the bottom of the group above.
    pub fn up_note(&self, note: usize) -> NoteRef<'a> {
        match note + 1 >= self.get().notes().len() {
            true => self.voice.up_group(self.index).bottom_note(),
            false => self.note(note + 1),
        }
    }
    /// Note below `note` in the chord, or the top of the group below.
    pub fn down_note(&self, note: usize) -> NoteRef<'a> {
        match note {
            0 => self.voice.down_group(self.index).top_note(),
            _ => self.note(note - 1),
        }
    }
}

/// A live note in a score, able to find its neighbours.
///
/// # Example
/// ```
/// # use jianpu_score::dom::Score;
/// let mut score = Score::default();
/// score.add_measure();
/// let first = score.first_note();
/// // one group per measure: right goes over the barline and wraps back
/// let next = first.right();
/// assert_eq!(next.path().stave, 2);
/// assert_eq!(next.right().id(), first.id());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NoteRef<'a> {
    group: GroupRef<'a>,
    index: usize,
}
impl<'a> NoteRef<'a> {
    pub fn group(&self) -> GroupRef<'a> {
        self.group
    }
    pub fn voice(&self) -> VoiceRef<'a> {
        self.group.voice()
    }
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn get(&self) -> &'a Note {
        &self.group.get().notes()[self.index]
    }
    pub fn id(&self) -> NodeId {
        self.get().id()
    }
    pub fn path(&self) -> NotePath {
        let voice = self.voice();
        NotePath::new(
            voice.stave().index(),
            voice.index(),
            self.group.index(),
            self.index,
        )
    }

    /// Bottom note of the previous group in time.
    pub fn left(&self) -> NoteRef<'a> {
        self.group.left_group().bottom_note()
    }
    /// Bottom note of the next group in time.
    pub fn right(&self) -> NoteRef<'a> {
        self.group.right_group().bottom_note()
    }
    pub fn up(&self) -> NoteRef<'a> {
        self.group.up_note(self.index)
    }
    pub fn down(&self) -> NoteRef<'a> {
        self.group.down_note(self.index)
    }
}
impl PartialEq for NoteRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

//! A chord: simultaneous notes sharing one duration.
//!
//! A group is never empty. When its last note goes away a rest takes its
//! place, and a group holding only that rest counts as empty: the next
//! real note replaces the rest instead of stacking on it.

use std::fmt;

use derivative::Derivative;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{NodeId, Note};
use crate::{
    error::{ScoreError, ScoreResult},
    primitives::Duration,
};

#[derive(Derivative, Serialize, Deserialize)]
#[derivative(Debug, PartialEq)]
#[serde(try_from = "GroupRepr")]
pub struct Group {
    #[serde(skip_serializing)]
    #[derivative(PartialEq = "ignore")]
    id: NodeId,
    #[serde(skip_serializing)]
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    voice: Option<NodeId>,
    /// Bottom note first.
    notes: Vec<Note>,
    duration: Duration,
}
impl Group {
    /// Chord of the given notes, bottom first. No notes makes a rest.
    ///
    /// A duration that is not positive becomes a quarter.
    ///
    /// # Example
    /// ```
    /// # use jianpu_score::{dom::{Group, Note}, primitives::Duration};
    /// let chord =
    ///     Group::new(Duration::quarter(), [Note::new(1, 0), Note::new(3, 0)]);
    /// assert_eq!(chord.bottom_note().number, 1);
    /// assert_eq!(chord.top_note().number, 3);
    ///
    /// let rest = Group::new(Duration::quarter(), []);
    /// assert!(rest.is_empty());
    ///
    /// let zero = Group::new(Duration::zero(), []);
    /// assert_eq!(zero.duration(), Duration::quarter());
    /// ```
    pub fn new(
        duration: Duration,
        notes: impl IntoIterator<Item = Note>,
    ) -> Self {
        let duration = duration.positive().unwrap_or_else(|error| {
            log::warn!("{}, group gets a quarter", error);
            Duration::quarter()
        });
        let mut group = Self {
            id: NodeId::next(),
            voice: None,
            notes: Vec::new(),
            duration,
        };
        group.add_notes(0, notes);
        if group.notes.is_empty() {
            group.add_notes(0, [Note::rest()]);
        }
        group
    }
    pub fn rest(duration: Duration) -> Self {
        Self::new(duration, [Note::rest()])
    }

    pub fn id(&self) -> NodeId {
        self.id
    }
    /// Voice the group currently sits in.
    pub fn voice_id(&self) -> Option<NodeId> {
        self.voice
    }
    pub(crate) fn set_voice(&mut self, voice: Option<NodeId>) {
        self.voice = voice;
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }
    pub fn duration(&self) -> Duration {
        self.duration
    }
    pub fn set_duration(&mut self, duration: Duration) -> ScoreResult<()> {
        self.duration = duration.positive()?;
        Ok(())
    }

    // `notes` is never empty, so both ends always exist.
    pub fn bottom_note(&self) -> &Note {
        &self.notes[0]
    }
    pub fn top_note(&self) -> &Note {
        &self.notes[self.notes.len() - 1]
    }

    /// True for the single-rest placeholder.
    pub fn is_empty(&self) -> bool {
        self.notes.len() == 1 && self.notes[0].is_rest()
    }

    pub fn note_index(&self, note: NodeId) -> Option<usize> {
        self.notes.iter().position(|n| n.id() == note)
    }
    pub fn note(&self, note: NodeId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == note)
    }
    pub fn note_mut(&mut self, note: NodeId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.id() == note)
    }

    /// Splice notes in at `position`.
    ///
    /// Adding to the rest placeholder drops the rest first. A position
    /// past the end appends.
    pub fn add_notes(
        &mut self,
        position: usize,
        notes: impl IntoIterator<Item = Note>,
    ) {
        let mut notes: Vec<Note> = notes.into_iter().collect();
        if notes.is_empty() {
            return;
        }
        if self.is_empty() {
            self.notes.clear();
        }
        for note in notes.iter_mut() {
            note.set_group(Some(self.id));
        }
        let position = position.min(self.notes.len());
        self.notes.splice(position..position, notes);
    }

    /// Remove a note by identity. Removing the last one leaves a rest.
    pub fn delete_note(&mut self, note: NodeId) -> Option<Note> {
        let index = self.note_index(note)?;
        let mut removed = self.notes.remove(index);
        removed.set_group(None);
        if self.notes.is_empty() {
            self.add_notes(0, [Note::rest()]);
        }
        Some(removed)
    }

    /// Drop the whole chord in favour of one note.
    pub(crate) fn replace_notes(&mut self, note: Note) {
        for old in self.notes.iter_mut() {
            old.set_group(None);
        }
        self.notes.clear();
        self.add_notes(0, [note]);
    }

    fn link(&mut self) {
        let id = self.id;
        for note in self.notes.iter_mut() {
            note.set_group(Some(id));
        }
    }
}

/// `[1 3 5]:1/2`
impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]:{}", self.notes.iter().join(" "), self.duration)
    }
}

#[derive(Deserialize)]
struct GroupRepr {
    notes: Vec<Note>,
    duration: Duration,
}
impl TryFrom<GroupRepr> for Group {
    type Error = ScoreError;

    fn try_from(repr: GroupRepr) -> Result<Self, Self::Error> {
        if repr.notes.is_empty() {
            return Err(ScoreError::EmptyGroup);
        }
        let mut group = Self {
            id: NodeId::next(),
            voice: None,
            notes: repr.notes,
            duration: repr.duration.positive()?,
        };
        group.link();
        Ok(group)
    }
}

#[cfg(test)]
mod tests {
    use super::Group;
    use crate::{dom::Note, error::ScoreError, primitives::Duration};

    fn chord(numbers: &[u8]) -> Group {
        Group::new(
            Duration::quarter(),
            numbers.iter().map(|n| Note::new(*n, 0)),
        )
    }

    #[test]
    fn add_to_placeholder_replaces_rest() {
        let mut group = Group::rest(Duration::quarter());
        assert!(group.is_empty());
        group.add_notes(3, [Note::new(5, 0), Note::new(6, 0)]);
        assert_eq!(group, chord(&[5, 6]));
        assert!(!group.is_empty());
    }

    #[test]
    fn add_nothing_keeps_rest() {
        let mut group = Group::rest(Duration::quarter());
        group.add_notes(0, []);
        assert!(group.is_empty());
    }

    #[test]
    fn add_into_middle() {
        let mut group = chord(&[1, 5]);
        let note = Note::new(3, 0);
        let id = note.id();
        group.add_notes(1, [note]);
        assert_eq!(group, chord(&[1, 3, 5]));
        assert_eq!(group.note_index(id), Some(1));
        assert_eq!(group.note(id).unwrap().group_id(), Some(group.id()));
    }

    #[test]
    fn rest_inside_chord_is_not_placeholder() {
        let mut group = chord(&[0, 5]);
        assert!(!group.is_empty());
        group.add_notes(2, [Note::new(6, 0)]);
        assert_eq!(group, chord(&[0, 5, 6]));
    }

    #[test]
    fn delete_restores_rest() {
        let mut group = chord(&[5]);
        let id = group.bottom_note().id();
        let removed = group.delete_note(id).unwrap();
        assert_eq!(removed.group_id(), None);
        assert_eq!(group, chord(&[0]));
        assert!(group.is_empty());
        assert_eq!(group.bottom_note().group_id(), Some(group.id()));
    }

    #[test]
    fn delete_by_identity() {
        let mut group = chord(&[0, 0, 0]);
        let middle = group.notes()[1].id();
        group.delete_note(middle);
        assert_eq!(group.notes().len(), 2);
        assert_eq!(group.note_index(middle), None);
        assert!(group.delete_note(middle).is_none());
    }

    #[test]
    fn display() {
        let mut group = chord(&[1, 3]);
        group.set_duration(Duration::new(1, 2)).unwrap();
        assert_eq!(group.to_string(), "[1 3]:1/2");
    }

    #[test]
    fn duration_stays_positive() {
        let mut group = Group::new(Duration::zero(), [Note::new(2, 0)]);
        assert_eq!(group.duration(), Duration::quarter());
        assert!(matches!(
            group.set_duration(Duration::zero()),
            Err(ScoreError::NonPositiveDuration(_))
        ));
        assert_eq!(group.duration(), Duration::quarter());
    }
}

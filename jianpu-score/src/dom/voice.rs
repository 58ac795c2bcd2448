//! One melodic line through one measure of one instrument.
//!
//! Groups follow each other in time; a group's onset is the sum of the
//! durations before it. Nothing positional is cached: every query walks
//! the current groups, so the answers survive any order of edits.

use derivative::Derivative;
use serde::{Deserialize, Serialize};

use super::{Group, NodeId, Note};
use crate::{error::ScoreError, primitives::Duration};

#[derive(Derivative, Serialize, Deserialize)]
#[derivative(Debug, PartialEq)]
#[serde(try_from = "VoiceRepr")]
pub struct Voice {
    #[serde(skip_serializing)]
    #[derivative(PartialEq = "ignore")]
    id: NodeId,
    #[serde(skip_serializing)]
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    stave: Option<NodeId>,
    groups: Vec<Group>,
}

/// What [`Voice::delete_note`] removed.
#[derive(Debug)]
pub enum Deletion {
    /// A note left its chord. Carries the note that should take the cursor.
    Note(NodeId),
    /// The placeholder group left the voice.
    Group(Group),
    /// Nothing was removed.
    Nothing,
}

impl Voice {
    /// Voice of the given groups. No groups makes a quarter rest.
    pub fn with_groups(groups: impl IntoIterator<Item = Group>) -> Self {
        let mut voice = Self {
            id: NodeId::next(),
            stave: None,
            groups: Vec::new(),
        };
        voice.add_groups(0, groups);
        if voice.groups.is_empty() {
            voice.add_groups(0, [Group::rest(Duration::quarter())]);
        }
        voice
    }
    /// A single rest filling `duration`.
    pub fn rest(duration: Duration) -> Self {
        Self::with_groups([Group::rest(duration)])
    }

    pub fn id(&self) -> NodeId {
        self.id
    }
    /// Stave the voice currently sits in.
    pub fn stave_id(&self) -> Option<NodeId> {
        self.stave
    }
    pub(crate) fn set_stave(&mut self, stave: Option<NodeId>) {
        self.stave = stave;
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }
    pub fn group(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }
    pub fn group_mut(&mut self, index: usize) -> Option<&mut Group> {
        self.groups.get_mut(index)
    }
    // `groups` is never empty.
    pub fn first_group(&self) -> &Group {
        &self.groups[0]
    }
    pub fn last_group(&self) -> &Group {
        &self.groups[self.groups.len() - 1]
    }

    pub fn group_index(&self, group: NodeId) -> Option<usize> {
        self.groups.iter().position(|g| g.id() == group)
    }
    /// Index of the group holding `note`.
    pub fn group_index_of_note(&self, note: NodeId) -> Option<usize> {
        self.groups
            .iter()
            .position(|g| g.note_index(note).is_some())
    }
    pub fn note_mut(&mut self, note: NodeId) -> Option<&mut Note> {
        self.groups.iter_mut().find_map(|g| g.note_mut(note))
    }

    /// Sum of all group durations.
    pub fn duration_sum(&self) -> Duration {
        self.groups.iter().map(Group::duration).sum()
    }

    /// Onset of `group`: durations of every group before it.
    pub fn group_precumulative_duration(
        &self,
        group: NodeId,
    ) -> Option<Duration> {
        self.group_index(group)
            .map(|index| self.precumulative_duration_at(index))
    }
    pub(crate) fn precumulative_duration_at(&self, index: usize) -> Duration {
        self.groups[..index.min(self.groups.len())]
            .iter()
            .map(Group::duration)
            .sum()
    }

    /// Group sounding at `target`, counted from the voice start.
    ///
    /// An onset shared with another voice lands on the group starting
    /// there. Past the end of the voice the last group is returned.
    pub fn group_at_precumulative_duration(&self, target: Duration) -> &Group {
        &self.groups[self.index_at_precumulative_duration(target)]
    }
    pub(crate) fn index_at_precumulative_duration(
        &self,
        target: Duration,
    ) -> usize {
        let mut end = Duration::zero();
        for (index, group) in self.groups.iter().enumerate() {
            end += group.duration();
            if end > target {
                return index;
            }
        }
        self.groups.len() - 1
    }

    /// Splice groups in at `index`, past the end appends.
    pub fn add_groups(
        &mut self,
        index: usize,
        groups: impl IntoIterator<Item = Group>,
    ) {
        let mut groups: Vec<Group> = groups.into_iter().collect();
        for group in groups.iter_mut() {
            group.set_voice(Some(self.id));
        }
        let index = index.min(self.groups.len());
        self.groups.splice(index..index, groups);
    }

    /// Digit input in insert mode.
    ///
    /// On the last group a new one-note group is opened after it;
    /// anywhere else the note joins the chord right above `at`.
    /// Returns the new note.
    pub fn insert_default(
        &mut self,
        at: NodeId,
        number: u8,
        duration: Duration,
    ) -> Option<NodeId> {
        let index = self.group_index_of_note(at)?;
        let note = Note::new(number, 0);
        let id = note.id();
        if index + 1 == self.groups.len() {
            log::debug!("insert: new group {} at end of voice", number);
            self.add_groups(index + 1, [Group::new(duration, [note])]);
        } else {
            let group = &mut self.groups[index];
            let position = group.note_index(at)? + 1;
            log::debug!("insert: {} into chord {}", number, group);
            group.add_notes(position, [note]);
        }
        Some(id)
    }

    /// Open a new one-note group right after the group holding `at`.
    pub fn insert_after(
        &mut self,
        at: NodeId,
        number: u8,
        duration: Duration,
    ) -> Option<NodeId> {
        let index = self.group_index_of_note(at)?;
        let note = Note::new(number, 0);
        let id = note.id();
        log::debug!("insert after group {}: {}", index, number);
        self.add_groups(index + 1, [Group::new(duration, [note])]);
        Some(id)
    }

    /// Replace the chord holding `at` with a single note.
    pub fn overwrite(&mut self, at: NodeId, number: u8) -> Option<NodeId> {
        let index = self.group_index_of_note(at)?;
        let note = Note::new(number, 0);
        let id = note.id();
        let group = &mut self.groups[index];
        log::debug!("overwrite {} with {}", group, number);
        group.replace_notes(note);
        Some(id)
    }

    /// Delete `at` from its chord, or drop its group if that group is the
    /// rest placeholder.
    ///
    /// Within a chord the cursor goes to the note below the removed one
    /// (or the new bottom). The sole group of a voice is never dropped.
    pub fn delete_note(&mut self, at: NodeId) -> Deletion {
        let index = match self.group_index_of_note(at) {
            Some(index) => index,
            None => return Deletion::Nothing,
        };
        if self.groups[index].is_empty() {
            let id = self.groups[index].id();
            return match self.delete_group(id) {
                Some(group) => Deletion::Group(group),
                None => Deletion::Nothing,
            };
        }
        let group = &mut self.groups[index];
        let position = match group.note_index(at) {
            Some(position) => position,
            None => return Deletion::Nothing,
        };
        group.delete_note(at);
        let cursor = &group.notes()[position.saturating_sub(1)];
        Deletion::Note(cursor.id())
    }

    /// Remove a group by identity. Refuses to empty the voice.
    pub fn delete_group(&mut self, group: NodeId) -> Option<Group> {
        let index = self.group_index(group)?;
        if self.groups.len() == 1 {
            log::warn!("refusing to delete the only group of a voice");
            return None;
        }
        let mut removed = self.groups.remove(index);
        removed.set_voice(None);
        log::debug!("deleted group {} at {}", removed, index);
        Some(removed)
    }

    fn link(&mut self) {
        let id = self.id;
        for group in self.groups.iter_mut() {
            group.set_voice(Some(id));
        }
    }
}

#[derive(Deserialize)]
struct VoiceRepr {
    groups: Vec<Group>,
}
impl TryFrom<VoiceRepr> for Voice {
    type Error = ScoreError;

    fn try_from(repr: VoiceRepr) -> Result<Self, Self::Error> {
        if repr.groups.is_empty() {
            return Err(ScoreError::EmptyVoice);
        }
        let mut voice = Self {
            id: NodeId::next(),
            stave: None,
            groups: repr.groups,
        };
        voice.link();
        Ok(voice)
    }
}

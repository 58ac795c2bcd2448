//! Editing session: one score, one cursor, one mode.
//!
//! The session is the only mutable state an editor front end needs.
//! Input, drawing and storage adapters call into it; it never calls
//! out. The cursor is the identity of a live note and is re-resolved
//! on every command, so it follows the note through edits elsewhere.

pub mod command;

pub use command::Command;

use crate::{
    dom::{NodeId, NoteRef, Score},
    error::ScoreResult,
    primitives::{Duration, EditMode},
};

#[derive(Debug)]
pub struct Session {
    score: Score,
    cursor: NodeId,
    mode: EditMode,
    default_duration: Duration,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Score::default())
    }
}

impl Session {
    /// Session on `score` with the cursor on its first note.
    pub fn new(score: Score) -> Self {
        let cursor = score.first_note().id();
        Self {
            score,
            cursor,
            mode: EditMode::default(),
            default_duration: Duration::quarter(),
        }
    }

    pub fn score(&self) -> &Score {
        &self.score
    }
    /// Title, author and other header edits.
    pub fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }
    /// Swap in another score, cursor on its first note.
    pub fn load(&mut self, score: Score) -> Score {
        let old = std::mem::replace(&mut self.score, score);
        self.cursor = self.score.first_note().id();
        old
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }
    pub fn set_mode(&mut self, mode: EditMode) {
        log::debug!("mode: {}", mode);
        self.mode = mode;
    }
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }
    /// Duration of the next typed note. Must be positive.
    pub fn set_default_duration(
        &mut self,
        duration: Duration,
    ) -> ScoreResult<()> {
        self.default_duration = duration.positive()?;
        Ok(())
    }
    pub fn duration_up(&mut self) {
        self.default_duration = self.default_duration.step_up();
    }
    pub fn duration_down(&mut self) {
        self.default_duration = self.default_duration.step_down();
    }

    pub fn cursor_id(&self) -> NodeId {
        self.cursor
    }
    /// The note under the cursor.
    ///
    /// A cursor whose note is gone falls back to the first note.
    pub fn cursor(&self) -> NoteRef<'_> {
        match self.score.note(self.cursor) {
            Some(note) => note,
            None => {
                log::warn!("cursor {} is not in the score", self.cursor);
                self.score.first_note()
            }
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor().left().id();
    }
    pub fn cursor_right(&mut self) {
        self.cursor = self.cursor().right().id();
    }
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor().up().id();
    }
    pub fn cursor_down(&mut self) {
        self.cursor = self.cursor().down().id();
    }

    pub fn dot_up(&mut self) {
        let cursor = self.cursor().id();
        if let Some(note) = self.score.note_mut(cursor) {
            note.dot_up();
        }
    }
    pub fn dot_down(&mut self) {
        let cursor = self.cursor().id();
        if let Some(note) = self.score.note_mut(cursor) {
            note.dot_down();
        }
    }

    /// Enter a note number at the cursor, as the mode dictates.
    ///
    /// - insert: chord or new last group, cursor stays;
    /// - after: new group after the cursor, cursor follows;
    /// - overwrite: chord replaced, cursor on the new note;
    /// - read: nothing.
    pub fn note_input(&mut self, number: u8) {
        let cursor = self.cursor().id();
        let duration = self.default_duration;
        log::debug!("input {} in {} mode", number, self.mode);
        let voice = match self.score.voice_of_note_mut(cursor) {
            Some(voice) => voice,
            None => return,
        };
        match self.mode {
            EditMode::Insert => {
                let new = voice.insert_default(cursor, number, duration);
                // the rest placeholder under the cursor may be gone
                if self.score.locate(cursor).is_none() {
                    self.cursor = new.unwrap_or(cursor);
                }
            }
            EditMode::After => {
                voice.insert_after(cursor, number, duration);
                self.cursor = cursor;
                self.cursor_right();
            }
            EditMode::Overwrite => {
                if let Some(new) = voice.overwrite(cursor, number) {
                    self.cursor = new;
                }
            }
            EditMode::Read => (),
        }
    }

    /// Delete at the cursor. Does nothing in read mode.
    pub fn note_delete(&mut self) {
        if !self.mode.accepts_input() {
            return;
        }
        let cursor = self.cursor().id();
        if let Some(next) = self.score.delete_note(cursor, self.mode) {
            self.cursor = next;
        }
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Left => self.cursor_left(),
            Command::Right => self.cursor_right(),
            Command::Up => self.cursor_up(),
            Command::Down => self.cursor_down(),
            Command::Digit(number) => self.note_input(number),
            Command::Delete => self.note_delete(),
            Command::DotUp => self.dot_up(),
            Command::DotDown => self.dot_down(),
            Command::DurationUp => self.duration_up(),
            Command::DurationDown => self.duration_down(),
            Command::SetMode(mode) => self.set_mode(mode),
            Command::SetDuration(duration) => {
                if let Err(error) = self.set_default_duration(duration) {
                    log::warn!("{}, keeping {}", error, self.default_duration);
                }
            }
        }
    }
}

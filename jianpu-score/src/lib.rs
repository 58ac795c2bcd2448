//! Numbered-notation (jianpu) score model with cursor editing.
//!
//! The document is a tree Score → Stave → Voice → Group → Note. A
//! cursor moves left/right through time and up/down through register,
//! wrapping across barlines and voices; mutations keep every chord
//! non-empty by putting a rest in place of the last removed note.
//!
//! Drawing, key handling and storage stay outside: they read the tree,
//! and drive an [`editor::Session`].

pub mod dom;
pub mod editor;
pub mod error;
pub mod primitives;
pub mod serialization;

pub use dom::{Group, NodeId, Note, NoteRef, Score, Stave, Voice};
pub use editor::{Command, Session};
pub use error::{ScoreError, ScoreResult};
pub use primitives::{Duration, EditMode, TimeSignature};

//! Document tree: Score → Stave → Voice → Group → Note.
//!
//! Every parent owns its children in a `Vec`; every child remembers its
//! parent's [`NodeId`] for reference only. Each level is non-empty from
//! construction on, which is what keeps navigation total.
//!
//! Nothing navigates through the parent ids. Moves go through
//! [`Score::locate`] and the index views in [`navigation`], so the ids
//! are an integrity check: every splice rewrites them, `locate` asserts
//! them in debug builds, and a caller holding a detached node can tell
//! it apart from a linked one (`group_id() == None` after removal).

pub mod beam;
pub mod group;
pub mod id;
pub mod navigation;
pub mod note;
pub mod score;
pub mod stave;
pub mod voice;

pub use beam::{BeamLevel, BeamLevels};
pub use group::Group;
pub use id::NodeId;
pub use navigation::{GroupRef, NotePath, NoteRef, StaveRef, VoiceRef};
pub use note::Note;
pub use score::Score;
pub use stave::Stave;
pub use voice::{Deletion, Voice};

//! Value types the document is measured in.
//!
//! Durations are exact rationals in quarter-note units, so every
//! position in a voice is computed without float drift. The editing
//! mode lives here too: it is a plain value handed to the model's
//! deletion routine, not a piece of session state.

pub mod duration;
pub mod fraction_tools;
pub mod mode;
pub mod time_signature;

pub use duration::Duration;
pub use fraction_tools::{fraction_to_f64, limit_denominator, round_half_up};
pub use mode::EditMode;
pub use time_signature::TimeSignature;

/// Finest subdivision a duration read from outside is quantized to.
pub(crate) const LIMIT_DENOMINATOR: u64 = 128;

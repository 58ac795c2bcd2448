use crate::primitives::{Duration, EditMode};

/// One user action, as an input adapter would deliver it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Left,
    Right,
    Up,
    Down,
    /// Note number typed, `0` for a rest.
    Digit(u8),
    Delete,
    DotUp,
    DotDown,
    DurationUp,
    DurationDown,
    SetMode(EditMode),
    SetDuration(Duration),
}

use crate::primitives::Duration;

/// Everything that can be wrong with a document handed to the model.
///
/// Navigation and editing never fail; only building or loading a score can.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("Score needs at least one instrument")]
    NoInstruments,
    #[error("Score has no staves")]
    NoStaves,
    #[error(
        "Stave count {staves} is not a multiple of \
        instrument count {instruments}"
    )]
    UnalignedStaves { staves: usize, instruments: usize },
    #[error("Measure needs {expected} staves, got {found}")]
    MeasureSize { expected: usize, found: usize },
    #[error("Invalid time signature: {0}/{1}")]
    InvalidTimeSignature(u32, u32),
    #[error("Stave has no voices")]
    EmptyStave,
    #[error("Voice has no groups")]
    EmptyVoice,
    #[error("Group has no notes")]
    EmptyGroup,
    #[error("Duration must be positive, got {0}")]
    NonPositiveDuration(Duration),
    #[error("Unknown edit mode: `{0}`")]
    UnknownMode(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
pub type ScoreResult<T> = Result<T, ScoreError>;

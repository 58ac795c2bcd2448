use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// How digit input and deletion act on the document.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// Add to the chord under the cursor, or open a new group at the end
    /// of the voice.
    Insert,
    /// Open a new group after the cursor and follow it.
    #[default]
    After,
    /// Replace the chord under the cursor.
    Overwrite,
    /// Navigation only.
    Read,
}
impl EditMode {
    pub const ALL: [EditMode; 4] =
        [Self::Insert, Self::After, Self::Overwrite, Self::Read];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::After => "after",
            Self::Overwrite => "overwrite",
            Self::Read => "read",
        }
    }

    pub fn accepts_input(&self) -> bool {
        *self != Self::Read
    }

    /// Whether removing an emptied group hands the cursor to the right
    /// neighbour (otherwise the left one).
    pub fn deletes_forward(&self) -> bool {
        matches!(self, Self::Insert | Self::Overwrite)
    }
}
impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
impl FromStr for EditMode {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s.trim())
            .ok_or_else(|| ScoreError::UnknownMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::EditMode;
    use crate::error::ScoreError;

    #[test]
    fn parse() {
        for mode in EditMode::ALL {
            assert_eq!(mode.to_string().parse::<EditMode>().unwrap(), mode);
        }
        assert!(matches!(
            "append".parse::<EditMode>(),
            Err(ScoreError::UnknownMode(s)) if s == "append"
        ));
    }

    #[test]
    fn successor_side() {
        assert!(EditMode::Insert.deletes_forward());
        assert!(EditMode::Overwrite.deletes_forward());
        assert!(!EditMode::After.deletes_forward());
        assert!(!EditMode::Read.accepts_input());
        assert_eq!(EditMode::default(), EditMode::After);
    }
}

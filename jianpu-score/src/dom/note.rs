use std::fmt;

use derivative::Derivative;
use serde::{Deserialize, Serialize};

use super::NodeId;

/// One numbered pitch degree. `0` is a rest.
///
/// `dot_level` counts octave dots: positive ones are drawn above the
/// number, negative ones below.
#[derive(Derivative, Serialize, Deserialize)]
#[derivative(Debug, PartialEq)]
#[serde(from = "NoteRepr")]
pub struct Note {
    #[serde(skip_serializing)]
    #[derivative(PartialEq = "ignore")]
    id: NodeId,
    #[serde(skip_serializing)]
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    group: Option<NodeId>,
    pub number: u8,
    pub dot_level: i32,
}
impl Note {
    pub fn new(number: u8, dot_level: i32) -> Self {
        Self {
            id: NodeId::next(),
            group: None,
            number,
            dot_level,
        }
    }
    pub fn rest() -> Self {
        Self::new(0, 0)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }
    /// Group the note currently sits in.
    pub fn group_id(&self) -> Option<NodeId> {
        self.group
    }
    pub(crate) fn set_group(&mut self, group: Option<NodeId>) {
        self.group = group;
    }

    pub fn is_rest(&self) -> bool {
        self.number == 0
    }

    pub fn dot_up(&mut self) {
        self.dot_level += 1;
    }
    pub fn dot_down(&mut self) {
        self.dot_level -= 1;
    }
}

/// Number with one `'` per upper dot or one `,` per lower dot.
impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = match self.dot_level.is_negative() {
            true => ",",
            false => "'",
        };
        write!(
            f,
            "{}{}",
            self.number,
            mark.repeat(self.dot_level.unsigned_abs() as usize)
        )
    }
}

#[derive(Deserialize)]
struct NoteRepr {
    number: u8,
    dot_level: i32,
}
impl From<NoteRepr> for Note {
    fn from(repr: NoteRepr) -> Self {
        Self::new(repr.number, repr.dot_level)
    }
}

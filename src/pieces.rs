use std::fmt::{Display, Formatter};

use crate::error::ParseError;

/// The two sides of the game. Black plays first.
///
/// Every piece is identical apart from its side, so a piece is represented
/// simply by the side it belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Side {
    Black,
    Red,
}

impl Side {
    /// The opposing side.
    pub fn other(&self) -> Side {
        match self {
            Side::Black => Side::Red,
            Side::Red => Side::Black,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::Red => write!(f, "Red"),
        }
    }
}

// Conversions to and from the characters used in board notation.
impl TryFrom<char> for Side {
    type Error = ParseError;
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'b' => Ok(Side::Black),
            'r' => Ok(Side::Red),
            other => Err(ParseError::BadChar(other)),
        }
    }
}

impl From<Side> for char {
    fn from(value: Side) -> Self {
        match value {
            Side::Black => 'b',
            Side::Red => 'r',
        }
    }
}

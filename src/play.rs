use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ParseError;
use crate::tiles::{RowColOffset, Tile};

/// A single move of a piece from one tile to another. (Named "Play" rather
/// than "Move" as the lower-cased version of the latter would clash with the
/// Rust keyword.)
///
/// A play is just a pair of tiles: it is not guaranteed to be straight, nor
/// legal in any other respect. Legality is the rules engine's concern, so
/// that a diagonal play is rejected with a proper reason rather than being
/// unrepresentable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Play {
    pub from: Tile,
    pub to: Tile,
}

impl Play {
    pub fn new(from: Tile, to: Tile) -> Self {
        Self { from, to }
    }

    /// The unit step taken from `from` toward `to`, as row and column deltas.
    /// Zero on any axis the play does not move along.
    pub fn direction(&self) -> RowColOffset {
        RowColOffset::new(
            (self.to.row as i8 - self.from.row as i8).signum(),
            (self.to.col as i8 - self.from.col as i8).signum(),
        )
    }
}

impl FromStr for Play {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split('-').collect();
        if tokens.len() != 2 {
            return Err(ParseError::BadString(String::from(s)));
        }
        Ok(Play::new(Tile::from_str(tokens[0])?, Tile::from_str(tokens[1])?))
    }
}

impl Display for Play {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

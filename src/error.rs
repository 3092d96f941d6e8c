use thiserror::Error;

/// The reason why an attempted play was rejected.
///
/// All variants are recoverable: a rejected play leaves the game state
/// untouched and the caller is expected to solicit another play.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PlayInvalid {
    /// The game has already been won.
    #[error("game is already over")]
    GameOver,
    /// The starting tile does not hold a piece belonging to the side whose
    /// turn it is.
    #[error("no piece of yours on the starting tile")]
    NotYourPiece,
    /// The destination tile is occupied.
    #[error("destination tile is occupied")]
    DestinationOccupied,
    /// The starting and destination tiles share neither a row nor a column.
    #[error("tiles share no row or column")]
    NoCommonAxis,
    /// Another piece lies on a tile between the start and the destination.
    #[error("path is blocked by another piece")]
    BlockedByPiece,
}

/// Errors raised when parsing tiles, plays or board notation from strings.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    /// Tried to parse a string, but it was not the expected length. The given
    /// `usize` is the actual length.
    #[error("string has unexpected length {0}")]
    BadStringLen(usize),
    /// Tried to parse board notation but a row did not describe the expected
    /// number of tiles. The given `usize` is the actual number.
    #[error("row describes {0} tiles")]
    BadLineLen(usize),
    /// Encountered an unexpected character in a string.
    #[error("unexpected character {0:?}")]
    BadChar(char),
    /// Tried to parse an empty string.
    #[error("empty string")]
    EmptyString,
    /// A generic error type where the given string could not be parsed for
    /// some reason.
    #[error("could not parse {0:?}")]
    BadString(String),
}

use std::str::FromStr;

use crate::board::Board;
use crate::error::ParseError;
use crate::game::GameStatus;
use crate::pieces::Side;

/// All state that changes as a game is played: piece placement, whose turn it
/// is, how many pieces each side has lost, and whether anyone has won.
///
/// The struct is plain `Copy` data. It is owned by [`crate::game::Game`] and
/// mutated only through [`crate::game::Game::do_play`]; an invalid play never
/// changes it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct GameState {
    /// Current piece placement.
    pub board: Board,
    /// The side whose turn it is.
    pub side_to_play: Side,
    /// Current status of the game.
    pub status: GameStatus,
    /// Number of Black pieces that have been captured.
    pub black_captured: u8,
    /// Number of Red pieces that have been captured.
    pub red_captured: u8,
}

impl GameState {
    /// Set up a state from board notation with the given side to play and no
    /// captures recorded yet.
    pub fn new(board_str: &str, side_to_play: Side) -> Result<Self, ParseError> {
        Ok(Self {
            board: Board::from_str(board_str)?,
            side_to_play,
            status: GameStatus::Ongoing,
            black_captured: 0,
            red_captured: 0,
        })
    }

    /// Number of pieces of the given side that have been captured.
    pub fn captured(&self, side: Side) -> u8 {
        match side {
            Side::Black => self.black_captured,
            Side::Red => self.red_captured,
        }
    }

    pub(crate) fn add_captured(&mut self, side: Side, n: u8) {
        match side {
            Side::Black => self.black_captured += n,
            Side::Red => self.red_captured += n,
        }
    }
}

impl Default for GameState {
    /// The start of a game: the opening position with Black to play.
    fn default() -> Self {
        Self {
            board: Board::starting_position(),
            side_to_play: Side::Black,
            status: GameStatus::Ongoing,
            black_captured: 0,
            red_captured: 0,
        }
    }
}

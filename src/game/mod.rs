pub mod capture;
pub mod logic;
pub mod state;

use tracing::debug;

use crate::board::Board;
use crate::error::PlayInvalid;
use crate::game::capture::get_captures;
use crate::game::logic::{check_play_validity, evaluate_outcome};
use crate::game::state::GameState;
use crate::pieces::Side;
use crate::play::Play;
use crate::tiles::Tile;

/// The current status of the game.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum GameStatus {
    /// Game is still ongoing.
    Ongoing,
    /// Game has been won by the given side.
    Won(Side),
}

/// A struct representing a single game: the current [`GameState`] plus the
/// operations that advance it. Create one per game and discard it when the
/// game is over.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct Game {
    pub state: GameState,
}

impl Game {
    /// Create a new game at the opening position, Black to play.
    pub fn new() -> Self {
        Self::default()
    }

    /// Actually "do" a play: check validity, move the piece, resolve
    /// captures, update the capture tallies and status, and switch the side
    /// to play. Returns the status of the game following the play.
    ///
    /// An invalid play returns an error and leaves the state untouched. The
    /// side to play flips after every applied play, including the one that
    /// wins the game; once the status is [`GameStatus::Won`], every further
    /// play is rejected with [`PlayInvalid::GameOver`].
    pub fn do_play(&mut self, play: Play) -> Result<GameStatus, PlayInvalid> {
        check_play_validity(&self.state, play)?;
        let mut state = self.state;
        let mover = state.side_to_play;
        // First move the piece on the board, then remove captured pieces.
        state.board.move_piece(play.from, play.to);
        let captures = get_captures(&state.board, mover, play);
        for &tile in &captures {
            state.board.clear_tile(tile);
        }
        // Every captured piece belongs to the side that did not move.
        state.add_captured(mover.other(), captures.len() as u8);
        state.status = evaluate_outcome(&state);
        state.side_to_play = state.side_to_play.other();
        self.state = state;
        debug!(%play, side = %mover, captured = captures.len(), "play applied");
        if let GameStatus::Won(winner) = state.status {
            debug!(%winner, "game over");
        }
        Ok(state.status)
    }

    /// Check whether the given play would be legal, without making it.
    pub fn check_play_validity(&self, play: Play) -> Result<(), PlayInvalid> {
        check_play_validity(&self.state, play)
    }

    /// The side whose turn it is.
    pub fn side_to_play(&self) -> Side {
        self.state.side_to_play
    }

    /// The current status of the game.
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Number of pieces of the given side that have been captured.
    pub fn captured(&self, side: Side) -> u8 {
        self.state.captured(side)
    }

    /// The occupant of the given tile, if any.
    pub fn occupant(&self, tile: Tile) -> Option<Side> {
        self.state.board.get(tile)
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.state.board
    }
}

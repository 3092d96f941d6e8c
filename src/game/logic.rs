use crate::error::PlayInvalid;
use crate::error::PlayInvalid::{
    BlockedByPiece, DestinationOccupied, GameOver, NoCommonAxis, NotYourPiece,
};
use crate::game::state::GameState;
use crate::game::GameStatus;
use crate::pieces::Side;
use crate::play::Play;

/// Number of pieces a side may lose before losing the game.
pub const CAPTURED_LOSS_THRESHOLD: u8 = 8;

/// Check whether the given play is legal in the given state.
///
/// The checks short-circuit in a fixed order, so a play that is illegal for
/// more than one reason always reports the same one: the game being over,
/// then ownership of the moved piece, then an occupied destination, then a
/// missing common axis, then an obstructed path.
pub fn check_play_validity(state: &GameState, play: Play) -> Result<(), PlayInvalid> {
    if state.status != GameStatus::Ongoing {
        return Err(GameOver);
    }
    if state.board.get(play.from) != Some(state.side_to_play) {
        return Err(NotYourPiece);
    }
    if state.board.tile_occupied(play.to) {
        return Err(DestinationOccupied);
    }
    if (play.from.row == play.to.row) == (play.from.col == play.to.col) {
        // Exactly one coordinate must change: this rejects diagonals. A play
        // that goes nowhere never reaches this check, as its destination
        // holds the moving piece itself.
        return Err(NoCommonAxis);
    }
    if state
        .board
        .tiles_between(play.from, play.to)
        .iter()
        .any(|t| state.board.tile_occupied(*t))
    {
        return Err(BlockedByPiece);
    }
    Ok(())
}

/// The status implied by the current capture tallies: a side that has lost
/// [`CAPTURED_LOSS_THRESHOLD`] or more pieces has lost the game.
pub fn evaluate_outcome(state: &GameState) -> GameStatus {
    for side in [Side::Black, Side::Red] {
        if state.captured(side) >= CAPTURED_LOSS_THRESHOLD {
            return GameStatus::Won(side.other());
        }
    }
    GameStatus::Ongoing
}

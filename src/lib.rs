mod board;
mod error;
pub mod game;
mod pieces;
pub mod play;
mod tiles;

pub use crate::{
    board::{Board, BOARD_LEN},
    error::{ParseError, PlayInvalid},
    game::{
        capture::get_captures,
        logic::{check_play_validity, evaluate_outcome, CAPTURED_LOSS_THRESHOLD},
        state::GameState,
        Game, GameStatus,
    },
    pieces::Side,
    play::Play,
    tiles::{Coords, RowColOffset, Tile},
};

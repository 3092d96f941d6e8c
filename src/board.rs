use std::fmt::{Display, Formatter, Write};
use std::str::FromStr;

use crate::error::ParseError;
use crate::pieces::Side;
use crate::tiles::{Coords, Tile};

/// Length of the board's side, in tiles.
pub const BOARD_LEN: u8 = 9;

/// The playing grid: a fixed 9x9 array of tiles, each empty or holding a
/// piece of one side.
///
/// The board knows nothing about the rules of the game. It stores piece
/// placement and answers rules-free geometric questions (bounds, corners,
/// the tiles between two tiles); checking move validity and resolving
/// captures are implemented elsewhere in terms of these accessors.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    cells: [[Option<Side>; BOARD_LEN as usize]; BOARD_LEN as usize],
}

impl Default for Board {
    /// An empty board.
    fn default() -> Self {
        Self {
            cells: [[None; BOARD_LEN as usize]; BOARD_LEN as usize],
        }
    }
}

impl Board {
    /// The opening position: Red along the whole of the top row, Black along
    /// the whole of the bottom row, every other tile empty.
    pub fn starting_position() -> Self {
        let mut board = Self::default();
        for col in 0..BOARD_LEN {
            board.set(Tile::new(0, col), Some(Side::Red));
            board.set(Tile::new(BOARD_LEN - 1, col), Some(Side::Black));
        }
        board
    }

    /// The occupant of the given tile, if any.
    pub fn get(&self, tile: Tile) -> Option<Side> {
        self.cells[tile.row as usize][tile.col as usize]
    }

    /// Set or clear the occupant of the given tile.
    pub fn set(&mut self, tile: Tile, occupant: Option<Side>) {
        self.cells[tile.row as usize][tile.col as usize] = occupant;
    }

    /// Clear a tile.
    pub fn clear_tile(&mut self, tile: Tile) {
        self.set(tile, None);
    }

    /// Check if there is any piece occupying a tile.
    pub fn tile_occupied(&self, tile: Tile) -> bool {
        self.get(tile).is_some()
    }

    /// Move a piece from one tile to another. This does not check whether the
    /// move is legal; it just transfers whatever occupies `from`. Returns the
    /// piece that was moved, or `None` (moving nothing) if `from` was empty.
    pub fn move_piece(&mut self, from: Tile, to: Tile) -> Option<Side> {
        let occupant = self.get(from)?;
        self.set(to, Some(occupant));
        self.clear_tile(from);
        Some(occupant)
    }

    /// Count the pieces of the given side left on the board.
    pub fn count_pieces(&self, side: Side) -> u8 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(side))
            .count() as u8
    }

    /// The tile at the given coordinates, if they are on the board.
    pub fn coords_to_tile(&self, coords: Coords) -> Option<Tile> {
        if (0..BOARD_LEN as i8).contains(&coords.row) && (0..BOARD_LEN as i8).contains(&coords.col)
        {
            Some(Tile::new(coords.row as u8, coords.col as u8))
        } else {
            None
        }
    }

    /// Whether the given tile is one of the four corner tiles.
    pub fn is_corner(&self, tile: Tile) -> bool {
        (tile.row == 0 || tile.row == BOARD_LEN - 1) && (tile.col == 0 || tile.col == BOARD_LEN - 1)
    }

    /// The tiles strictly between two tiles which share a row or column.
    /// Empty if the tiles are adjacent, equal, or share no axis.
    pub fn tiles_between(&self, t1: Tile, t2: Tile) -> Vec<Tile> {
        let mut tiles = Vec::new();
        if t1.row == t2.row {
            let (lo, hi) = (t1.col.min(t2.col), t1.col.max(t2.col));
            for col in (lo + 1)..hi {
                tiles.push(Tile::new(t1.row, col));
            }
        } else if t1.col == t2.col {
            let (lo, hi) = (t1.row.min(t2.row), t1.row.max(t2.row));
            for row in (lo + 1)..hi {
                tiles.push(Tile::new(row, t1.col));
            }
        }
        tiles
    }

    /// Render the board as compact notation: one string per row, rows joined
    /// by `/`, pieces as the characters from [`Side`] and runs of empty tiles
    /// as their length in digits.
    pub fn to_notation(&self) -> String {
        let mut s = String::new();
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                s.push('/');
            }
            let mut empty_run = 0u8;
            for cell in row {
                match cell {
                    None => empty_run += 1,
                    Some(side) => {
                        if empty_run > 0 {
                            s.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        s.push(char::from(*side));
                    }
                }
            }
            if empty_run > 0 {
                s.push_str(&empty_run.to_string());
            }
        }
        s
    }
}

/// Parse a board from the compact notation produced by
/// [`Board::to_notation`], eg, `"rrrrrrrrr/9/9/9/9/9/9/9/bbbbbbbbb"` for the
/// opening position.
impl FromStr for Board {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyString);
        }
        let rows: Vec<&str> = s.split('/').collect();
        if rows.len() != BOARD_LEN as usize {
            return Err(ParseError::BadStringLen(rows.len()));
        }
        let mut board = Self::default();
        for (r, row_str) in rows.iter().enumerate() {
            let mut col = 0usize;
            for chr in row_str.chars() {
                if let Some(digit) = chr.to_digit(10) {
                    col += digit as usize;
                } else {
                    if col >= BOARD_LEN as usize {
                        return Err(ParseError::BadLineLen(col + 1));
                    }
                    board.cells[r][col] = Some(Side::try_from(chr)?);
                    col += 1;
                }
            }
            if col != BOARD_LEN as usize {
                return Err(ParseError::BadLineLen(col));
            }
        }
        Ok(board)
    }
}

/// Render the board as a grid of characters suitable for printing: one line
/// per row, `.` for an empty tile.
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                f.write_char(match cell {
                    Some(side) => char::from(*side),
                    None => '.',
                })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

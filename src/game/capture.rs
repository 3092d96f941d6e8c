use std::collections::HashSet;

use tracing::debug;

use crate::board::Board;
use crate::pieces::Side;
use crate::play::Play;
use crate::tiles::{Coords, RowColOffset, Tile};

/// The four orthogonal scan directions: up, down, left, right.
const DIRECTIONS: [RowColOffset; 4] = [
    RowColOffset::new(-1, 0),
    RowColOffset::new(1, 0),
    RowColOffset::new(0, -1),
    RowColOffset::new(0, 1),
];

/// Get the tiles containing pieces captured by the given play, which is
/// assumed to have been made already (`play.to` holds the moving piece).
///
/// Captures are scanned for in the three directions other than the one the
/// piece arrived from: a piece cannot capture back along its own line of
/// travel in the same play. Runs found in different directions are all
/// captured by the one play.
pub fn get_captures(board: &Board, mover: Side, play: Play) -> HashSet<Tile> {
    let towards_start = play.direction().reversed();
    let mut captures: HashSet<Tile> = HashSet::new();
    for dir in DIRECTIONS {
        if dir == towards_start {
            continue;
        }
        captures.extend(scan_dir(board, mover, play.to, dir));
    }
    if !captures.is_empty() {
        debug!(side = %mover, count = captures.len(), "custodian capture");
    }
    captures
}

/// Walk outward from `from` (exclusive) in direction `dir` and return the run
/// of opposing pieces captured along it, if any.
///
/// The immediate neighbour must hold an opposing piece; the run then extends
/// over consecutive opposing pieces and is captured only if an own-side piece
/// closes the far end. A lone opposing piece sitting on a corner tile is
/// closed instead by an own-side piece on the corner's other orthogonal
/// neighbour, the board edge sealing the remaining sides. A run that reaches
/// an empty tile or runs off a non-corner edge is not captured.
fn scan_dir(board: &Board, side: Side, from: Tile, dir: RowColOffset) -> Vec<Tile> {
    let mut run = Vec::new();
    let mut coords = Coords::from(from) + dir;
    let Some(next) = board.coords_to_tile(coords) else {
        return run;
    };
    match board.get(next) {
        Some(occupant) if occupant != side => run.push(next),
        _ => return run,
    }
    if board.is_corner(next) {
        if let Some(closer) = corner_closer(board, next, from) {
            if board.get(closer) == Some(side) {
                return run;
            }
        }
    }
    loop {
        coords = coords + dir;
        let Some(tile) = board.coords_to_tile(coords) else {
            // Ran off the edge without an own-side piece closing the run.
            return Vec::new();
        };
        match board.get(tile) {
            None => return Vec::new(),
            Some(occupant) if occupant == side => return run,
            Some(_) => run.push(tile),
        }
    }
}

/// The other tile orthogonally adjacent to a corner tile, ie, the one that is
/// not `flanker`. Each corner has exactly two such neighbours.
fn corner_closer(board: &Board, corner: Tile, flanker: Tile) -> Option<Tile> {
    for dir in DIRECTIONS {
        if let Some(neighbour) = board.coords_to_tile(Coords::from(corner) + dir) {
            if neighbour != flanker {
                return Some(neighbour);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use crate::board::Board;
    use crate::game::capture::get_captures;
    use crate::pieces::Side;
    use crate::play::Play;
    use crate::tiles::Tile;

    /// Board and play are given as they stand *after* the piece has moved.
    fn captures(board_str: &str, mover: Side, play_str: &str) -> HashSet<Tile> {
        let board = Board::from_str(board_str).unwrap();
        let play = Play::from_str(play_str).unwrap();
        get_captures(&board, mover, play)
    }

    #[test]
    fn test_simple_sandwich() {
        // Black lands at E3; the Red at E4 is held against the Black at E5.
        assert_eq!(
            captures("9/9/9/9/2brb4/9/9/9/9", Side::Black, "g3-e3"),
            HashSet::from([Tile::new(4, 3)])
        );
        // Same position with colours swapped.
        assert_eq!(
            captures("9/9/9/9/2rbr4/9/9/9/9", Side::Red, "g3-e3"),
            HashSet::from([Tile::new(4, 3)])
        );
    }

    #[test]
    fn test_multi_piece_run() {
        // Three Reds in a row, closed at the far end.
        assert_eq!(
            captures("9/9/9/9/4brrrb/9/9/9/9", Side::Black, "g5-e5"),
            HashSet::from([Tile::new(4, 5), Tile::new(4, 6), Tile::new(4, 7)])
        );
    }

    #[test]
    fn test_captures_in_multiple_directions() {
        // Black lands at E5 between two held Reds, with a third Red held
        // above: all three fall to the one play.
        assert_eq!(
            captures(
                "9/9/4b4/4r4/2brbrb2/9/9/9/9",
                Side::Black,
                "g5-e5"
            ),
            HashSet::from([Tile::new(4, 3), Tile::new(4, 5), Tile::new(3, 4)])
        );
    }

    #[test]
    fn test_no_capture_on_open_run() {
        // A gap before the closing piece: nothing is captured.
        assert_eq!(
            captures("9/9/9/9/2br1b3/9/9/9/9", Side::Black, "g3-e3"),
            HashSet::new()
        );
        // No closing piece at all.
        assert_eq!(
            captures("9/9/9/9/2br5/9/9/9/9", Side::Black, "g3-e3"),
            HashSet::new()
        );
    }

    #[test]
    fn test_no_capture_against_plain_edge() {
        // Reds pinned against the right edge, but not in a corner: safe.
        assert_eq!(
            captures("9/9/9/9/6brr/9/9/9/9", Side::Black, "g7-e7"),
            HashSet::new()
        );
    }

    #[test]
    fn test_no_self_capture() {
        // A run of the mover's own pieces is never removed.
        assert_eq!(
            captures("9/9/9/9/2bbb4/9/9/9/9", Side::Black, "g3-e3"),
            HashSet::new()
        );
        // A longer opposing run with nothing closing it is safe too.
        assert_eq!(
            captures("9/9/9/9/2brr4/9/9/9/9", Side::Black, "g3-e3"),
            HashSet::new()
        );
    }

    #[test]
    fn test_no_capture_backwards_along_travel() {
        // A Red directly behind the arrival tile, flanked on both sides,
        // survives: the direction the piece came from is never scanned.
        assert_eq!(
            captures("9/9/9/9/4b4/4r4/4b4/9/9", Side::Black, "g5-e5"),
            HashSet::new()
        );
        // The same position reached sideways does capture it.
        assert_eq!(
            captures("9/9/9/9/4b4/4r4/4b4/9/9", Side::Black, "e9-e5"),
            HashSet::from([Tile::new(5, 4)])
        );
    }

    #[test]
    fn test_corner_captures() {
        // Top left, flanked from below, closed from the side.
        assert_eq!(
            captures("rb7/b8/9/9/9/9/9/9/9", Side::Black, "d1-b1"),
            HashSet::from([Tile::new(0, 0)])
        );
        // Top left, flanked from the side, closed from below.
        assert_eq!(
            captures("rb7/b8/9/9/9/9/9/9/9", Side::Black, "a6-a2"),
            HashSet::from([Tile::new(0, 0)])
        );
        // Top right.
        assert_eq!(
            captures("7br/8b/9/9/9/9/9/9/9", Side::Black, "d9-b9"),
            HashSet::from([Tile::new(0, 8)])
        );
        // Bottom left, Red doing the capturing.
        assert_eq!(
            captures("9/9/9/9/9/9/9/r8/br7", Side::Red, "e1-h1"),
            HashSet::from([Tile::new(8, 0)])
        );
        // Bottom right.
        assert_eq!(
            captures("9/9/9/9/9/9/9/8r/7rb", Side::Red, "i4-i8"),
            HashSet::from([Tile::new(8, 8)])
        );
    }

    #[test]
    fn test_corner_without_closer() {
        // Nothing on the corner's other neighbour: the corner piece is safe.
        assert_eq!(
            captures("r8/b8/9/9/9/9/9/9/9", Side::Black, "d1-b1"),
            HashSet::new()
        );
        // An opposing piece there does not close either.
        assert_eq!(
            captures("rr7/b8/9/9/9/9/9/9/9", Side::Black, "d1-b1"),
            HashSet::new()
        );
    }

    #[test]
    fn test_corner_run_of_two_survives() {
        // Two pieces tucked into the corner file: the run runs off the edge
        // unclosed, so the corner rule does not apply to it.
        assert_eq!(
            captures("rb7/r8/b8/9/9/9/9/9/9", Side::Black, "e1-c1"),
            HashSet::new()
        );
    }
}

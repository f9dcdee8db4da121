//! Move legality and flip execution
//!
//! A move is legal iff, in at least one of the 8 compass directions, it
//! brackets a non-empty contiguous run of opponent discs with one of the
//! mover's own discs. The flip scan reuses the same per-direction walk, so a
//! direction flips exactly when it satisfied the legality condition.

use crate::board::{Board, Pos, Side};
use crate::error::EngineError;

/// Direction vectors for the legality/flip scans (8 compass directions)
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Check whether placing `side` at `pos` captures along one direction.
///
/// Walks outward from `pos`: the direction qualifies if it holds one or more
/// opponent discs immediately and contiguously, followed by a `side` disc
/// before the edge of the board.
fn captures_in_direction(board: &Board, pos: Pos, side: Side, dir: (i32, i32)) -> bool {
    let (dr, dc) = dir;
    let own = side.cell();
    let opponent = side.opponent().cell();

    let mut r = i32::from(pos.row) + dr;
    let mut c = i32::from(pos.col) + dc;
    let mut found_opponent = false;

    while Pos::is_valid(r, c) {
        let cell = board.get(Pos::new(r as u8, c as u8));
        if cell == opponent {
            found_opponent = true;
            r += dr;
            c += dc;
        } else if cell == own {
            return found_opponent;
        } else {
            return false;
        }
    }

    false
}

/// Positions that would flip along one direction (empty if the direction
/// does not qualify).
pub fn captured_in_direction(board: &Board, pos: Pos, side: Side, dir: (i32, i32)) -> Vec<Pos> {
    let (dr, dc) = dir;
    let own = side.cell();
    let opponent = side.opponent().cell();

    let mut run = Vec::new();
    let mut r = i32::from(pos.row) + dr;
    let mut c = i32::from(pos.col) + dc;

    while Pos::is_valid(r, c) {
        let p = Pos::new(r as u8, c as u8);
        let cell = board.get(p);
        if cell == opponent {
            run.push(p);
            r += dr;
            c += dc;
        } else if cell == own {
            return run;
        } else {
            break;
        }
    }

    Vec::new()
}

/// Check if placing `side` at `pos` is legal.
///
/// An occupied cell is never legal; otherwise the move must capture in at
/// least one direction. Never mutates the board.
pub fn is_legal_move(board: &Board, pos: Pos, side: Side) -> bool {
    if !board.is_empty(pos) {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&dir| captures_in_direction(board, pos, side, dir))
}

/// All legal moves for `side`, in row-major order.
///
/// The order is not semantically significant but is deterministic so that
/// search results are reproducible.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Pos> {
    let mut moves = Vec::new();
    for r in 0..crate::board::BOARD_SIZE as u8 {
        for c in 0..crate::board::BOARD_SIZE as u8 {
            let pos = Pos::new(r, c);
            if is_legal_move(board, pos, side) {
                moves.push(pos);
            }
        }
    }
    moves
}

/// Place a disc and flip every bracketed run, without a legality check.
///
/// Used by search after move generation, where legality is already known.
/// Returns a new board; the input board is left untouched.
pub fn play(board: &Board, pos: Pos, side: Side) -> Board {
    let mut next = board.clone();
    next.set(pos, side.cell());
    for &dir in &DIRECTIONS {
        // Scan the pre-move board: the placed disc only affects cells behind
        // the scan, never the outward run.
        for p in captured_in_direction(board, pos, side, dir) {
            next.set(p, side.cell());
        }
    }
    next
}

/// Apply a move for `side` at `pos`, producing the resulting board.
///
/// Rejects occupied cells and non-capturing placements with
/// [`EngineError::InvalidMove`]; the input board is never modified.
pub fn apply_move(board: &Board, pos: Pos, side: Side) -> Result<Board, EngineError> {
    if !is_legal_move(board, pos, side) {
        return Err(EngineError::InvalidMove {
            row: pos.row,
            col: pos.col,
        });
    }
    Ok(play(board, pos, side))
}

/// Checked entry point for caller-supplied coordinates (e.g. translated
/// pointer input). Out-of-bounds coordinates yield
/// [`EngineError::InvalidCoordinate`].
pub fn apply_move_at(board: &Board, row: i32, col: i32, side: Side) -> Result<Board, EngineError> {
    if !Pos::is_valid(row, col) {
        return Err(EngineError::InvalidCoordinate { row, col });
    }
    apply_move(board, Pos::new(row as u8, col as u8), side)
}

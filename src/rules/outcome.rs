//! Scoring and end-of-game detection

use std::cmp::Ordering;
use std::fmt;

use super::capture::is_legal_move;
use crate::board::{Board, Pos, Side, BOARD_SIZE};

/// Disc counts, (dark, light). Doubles as the end-of-game result and the
/// terminal heuristic for search.
#[inline]
pub fn score(board: &Board) -> (u8, u8) {
    board.disc_counts()
}

/// Check whether `side` has at least one legal move.
///
/// Cheaper than collecting the full move list when only the pass condition
/// matters.
pub fn has_any_move(board: &Board, side: Side) -> bool {
    for r in 0..BOARD_SIZE as u8 {
        for c in 0..BOARD_SIZE as u8 {
            if is_legal_move(board, Pos::new(r, c), side) {
                return true;
            }
        }
    }
    false
}

/// The game is over when neither side has a legal move. A full board is a
/// special case of this: no empty cell means no move for anyone.
pub fn is_game_over(board: &Board) -> bool {
    !has_any_move(board, Side::Dark) && !has_any_move(board, Side::Light)
}

/// Final result by majority disc count.
///
/// Equal counts are an explicit draw rather than a default winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    DarkWins,
    LightWins,
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::DarkWins => write!(f, "Dark wins"),
            Outcome::LightWins => write!(f, "Light wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Determine the result of a finished game from the disc counts.
pub fn outcome(board: &Board) -> Outcome {
    let (dark, light) = score(board);
    match dark.cmp(&light) {
        Ordering::Greater => Outcome::DarkWins,
        Ordering::Less => Outcome::LightWins,
        Ordering::Equal => Outcome::Draw,
    }
}

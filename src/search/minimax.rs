//! Minimax with alpha-beta pruning
//!
//! Depth-bounded adversarial search over the board model. The terminal value
//! is the disc count of the side to move at that node, a plain material
//! count rather than a positional evaluator. Pruning changes which moves get
//! explored, never the value returned.
//!
//! There is no iterative deepening, no transposition table, and no
//! randomness: each invocation recomputes the search from scratch on the
//! calling thread and runs to completion before returning. Recursion depth is
//! bounded by the configured search depth.

use crate::board::{Board, Pos, Side};
use crate::rules::{legal_moves, play, score};

/// Default search depth; kept shallow for interactive latency.
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

/// Result of a search: the value at the root and the move achieving it.
///
/// `best_move` is `None` only when the terminal condition fired at the root,
/// i.e. the side to move had no legal move or the depth budget was zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Pos>,
}

/// Search with a full alpha-beta window for `side` to move.
#[must_use]
pub fn search(board: &Board, depth: u8, side: Side) -> SearchResult {
    minimax(board, depth, i32::MIN, i32::MAX, true, side)
}

/// One ply of minimax with alpha-beta pruning.
///
/// `maximizing` flips at each ply together with the side to move. Scores are
/// compared with strict inequality, so on ties the first move in generation
/// order (row-major) wins.
pub fn minimax(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    side: Side,
) -> SearchResult {
    let moves = legal_moves(board, side);
    if depth == 0 || moves.is_empty() {
        let (dark, light) = score(board);
        let count = match side {
            Side::Dark => dark,
            Side::Light => light,
        };
        return SearchResult {
            score: i32::from(count),
            best_move: None,
        };
    }

    let mut best_move = None;
    if maximizing {
        let mut best = i32::MIN;
        for mv in moves {
            let child = play(board, mv, side);
            let value = minimax(&child, depth - 1, alpha, beta, false, side.opponent()).score;
            if value > best {
                best = value;
                best_move = Some(mv);
            }
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        SearchResult {
            score: best,
            best_move,
        }
    } else {
        let mut best = i32::MAX;
        for mv in moves {
            let child = play(board, mv, side);
            let value = minimax(&child, depth - 1, alpha, beta, true, side.opponent()).score;
            if value < best {
                best = value;
                best_move = Some(mv);
            }
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        SearchResult {
            score: best,
            best_move,
        }
    }
}

//! Reversi game-state engine with a minimax AI
//!
//! Board representation, legal-move computation, move application with disc
//! flipping, and depth-bounded minimax with alpha-beta pruning for the
//! automated player. Rendering and input handling are left to the caller:
//! the engine is a pure, synchronous library the presentation layer drives.
//!
//! # Architecture
//!
//! - [`board`]: 8x8 grid, sides, positions
//! - [`rules`]: legality, flip execution, scoring, outcome
//! - [`search`]: minimax with alpha-beta pruning
//! - [`engine`]: AI facade with a configurable search depth
//! - [`game`]: turn order, the pass rule, restart as an explicit reset
//! - [`error`]: recoverable engine errors
//!
//! # Quick Start
//!
//! ```
//! use reversi::{AiEngine, Board, Side};
//! use reversi::rules::apply_move;
//!
//! let board = Board::new();
//! let engine = AiEngine::default();
//!
//! // AI plays Dark; a `None` best move would mean Dark has to pass.
//! let result = engine.choose_move(&board, Side::Dark);
//! let mv = result.best_move.expect("the opening position has moves");
//! let board = apply_move(&board, mv, Side::Dark).expect("searched moves are legal");
//! assert_eq!(board.disc_counts(), (4, 1));
//! ```
//!
//! Boards are cheap value types: applying a move produces a fresh board and
//! leaves every previously held board intact, which is what lets the search
//! explore many futures from a shared ancestor.

pub mod board;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, Side, BOARD_SIZE};
pub use engine::AiEngine;
pub use error::{EngineError, EngineResult};
pub use game::GameState;
pub use rules::Outcome;
pub use search::{SearchResult, DEFAULT_SEARCH_DEPTH};

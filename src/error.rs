//! Error types for the Reversi engine
//!
//! Every error here is local and recoverable by the caller; a side with no
//! legal move is the pass condition, not an error.

use thiserror::Error;

/// Errors surfaced by the engine
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Placement on an occupied cell or one with no capturing line
    #[error("invalid move at ({row}, {col}): no capturing line")]
    InvalidMove { row: u8, col: u8 },

    /// Coordinates outside the 8x8 board, a caller error distinct from a
    /// merely illegal placement
    #[error("coordinate ({row}, {col}) is off the board")]
    InvalidCoordinate { row: i32, col: i32 },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

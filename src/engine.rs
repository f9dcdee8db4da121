//! AI engine facade
//!
//! Thin wrapper over the minimax search holding the configured depth. The
//! search is synchronous and runs to completion on the calling thread; the
//! result always reflects a full search to the configured depth.

use crate::board::{Board, Side};
use crate::search::{search, SearchResult, DEFAULT_SEARCH_DEPTH};

/// Move selector for the automated side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiEngine {
    depth: u8,
}

impl AiEngine {
    /// Create an engine searching to the given depth.
    #[must_use]
    pub fn new(depth: u8) -> Self {
        Self { depth }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Pick a move for `side`.
    ///
    /// `best_move` is `None` when `side` has no legal move; callers must
    /// treat that as the pass condition, not an error.
    #[must_use]
    pub fn choose_move(&self, board: &Board, side: Side) -> SearchResult {
        search(board, self.depth, side)
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

//! Adversarial search for the automated player

pub mod minimax;

// Re-exports
pub use minimax::{minimax, search, SearchResult, DEFAULT_SEARCH_DEPTH};

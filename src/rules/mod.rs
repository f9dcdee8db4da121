//! Game rules for Reversi
//!
//! This module implements the rule set:
//! - Move legality (a placement must bracket at least one opponent disc)
//! - Flip execution, mirroring the legality scan per direction
//! - Scoring, end-of-game detection, and the final outcome

pub mod capture;
pub mod outcome;

// Re-exports for convenient access
pub use capture::{
    apply_move, apply_move_at, captured_in_direction, is_legal_move, legal_moves, play,
};
pub use outcome::{has_any_move, is_game_over, outcome, score, Outcome};

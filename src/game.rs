//! Game state management: turn order, the pass rule, and end of game
//!
//! The presentation layer drives this state machine: it feeds translated
//! input to [`GameState::try_move`] for the interactive side and calls
//! [`GameState::ai_move`] for the automated side. Pass handling lives here so
//! the engine never raises a fault for a side with no legal move.

use crate::board::{Board, Pos, Side};
use crate::engine::AiEngine;
use crate::error::EngineError;
use crate::rules::{apply_move, has_any_move, outcome, Outcome};
use crate::search::SearchResult;

/// State of one game in progress
pub struct GameState {
    pub board: Board,
    pub current_turn: Side,
    pub over: Option<Outcome>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Side)>,
    engine: AiEngine,
}

impl GameState {
    /// Start a game with the default engine. Dark moves first.
    pub fn new() -> Self {
        Self::with_engine(AiEngine::default())
    }

    pub fn with_engine(engine: AiEngine) -> Self {
        Self {
            board: Board::new(),
            current_turn: Side::Dark,
            over: None,
            last_move: None,
            move_history: Vec::new(),
            engine,
        }
    }

    /// Restore the initial position.
    ///
    /// Restart is an explicit state reset, never a re-entry of the game
    /// loop, so repeated restarts cost no stack.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_turn = Side::Dark;
        self.over = None;
        self.last_move = None;
        self.move_history.clear();
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.over.is_some()
    }

    /// Disc counts, (dark, light)
    #[inline]
    pub fn score(&self) -> (u8, u8) {
        self.board.disc_counts()
    }

    /// Apply a move for the side to move.
    ///
    /// Illegal input is rejected and leaves the state untouched; the caller
    /// is expected to ignore the rejection rather than abort.
    pub fn try_move(&mut self, pos: Pos) -> Result<(), EngineError> {
        if self.over.is_some() {
            return Err(EngineError::InvalidMove {
                row: pos.row,
                col: pos.col,
            });
        }
        let next = apply_move(&self.board, pos, self.current_turn)?;
        self.record(next, pos);
        Ok(())
    }

    /// Run the search for the side to move and apply its choice.
    ///
    /// Returns the raw search result. `best_move` can only be `None` when
    /// the engine was configured with a zero depth budget; the turn is left
    /// unchanged in that case.
    pub fn ai_move(&mut self) -> SearchResult {
        let result = self.engine.choose_move(&self.board, self.current_turn);
        if self.over.is_none() {
            if let Some(pos) = result.best_move {
                let next = crate::rules::play(&self.board, pos, self.current_turn);
                self.record(next, pos);
            }
        }
        result
    }

    fn record(&mut self, next: Board, pos: Pos) {
        let side = self.current_turn;
        self.board = next;
        self.move_history.push((pos, side));
        self.last_move = Some(pos);
        self.advance_turn();
    }

    /// Hand the turn over, applying the pass rule: a side with no legal move
    /// forfeits the turn without moving, and the game ends when neither side
    /// can move.
    fn advance_turn(&mut self) {
        let next = self.current_turn.opponent();
        if has_any_move(&self.board, next) {
            self.current_turn = next;
        } else if !has_any_move(&self.board, self.current_turn) {
            self.over = Some(outcome(&self.board));
        }
        // Otherwise the opponent passes and the mover goes again.
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::testutil::board_from;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.current_turn, Side::Dark);
        assert_eq!(game.score(), (2, 2));
        assert!(!game.is_over());
        assert!(game.move_history.is_empty());
    }

    #[test]
    fn test_try_move_switches_turn() {
        let mut game = GameState::new();
        game.try_move(Pos::new(2, 3)).unwrap();

        assert_eq!(game.current_turn, Side::Light);
        assert_eq!(game.score(), (4, 1));
        assert_eq!(game.last_move, Some(Pos::new(2, 3)));
        assert_eq!(game.move_history, vec![(Pos::new(2, 3), Side::Dark)]);
    }

    #[test]
    fn test_try_move_rejects_illegal_and_keeps_state() {
        let mut game = GameState::new();
        let err = game.try_move(Pos::new(0, 0)).unwrap_err();
        assert_eq!(err, EngineError::InvalidMove { row: 0, col: 0 });

        assert_eq!(game.current_turn, Side::Dark);
        assert_eq!(game.score(), (2, 2));
        assert!(game.move_history.is_empty());
    }

    #[test]
    fn test_try_move_rejected_after_game_over() {
        let mut game = GameState::new();
        game.over = Some(Outcome::Draw);
        assert!(game.try_move(Pos::new(2, 3)).is_err());
    }

    #[test]
    fn test_reset() {
        let mut game = GameState::new();
        game.try_move(Pos::new(2, 3)).unwrap();
        game.reset();

        assert_eq!(game.current_turn, Side::Dark);
        assert_eq!(game.score(), (2, 2));
        assert!(!game.is_over());
        assert!(game.move_history.is_empty());
        assert_eq!(game.last_move, None);
    }

    #[test]
    fn test_ai_move_plays_and_switches() {
        let mut game = GameState::new();
        let result = game.ai_move();
        let mv = result.best_move.expect("opening position has moves");

        assert_eq!(game.last_move, Some(mv));
        assert_eq!(game.current_turn, Side::Light);
        assert_eq!(game.score(), (4, 1));
    }

    #[test]
    fn test_turn_passes_back_when_opponent_is_stuck() {
        // Dark to move. Light has no legal move anywhere, while Dark can
        // capture at (1,0) and later at (5,6). After Dark plays (1,0) the
        // turn must pass straight back to Dark.
        let board = board_from(
            "L D D D D D D D
             . . . . . . . .
             L . . . . . . .
             D . . . . . . .
             D . . . . . . .
             D D D D D L . .
             D . . . . . . .
             D . . . . . . .",
        );
        assert!(!has_any_move(&board, Side::Light));
        assert!(has_any_move(&board, Side::Dark));

        let mut game = GameState::new();
        game.board = board;
        game.current_turn = Side::Dark;

        game.try_move(Pos::new(1, 0)).unwrap();
        assert_eq!(game.current_turn, Side::Dark, "Light passes");
        assert!(!game.is_over());
        assert_eq!(game.board.get(Pos::new(2, 0)), Cell::Dark);

        // Dark's remaining capture finishes the game: after it neither side
        // can move and Dark holds the majority.
        game.try_move(Pos::new(5, 6)).unwrap();
        assert_eq!(game.over, Some(Outcome::DarkWins));
    }

    #[test]
    fn test_full_selfplay_game_terminates() {
        let mut game = GameState::with_engine(AiEngine::new(1));
        // A game adds at least one disc per move, so 60 moves is the cap.
        for _ in 0..70 {
            if game.is_over() {
                break;
            }
            let result = game.ai_move();
            assert!(result.best_move.is_some());
        }
        assert!(game.is_over());
        let (dark, light) = game.score();
        assert!(dark + light <= 64);
        match game.over.unwrap() {
            Outcome::DarkWins => assert!(dark > light),
            Outcome::LightWins => assert!(light > dark),
            Outcome::Draw => assert_eq!(dark, light),
        }
    }
}

//! Shared helpers for unit tests

use crate::board::{Board, Cell, Pos};

/// Build a board from an 8-line diagram. Tokens are `D` (Dark), `L` (Light),
/// anything else empty; every one of the 64 cells must be given.
pub(crate) fn board_from(diagram: &str) -> Board {
    let mut tokens = diagram.split_whitespace();
    let mut board = Board::new();
    for r in 0..8u8 {
        for c in 0..8u8 {
            let cell = match tokens.next() {
                Some("D") => Cell::Dark,
                Some("L") => Cell::Light,
                Some(_) => Cell::Empty,
                None => panic!("diagram too short at ({r}, {c})"),
            };
            board.set(Pos::new(r, c), cell);
        }
    }
    assert!(tokens.next().is_none(), "diagram has trailing tokens");
    board
}

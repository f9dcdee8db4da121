//! Board grid with the standard Reversi starting position

use std::fmt;

use super::{Cell, Pos, BOARD_SIZE};

/// 8x8 grid of cells.
///
/// Applying a move never mutates an existing board; the rules layer clones
/// the grid and flips discs on the copy, so callers keep valid references to
/// every prior position (search explores many futures from one ancestor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board with the standard starting position:
    /// Light on (3,3) and (4,4), Dark on (3,4) and (4,3).
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        cells[3][3] = Cell::Light;
        cells[3][4] = Cell::Dark;
        cells[4][3] = Cell::Dark;
        cells[4][4] = Cell::Light;
        Self { cells }
    }

    /// Get the cell at a position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Set the cell at a position
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    /// Check if a position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Restore the starting position
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Count discs of each color, (dark, light)
    pub fn disc_counts(&self) -> (u8, u8) {
        let mut dark = 0;
        let mut light = 0;
        for row in &self.cells {
            for cell in row {
                match cell {
                    Cell::Dark => dark += 1,
                    Cell::Light => light += 1,
                    Cell::Empty => {}
                }
            }
        }
        (dark, light)
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> u8 {
        let (dark, light) = self.disc_counts();
        super::TOTAL_CELLS as u8 - dark - light
    }

    /// Check whether every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2 3 4 5 6 7")?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{r} ")?;
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Dark => 'D',
                    Cell::Light => 'L',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Fixed 3x3 grid of cells

use super::{Cell, Player, Pos, BOARD_SIZE};

/// Game board
///
/// Always 3x3; never resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get cell contents at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Place a player's mark
    ///
    /// Overwrites whatever is in the cell; callers check `is_empty` first.
    #[inline]
    pub fn place_mark(&mut self, pos: Pos, player: Player) {
        self.cells[pos.row as usize][pos.col as usize] = player.mark();
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&c| c != Cell::Empty))
    }

    /// Check if no cell is occupied
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&c| c == Cell::Empty))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

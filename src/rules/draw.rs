//! Draw detection
//!
//! A draw is a fully occupied board. Callers must check for a win first,
//! so a full board containing a winning line reports as a win, never a
//! draw.

use crate::board::{Board, Cell, Pos, BOARD_SIZE};

/// Check if the board is fully occupied
pub fn is_draw(board: &Board) -> bool {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if board.get(Pos::new(row as u8, col as u8)) == Cell::Empty {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    #[test]
    fn test_empty_board_not_draw() {
        let board = Board::new();
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_one_empty_cell_not_draw() {
        let mut board = Board::new();
        for idx in 0..8 {
            board.place_mark(Pos::from_index(idx), Player::X);
        }
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_board_is_draw() {
        let mut board = Board::new();
        // X O X / X O O / O X X, no line for either player
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
        ];
        for (idx, player) in marks.into_iter().enumerate() {
            board.place_mark(Pos::from_index(idx), player);
        }
        assert!(is_draw(&board));
        assert!(!crate::rules::has_win(&board, Player::X));
        assert!(!crate::rules::has_win(&board, Player::O));
    }
}

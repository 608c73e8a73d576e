//! Win condition checking
//!
//! A player wins by occupying all three cells of one line. There are 8
//! lines in total: 3 rows, 3 columns, 2 diagonals.

use crate::board::{Board, Player, Pos};

/// The 8 winning lines, enumerated statically
pub const LINES: [[Pos; 3]; 8] = [
    // Rows
    [Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)],
    [Pos::new(1, 0), Pos::new(1, 1), Pos::new(1, 2)],
    [Pos::new(2, 0), Pos::new(2, 1), Pos::new(2, 2)],
    // Columns
    [Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0)],
    [Pos::new(0, 1), Pos::new(1, 1), Pos::new(2, 1)],
    [Pos::new(0, 2), Pos::new(1, 2), Pos::new(2, 2)],
    // Diagonals
    [Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2)],
    [Pos::new(0, 2), Pos::new(1, 1), Pos::new(2, 0)],
];

/// Find a winning line for the given player if one exists
///
/// Returns the three positions of the first fully occupied line so the
/// UI can highlight it, `None` otherwise.
pub fn winning_line(board: &Board, player: Player) -> Option<[Pos; 3]> {
    let mark = player.mark();
    LINES
        .iter()
        .find(|line| line.iter().all(|&pos| board.get(pos) == mark))
        .copied()
}

/// Check if the given player holds a winning line
#[inline]
pub fn has_win(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_win() {
        let mut board = Board::new();
        for col in 0..3 {
            board.place_mark(Pos::new(0, col), Player::X);
        }
        assert!(has_win(&board, Player::X));
        assert!(!has_win(&board, Player::O));
    }

    #[test]
    fn test_column_win() {
        let mut board = Board::new();
        for row in 0..3 {
            board.place_mark(Pos::new(row, 1), Player::O);
        }
        assert!(has_win(&board, Player::O));
        assert!(!has_win(&board, Player::X));
    }

    #[test]
    fn test_main_diagonal_win() {
        let mut board = Board::new();
        for i in 0..3 {
            board.place_mark(Pos::new(i, i), Player::X);
        }
        assert!(has_win(&board, Player::X));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let mut board = Board::new();
        for i in 0..3 {
            board.place_mark(Pos::new(i, 2 - i), Player::O);
        }
        assert!(has_win(&board, Player::O));
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.place_mark(pos, Player::X);
            }
            assert!(has_win(&board, Player::X), "line {line:?} should win");
        }
    }

    #[test]
    fn test_mixed_line_not_win() {
        let mut board = Board::new();
        board.place_mark(Pos::new(0, 0), Player::X);
        board.place_mark(Pos::new(0, 1), Player::O);
        board.place_mark(Pos::new(0, 2), Player::X);
        assert!(!has_win(&board, Player::X));
        assert!(!has_win(&board, Player::O));
    }

    #[test]
    fn test_two_in_a_row_not_win() {
        let mut board = Board::new();
        board.place_mark(Pos::new(1, 0), Player::X);
        board.place_mark(Pos::new(1, 1), Player::X);
        assert!(!has_win(&board, Player::X));
    }

    #[test]
    fn test_empty_board_no_win() {
        let board = Board::new();
        assert!(!has_win(&board, Player::X));
        assert!(!has_win(&board, Player::O));
    }

    #[test]
    fn test_winning_line_positions() {
        let mut board = Board::new();
        for row in 0..3 {
            board.place_mark(Pos::new(row, 2), Player::X);
        }
        let line = winning_line(&board, Player::X).unwrap();
        assert_eq!(line, [Pos::new(0, 2), Pos::new(1, 2), Pos::new(2, 2)]);
        assert!(winning_line(&board, Player::O).is_none());
    }
}

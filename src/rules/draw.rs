//! Draw detection logic for square boards.

use crate::rules::win::evaluate;
use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is a draw: full with no winning line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && evaluate(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(3)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3);
        board.set(4, Square::Occupied(Player::X)).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(3);
        for pos in 0..9 {
            board.set(pos, Square::Occupied(Player::X)).unwrap();
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O - full with no line
        let squares = "XOXOXXOXO"
            .chars()
            .map(|c| match c {
                'X' => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            })
            .collect();
        let board = Board::from_squares(squares).unwrap();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new(3);
        for (pos, player) in [
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::O),
            (4, Player::O),
        ] {
            board.set(pos, Square::Occupied(player)).unwrap();
        }
        assert!(!is_draw(&board));
    }
}

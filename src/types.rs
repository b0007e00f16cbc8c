//! Core domain types for the game board.

use crate::error::BoardError;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Player to move at the given history step.
    ///
    /// X moves on even steps, O on odd steps.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// A square board with a runtime side length.
///
/// Squares are stored in row-major order; index `i` sits at column
/// `i % side` and row `i / side`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: Vec<Square>,
    /// Side length of the board.
    side: usize,
}

impl Board {
    /// Creates a new empty board with the given side length.
    pub fn new(side: usize) -> Self {
        Self {
            squares: vec![Square::Empty; side * side],
            side,
        }
    }

    /// Builds a board from a flat snapshot, inferring the side length.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotSquare`] if the snapshot length has no
    /// exact integer square root.
    pub fn from_squares(squares: Vec<Square>) -> Result<Self, BoardError> {
        let side = exact_side(squares.len()).ok_or(BoardError::NotSquare(squares.len()))?;
        Ok(Self { squares, side })
    }

    /// Returns the side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the number of squares (`side * side`).
    pub fn cell_count(&self) -> usize {
        self.squares.len()
    }

    /// Gets the square at the given index.
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Sets the square at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if the index does not address
    /// a square on this board.
    pub fn set(&mut self, pos: usize, square: Square) -> Result<(), BoardError> {
        if pos >= self.squares.len() {
            return Err(BoardError::OutOfBounds {
                index: pos,
                cells: self.squares.len(),
            });
        }
        self.squares[pos] = square;
        Ok(())
    }

    /// Checks if the square at the given index is empty.
    ///
    /// Out-of-bounds indices are reported as not empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Counts the squares occupied by the given player.
    pub fn count_of(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based index.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..self.side {
            for col in 0..self.side {
                let pos = row * self.side + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < self.side - 1 {
                    result.push('|');
                }
            }
            if row < self.side - 1 {
                result.push('\n');
                result.push_str(&vec!["-"; self.side].join("+"));
                result.push('\n');
            }
        }
        result
    }
}

/// Exact integer square root, or `None` when `len` is not a perfect square.
fn exact_side(len: usize) -> Option<usize> {
    let mut side = 0;
    while side * side < len {
        side += 1;
    }
    (side * side == len).then_some(side)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_player_parity() {
        assert_eq!(Player::for_step(0), Player::X);
        assert_eq!(Player::for_step(1), Player::O);
        assert_eq!(Player::for_step(6), Player::X);
        assert_eq!(Player::for_step(7), Player::O);
    }

    #[test]
    fn test_from_squares_infers_side() {
        let board = Board::from_squares(vec![Square::Empty; 16]).unwrap();
        assert_eq!(board.side(), 4);
        assert_eq!(board.cell_count(), 16);
    }

    #[test]
    fn test_from_squares_rejects_non_square() {
        let result = Board::from_squares(vec![Square::Empty; 5]);
        assert_eq!(result.unwrap_err(), BoardError::NotSquare(5));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new(2);
        let result = board.set(4, Square::Occupied(Player::X));
        assert_eq!(
            result.unwrap_err(),
            BoardError::OutOfBounds { index: 4, cells: 4 }
        );
    }

    #[test]
    fn test_is_empty_out_of_bounds() {
        let board = Board::new(2);
        assert!(board.is_empty(3));
        assert!(!board.is_empty(4));
    }

    #[test]
    fn test_display_marks_and_indices() {
        let mut board = Board::new(3);
        board.set(0, Square::Occupied(Player::X)).unwrap();
        board.set(4, Square::Occupied(Player::O)).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}

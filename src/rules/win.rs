//! Win detection logic for square boards.

use crate::error::BoardError;
use crate::rules::lines::{Line, candidate_lines};
use crate::types::{Board, Player, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A fully matched candidate line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct WinningLine {
    /// The player holding every square of the line.
    player: Player,
    /// Cell indices of the line, in board order.
    cells: Line,
}

/// Checks if there is a winner on the board.
///
/// Candidate lines are scanned in generation order (rows, columns,
/// main diagonal, anti-diagonal) and the first line whose squares all
/// hold the same player is returned. `None` otherwise.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<WinningLine> {
    for line in candidate_lines(board.side()) {
        let player = match line.first().and_then(|&i| board.get(i)) {
            Some(Square::Occupied(player)) => player,
            _ => continue,
        };
        if line
            .iter()
            .all(|&i| board.get(i) == Some(Square::Occupied(player)))
        {
            return Some(WinningLine {
                player,
                cells: line,
            });
        }
    }
    None
}

/// Checks a flat snapshot for a winner, inferring the side length.
///
/// # Errors
///
/// Returns [`BoardError::NotSquare`] if the snapshot length has no
/// exact integer square root.
#[instrument(skip(cells))]
pub fn evaluate_cells(cells: &[Square]) -> Result<Option<WinningLine>, BoardError> {
    let board = Board::from_squares(cells.to_vec())?;
    Ok(evaluate(&board))
}

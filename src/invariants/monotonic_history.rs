//! Monotonic history invariant: marks never retract between snapshots.

use super::Invariant;
use crate::game::Game;
use crate::types::Square;

/// Invariant: History snapshots are monotonic.
///
/// Each record adds exactly one mark to its predecessor; a square that
/// is occupied in one snapshot holds the same mark in every later
/// snapshot of the branch.
pub struct MonotonicHistoryInvariant;

impl Invariant<Game> for MonotonicHistoryInvariant {
    fn holds(game: &Game) -> bool {
        for pair in game.history().records().windows(2) {
            let (prev, next) = (pair[0].board(), pair[1].board());

            if prev.cell_count() != next.cell_count() {
                return false;
            }

            let mut added = 0;
            for (before, after) in prev.squares().iter().zip(next.squares()) {
                match (before, after) {
                    (Square::Occupied(a), Square::Occupied(b)) if a == b => {}
                    (Square::Occupied(_), _) => return false,
                    (Square::Empty, Square::Occupied(_)) => added += 1,
                    (Square::Empty, Square::Empty) => {}
                }
            }
            if added != 1 {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "History snapshots are monotonic (one new mark per step, none retracted)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Record;
    use crate::types::{Board, Player};

    #[test]
    fn test_fresh_game_holds() {
        let game = Game::new(3);
        assert!(MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_moves_hold() {
        let mut game = Game::new(3);
        assert!(game.play(0));
        assert!(game.play(4));
        assert!(game.play(8));
        assert!(MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_branch_discard_holds() {
        let mut game = Game::new(3);
        assert!(game.play(0));
        assert!(game.play(4));
        game.jump_to(1).unwrap();
        assert!(game.play(8));
        assert!(MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_retracted_mark_violates() {
        let mut game = Game::new(3);
        assert!(game.play(4));

        // Append a record whose snapshot drops the existing mark.
        let mut board = Board::new(3);
        board.set(0, Square::Occupied(Player::O)).unwrap();
        game.step = game.history.push(Record::new(board, 1, 1));

        assert!(!MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_double_mark_violates() {
        let mut game = Game::new(3);

        // Append a record that adds two marks in a single step.
        let mut board = Board::new(3);
        board.set(0, Square::Occupied(Player::X)).unwrap();
        board.set(1, Square::Occupied(Player::O)).unwrap();
        game.step = game.history.push(Record::new(board, 2, 1));

        assert!(!MonotonicHistoryInvariant::holds(&game));
    }
}

//! History consistency invariant: the record sequence is well-formed.

use super::Invariant;
use crate::game::Game;
use crate::types::Square;

/// Invariant: The history is rooted and the step pointer stays inside it.
///
/// The first record is the empty board with coordinates `(0, 0)`, every
/// record is a board of the game's side length, and the current step
/// addresses a recorded entry.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let records = game.history().records();

        let Some(root) = records.first() else {
            return false;
        };
        if !root.board().squares().iter().all(|s| *s == Square::Empty) {
            return false;
        }
        if (*root.column(), *root.row()) != (0, 0) {
            return false;
        }

        if records.iter().any(|r| r.board().side() != game.side()) {
            return false;
        }

        game.step() < records.len()
    }

    fn description() -> &'static str {
        "History is rooted at the empty board and the step is in range"
    }
}

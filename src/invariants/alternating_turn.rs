//! Alternating turn invariant: mark counts follow step parity.

use super::Invariant;
use crate::game::Game;
use crate::types::Player;
use strum::IntoEnumIterator;

/// Invariant: Players alternate turns.
///
/// The record at step `s` holds `ceil(s / 2)` X marks and
/// `floor(s / 2)` O marks: X moves on even steps, O on odd steps, with
/// no step skipped.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        for (step, record) in game.history().records().iter().enumerate() {
            for player in Player::iter() {
                let expected = match player {
                    Player::X => step.div_ceil(2),
                    Player::O => step / 2,
                };
                if record.board().count_of(player) != expected {
                    return false;
                }
            }
        }

        true
    }

    fn description() -> &'static str {
        "Players alternate turns (X on even steps, O on odd steps)"
    }
}

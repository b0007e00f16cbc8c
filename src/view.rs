//! Derived presentation surface for an external renderer.
//!
//! The core has no knowledge of when it is rendered. After every
//! mutating operation the presentation layer rebuilds its widgets from
//! a fresh [`GameView`]. The renderer is expected to:
//!
//! - paint a `side` by `side` grid from `cells`, highlighting the
//!   indices listed in `winning_cells`,
//! - render `moves` in the order given (already honoring the reversed
//!   flag), visually distinguishing the entry whose `current` flag is
//!   set,
//! - route interaction back to [`Game::play`](crate::Game::play),
//!   [`Game::jump_to`](crate::Game::jump_to) and
//!   [`Game::toggle_reversed`](crate::Game::toggle_reversed).
//!
//! Every view type serializes, so the contract works across process or
//! language boundaries as well as in-process.

use crate::game::Game;
use crate::rules::Line;
use crate::types::Square;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveEntry {
    /// Step this entry jumps to.
    step: usize,
    /// 1-based column of the move (0 for the initial entry).
    column: usize,
    /// 1-based row of the move (0 for the initial entry).
    row: usize,
    /// Whether this entry is the current step.
    current: bool,
}

impl MoveEntry {
    /// Label for the jump control, e.g. `Go to move #3 (1, 2)`.
    pub fn label(&self) -> String {
        if self.step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{} ({}, {})", self.step, self.column, self.row)
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    /// Squares of the current board in row-major order.
    cells: Vec<Square>,
    /// Side length of the board.
    side: usize,
    /// Cell indices to highlight when the game is won.
    winning_cells: Option<Line>,
    /// Move list entries, ordered per the reversed flag.
    moves: Vec<MoveEntry>,
    /// Display-order flag for the move list.
    reversed: bool,
    /// Status text for the current step.
    status: String,
}

impl GameView {
    #[instrument(skip(game))]
    pub(crate) fn of(game: &Game) -> Self {
        let mut moves: Vec<MoveEntry> = game
            .history()
            .records()
            .iter()
            .enumerate()
            .map(|(step, record)| MoveEntry {
                step,
                column: *record.column(),
                row: *record.row(),
                current: step == game.step(),
            })
            .collect();
        if game.reversed() {
            moves.reverse();
        }

        Self {
            cells: game.board().squares().to_vec(),
            side: game.side(),
            winning_cells: game.winning_line().map(|line| line.cells().clone()),
            moves,
            reversed: game.reversed(),
            status: game.status().to_string(),
        }
    }
}

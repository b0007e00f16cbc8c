//! The game engine: move application, time travel, and derived status.

use crate::error::StepError;
use crate::history::{History, Record};
use crate::invariants::assert_invariants;
use crate::rules::{WinningLine, draw, win};
use crate::types::{Board, Player, Square};
use crate::view::GameView;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Status derived from the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A winning line exists on the current board.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The current board is full with no winning line.
    #[display("Tie game!")]
    Draw,
    /// The game continues with the given player to move.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// A game of N-by-N tic-tac-toe with full move history.
///
/// The real state is the `(history, step)` pair: a linear sequence of
/// board snapshots and a pointer into it. Everything else - the active
/// player, the status text, the winning line - is derived. Jumping to a
/// past step and playing discards the abandoned future before appending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) history: History,
    pub(crate) step: usize,
    pub(crate) reversed: bool,
    pub(crate) side: usize,
}

impl Game {
    /// Creates a new game on an empty board of the given side length.
    ///
    /// The side must be at least 1.
    #[instrument]
    pub fn new(side: usize) -> Self {
        debug_assert!(side >= 1, "board side must be at least 1");
        Self {
            history: History::new(side),
            step: 0,
            reversed: false,
            side,
        }
    }

    /// Returns the side length of the board.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the current step into the history.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the display-order flag for the move list.
    pub fn reversed(&self) -> bool {
        self.reversed
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the board at the current step.
    pub fn board(&self) -> &Board {
        self.history[self.step].board()
    }

    /// Returns the player to move, derived from step parity.
    pub fn active_player(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Returns the winning line on the current board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        win::evaluate(self.board())
    }

    /// Plays the active player's mark at the given square index.
    ///
    /// Returns `false` without changing state when the game is already
    /// decided, the square is occupied, or the index is out of bounds.
    /// All three are reachable through normal interaction and are
    /// ignored rather than treated as errors. Otherwise the history is
    /// cut after the current step, the move is appended, and the step
    /// advances to it.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> bool {
        if self.winning_line().is_some() {
            debug!(index, "move ignored: game already decided");
            return false;
        }
        if !self.board().is_empty(index) {
            debug!(index, "move ignored: square unavailable");
            return false;
        }

        let mut board = self.board().clone();
        if board
            .set(index, Square::Occupied(self.active_player()))
            .is_err()
        {
            return false;
        }
        let column = index % self.side + 1;
        let row = index / self.side + 1;

        self.history.truncate_after(self.step);
        self.step = self.history.push(Record::new(board, column, row));
        assert_invariants(self);
        true
    }

    /// Moves the current step to the given point in history.
    ///
    /// The history itself is never modified; the active player follows
    /// from the parity of the new step.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::OutOfRange`] for steps beyond the recorded
    /// history. Out-of-range jumps are rejected rather than clamped.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), StepError> {
        if step >= self.history.len() {
            warn!(step, len = self.history.len(), "jump outside history");
            return Err(StepError::OutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.step = step;
        assert_invariants(self);
        Ok(())
    }

    /// Flips the display order of the move list.
    ///
    /// Purely a presentation flag; history and step are untouched.
    #[instrument(skip(self))]
    pub fn toggle_reversed(&mut self) {
        self.reversed = !self.reversed;
    }

    /// Checks if the current board is a draw.
    pub fn is_draw(&self) -> bool {
        draw::is_draw(self.board())
    }

    /// Returns the status derived from the current step.
    pub fn status(&self) -> Status {
        if let Some(line) = self.winning_line() {
            Status::Winner(*line.player())
        } else if self.is_draw() {
            Status::Draw
        } else {
            Status::NextPlayer(self.active_player())
        }
    }

    /// Derives the presentation snapshot for an external renderer.
    pub fn view(&self) -> GameView {
        GameView::of(self)
    }
}

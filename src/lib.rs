//! Pure N-by-N tic-tac-toe game logic with move history and time travel.
//!
//! The crate has two halves:
//!
//! - **Rules**: pure win/draw detection over square boards of any side
//!   length. Candidate lines (rows, columns, both diagonals) are derived
//!   from the side length, not hard-coded.
//! - **Game**: a move-history state machine. Every move records a board
//!   snapshot; jumping to a past step replays nothing, and the next move
//!   from a past step discards the abandoned future (undo/redo with
//!   overwrite).
//!
//! Rendering is an external collaborator: the core exposes a derived,
//! serializable [`GameView`] and three mutating operations that map onto
//! UI callbacks.
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{Game, Player};
//!
//! let mut game = Game::new(3);
//! assert!(game.play(4));
//! assert_eq!(game.status().to_string(), "Next player: O");
//!
//! // Time travel: jump back to the start and branch.
//! game.jump_to(0)?;
//! assert_eq!(game.active_player(), Player::X);
//! assert!(game.play(0));
//! assert_eq!(game.history().len(), 2);
//! # Ok::<(), tictactoe_rewind::StepError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod game;
mod history;
mod invariants;
mod rules;
mod types;
mod view;

// Crate-level exports - Errors
pub use error::{BoardError, StepError};

// Crate-level exports - Game engine
pub use game::{Game, Status};

// Crate-level exports - Move history
pub use history::{History, Record};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicHistoryInvariant,
};

// Crate-level exports - Rules
pub use rules::{Line, WinningLine, candidate_lines, evaluate, evaluate_cells, is_draw, is_full};

// Crate-level exports - Renderer contract
pub use view::{GameView, MoveEntry};

// Crate-level exports - Board types
pub use types::{Board, Player, Square};

//! Game rules for square boards.
//!
//! This module contains pure functions for evaluating board state.
//! Rules are separated from board storage and from the game engine so
//! they can be exercised on arbitrary snapshots.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::{is_draw, is_full};
pub use lines::{Line, candidate_lines};
pub use win::{WinningLine, evaluate, evaluate_cells};

//! Error types for board construction and history navigation.

/// Error that can occur when constructing or addressing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The snapshot length has no exact integer square root.
    #[display("snapshot of {} squares does not form a square board", _0)]
    NotSquare(usize),

    /// The index does not address a square on the board.
    #[display("index {} is out of bounds for a board of {} squares", index, cells)]
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of squares on the board.
        cells: usize,
    },
}

impl std::error::Error for BoardError {}

/// Error that can occur when jumping through the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StepError {
    /// The requested step lies outside the recorded history.
    #[display("step {} is outside a history of {} entries", step, len)]
    OutOfRange {
        /// The requested step.
        step: usize,
        /// Number of recorded history entries.
        len: usize,
    },
}

impl std::error::Error for StepError {}

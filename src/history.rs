//! Move history: a linear sequence of board snapshots with branch discard.
//!
//! The history behaves like undo/redo with overwrite: jumping to a past
//! step keeps every entry, but the next move cuts the discarded future
//! before appending. The cut is an explicit API step
//! ([`History::truncate_after`]) rather than implicit slicing, so branch
//! points are visible at the call site.

use crate::types::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One step of the game: the board after a move, plus the 1-based
/// display coordinates of the square just played.
///
/// The initial record holds the empty board with coordinates `(0, 0)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Record {
    /// Board snapshot after the move.
    board: Board,
    /// 1-based column of the square just played (0 for the initial record).
    column: usize,
    /// 1-based row of the square just played (0 for the initial record).
    row: usize,
}

impl Record {
    /// Creates a record from a snapshot and the display coordinates of
    /// the move that produced it.
    pub fn new(board: Board, column: usize, row: usize) -> Self {
        Self { board, column, row }
    }

    /// The initial record: an empty board that no move produced.
    pub(crate) fn initial(side: usize) -> Self {
        Self {
            board: Board::new(side),
            column: 0,
            row: 0,
        }
    }
}

/// Ordered sequence of records, rooted at the initial empty board.
///
/// The root record is always present; [`History::truncate_after`] never
/// removes it. Consistency between consecutive records (one new mark per
/// step, no retractions) is maintained by the game engine, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    records: Vec<Record>,
}

impl History {
    /// Creates a history containing only the initial empty record.
    pub fn new(side: usize) -> Self {
        Self {
            records: vec![Record::initial(side)],
        }
    }

    /// Number of recorded steps, including the initial record.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: the initial record is never removed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Gets the record at the given step.
    pub fn get(&self, step: usize) -> Option<&Record> {
        self.records.get(step)
    }

    /// Returns all records in step order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Discards every record beyond the given step.
    ///
    /// This is the branch-discard half of undo/redo with overwrite; call
    /// it before appending a move made from a past step. A step at or
    /// beyond the last record leaves the history untouched.
    #[instrument(skip(self))]
    pub fn truncate_after(&mut self, step: usize) {
        self.records.truncate(step + 1);
    }

    /// Appends a record and returns its step index.
    pub fn push(&mut self, record: Record) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Builds a history from raw records, bypassing the rooted-empty
    /// construction. Only for exercising invariant violations in tests.
    #[cfg(test)]
    pub(crate) fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl std::ops::Index<usize> for History {
    type Output = Record;

    fn index(&self, step: usize) -> &Record {
        &self.records[step]
    }
}

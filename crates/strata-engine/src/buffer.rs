//! The space-time buffer: stacked generations of one automaton.
//!
//! Batch mode keeps every generation; window mode keeps a FIFO of the
//! last `W` rows, evicting oldest-first, which is exactly the scrolling
//! behavior a renderer wants. Row length is fixed for the buffer's
//! lifetime; a mismatched row is rejected, never truncated or padded.

use std::collections::VecDeque;
use std::error::Error;
use std::fmt;

use strata_core::Symbol;

/// Errors from [`SpaceTimeBuffer::push_row`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// The incoming row's length differs from the buffer's fixed row
    /// length. The caller recovers by discarding the buffer and
    /// reseeding; partial rows are never stored.
    RowLengthMismatch {
        /// The buffer's fixed row length.
        expected: usize,
        /// The rejected row's length.
        got: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowLengthMismatch { expected, got } => {
                write!(f, "row of length {got} pushed into buffer of width {expected}")
            }
        }
    }
}

impl Error for BufferError {}

/// An ordered sequence of equal-length rows, oldest first.
///
/// Invariant: every stored row has length [`row_len`](Self::row_len).
#[derive(Clone, Debug)]
pub struct SpaceTimeBuffer {
    rows: VecDeque<Vec<Symbol>>,
    row_len: usize,
    /// `Some(depth)` caps the buffer at `depth` rows (window mode);
    /// `None` keeps every row (batch mode).
    window: Option<usize>,
}

impl SpaceTimeBuffer {
    /// An unbounded buffer that keeps the complete history.
    pub fn batch(row_len: usize) -> Self {
        Self {
            rows: VecDeque::new(),
            row_len,
            window: None,
        }
    }

    /// A FIFO window of at most `depth` rows.
    ///
    /// # Panics
    ///
    /// Panics if `depth == 0`; config validation rejects that earlier.
    pub fn window(row_len: usize, depth: usize) -> Self {
        assert!(depth >= 1, "window depth must be >= 1, got {depth}");
        Self {
            rows: VecDeque::with_capacity(depth),
            row_len,
            window: Some(depth),
        }
    }

    /// The fixed row length.
    pub fn row_len(&self) -> usize {
        self.row_len
    }

    /// The window depth, or `None` in batch mode.
    pub fn window_depth(&self) -> Option<usize> {
        self.window
    }

    /// Number of rows currently held.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the buffer holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row, evicting the oldest one if the window is full.
    ///
    /// # Errors
    ///
    /// [`BufferError::RowLengthMismatch`] if `row.len() != row_len`;
    /// the buffer is left untouched.
    pub fn push_row(&mut self, row: Vec<Symbol>) -> Result<(), BufferError> {
        if row.len() != self.row_len {
            return Err(BufferError::RowLengthMismatch {
                expected: self.row_len,
                got: row.len(),
            });
        }
        self.rows.push_back(row);
        if let Some(depth) = self.window {
            if self.rows.len() > depth {
                self.rows.pop_front();
            }
        }
        Ok(())
    }

    /// Iterate rows oldest-first.
    pub fn rows(&self) -> impl Iterator<Item = &[Symbol]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Discard all rows; row length and window depth are kept.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Copy the visible rows into `out` as one row-major grid,
    /// oldest row first. Reuses `out`'s allocation.
    pub fn flatten_into(&self, out: &mut Vec<Symbol>) {
        out.clear();
        out.reserve(self.rows.len() * self.row_len);
        for row in &self.rows {
            out.extend_from_slice(row);
        }
    }
}

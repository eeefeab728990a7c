//! Flood-fill connected-component labeling over a symbol grid.
//!
//! Cells holding the designated active symbol are partitioned into
//! 4-connected components; every other cell keeps label 0. Label ids
//! start at 1 and strictly increase in row-major discovery order, so a
//! given grid always labels identically.
//!
//! Horizontal wraparound is **off** by default even though the
//! automaton itself evolves on a ring. The asymmetry is intentional:
//! the visible diagram is a flat image, and seam-split regions reading
//! as separate blobs is the wanted output. Callers that do want
//! ring-consistent labeling opt in via
//! [`Connectivity::FourWrapColumns`].

use std::error::Error;
use std::fmt;

use indexmap::IndexMap;
use strata_core::Symbol;

/// A component id. `0` is reserved for inactive/unlabeled cells.
pub type LabelId = u32;

/// Cell count per component, keyed by label id.
///
/// Iteration order is insertion order, which is row-major discovery
/// order. Rebuilt from scratch on every labeling pass, never patched.
pub type ComponentRegistry = IndexMap<LabelId, usize>;

// ── Connectivity ────────────────────────────────────────────────────

/// Neighborhood used by the labeling pass.
///
/// Both variants are 4-connected (edges only, no diagonals) and never
/// wrap vertically; they differ only in whether columns `0` and
/// `cols - 1` count as horizontally adjacent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Connectivity {
    /// Up/down/left/right with hard left and right edges.
    #[default]
    FourNoWrap,
    /// Up/down/left/right with columns wrapping, matching the
    /// automaton's ring topology.
    FourWrapColumns,
}

// ── LabelGrid ───────────────────────────────────────────────────────

/// Per-cell component ids, same dimensions as the labeled grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelGrid {
    rows: usize,
    cols: usize,
    labels: Vec<LabelId>,
}

impl LabelGrid {
    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Label of the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()` or `col >= cols()`.
    pub fn get(&self, row: usize, col: usize) -> LabelId {
        assert!(row < self.rows && col < self.cols, "cell out of bounds");
        self.labels[row * self.cols + col]
    }

    /// The label cells in row-major order.
    pub fn as_slice(&self) -> &[LabelId] {
        &self.labels
    }
}

// ── Labeling ────────────────────────────────────────────────────────

/// Result of one labeling pass: the label grid plus the size registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labeling {
    /// Per-cell component ids.
    pub grid: LabelGrid,
    /// Cell count per component, in discovery order.
    pub registry: ComponentRegistry,
}

/// Errors from [`label`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelError {
    /// `cells.len()` does not equal `rows * cols`.
    DimensionMismatch {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
        /// Actual length of the cell slice.
        cells: usize,
    },
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { rows, cols, cells } => {
                write!(f, "grid of {rows}x{cols} cells expected, got {cells}")
            }
        }
    }
}

impl Error for LabelError {}

// ── label ───────────────────────────────────────────────────────────

/// Partition the active cells of a row-major grid into 4-connected
/// components.
///
/// Cells equal to `active` are eligible; all others keep label 0. The
/// flood fill runs on an explicit work-list stack, so arbitrarily large
/// regions never touch the call stack. The sum of all registry sizes
/// plus the count of label-0 cells always equals `rows * cols`.
///
/// An all-inactive grid is not an error: the registry comes back empty.
///
/// # Errors
///
/// [`LabelError::DimensionMismatch`] if `cells.len() != rows * cols`.
///
/// # Examples
///
/// ```
/// use strata_label::{label, Connectivity};
///
/// let cells = [0, 1, 0, 0, 1, 0, 0, 0, 1];
/// let labeling = label(&cells, 3, 3, 1, Connectivity::FourNoWrap).unwrap();
/// assert_eq!(labeling.registry[&1], 2); // vertical pair
/// assert_eq!(labeling.registry[&2], 1); // bottom-right corner
/// ```
pub fn label(
    cells: &[Symbol],
    rows: usize,
    cols: usize,
    active: Symbol,
    connectivity: Connectivity,
) -> Result<Labeling, LabelError> {
    if cells.len() != rows * cols {
        return Err(LabelError::DimensionMismatch {
            rows,
            cols,
            cells: cells.len(),
        });
    }

    let wrap_cols = connectivity == Connectivity::FourWrapColumns && cols > 1;
    let mut labels = vec![0 as LabelId; cells.len()];
    let mut registry = ComponentRegistry::new();
    let mut stack: Vec<usize> = Vec::new();
    let mut next_label: LabelId = 1;

    for start in 0..cells.len() {
        if cells[start] != active || labels[start] != 0 {
            continue;
        }

        let id = next_label;
        next_label += 1;
        labels[start] = id;
        stack.push(start);
        let mut size = 0usize;

        while let Some(idx) = stack.pop() {
            size += 1;
            let row = idx / cols;
            let col = idx % cols;

            let mut visit = |n: usize| {
                if cells[n] == active && labels[n] == 0 {
                    labels[n] = id;
                    stack.push(n);
                }
            };

            if row > 0 {
                visit(idx - cols);
            }
            if row + 1 < rows {
                visit(idx + cols);
            }
            if col > 0 {
                visit(idx - 1);
            } else if wrap_cols {
                visit(idx + cols - 1);
            }
            if col + 1 < cols {
                visit(idx + 1);
            } else if wrap_cols {
                visit(idx + 1 - cols);
            }
        }

        registry.insert(id, size);
    }

    Ok(Labeling {
        grid: LabelGrid { rows, cols, labels },
        registry,
    })
}

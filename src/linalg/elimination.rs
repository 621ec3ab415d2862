//! Forward Gaussian elimination with row interchange.
//!
//! Works on a row-major scratch copy. Only the first `pivot_columns`
//! columns are searched for pivots, which lets the same routine reduce a
//! plain matrix (rank, determinant) or an augmented system `[A | F]`
//! (solve, invert). Columns whose candidates are all numerically zero are
//! skipped instead of failing.

use crate::config::Tolerance;

#[derive(Debug, Clone)]
pub(crate) struct Echelon {
    pub data: Vec<f64>,
    pub columns: usize,
    /// `(row, column)` of every pivot, in elimination order.
    pub pivots: Vec<(usize, usize)>,
    /// Columns without a usable pivot and the largest magnitude seen there.
    pub deficient: Vec<(usize, f64)>,
    /// Number of row interchanges performed.
    pub swaps: usize,
}

impl Echelon {
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    #[inline]
    pub fn at(&self, row: usize, column: usize) -> f64 {
        self.data[row * self.columns + column]
    }
}

pub(crate) fn forward_eliminate(
    mut data: Vec<f64>,
    rows: usize,
    columns: usize,
    pivot_columns: usize,
    tolerance: &Tolerance,
) -> Echelon {
    debug_assert_eq!(data.len(), rows * columns);
    let mut pivots = Vec::new();
    let mut deficient = Vec::new();
    let mut swaps = 0;
    let mut row = 0;

    for col in 0..pivot_columns.min(columns) {
        if row == rows {
            deficient.push((col, 0.0));
            continue;
        }

        let mut best = row;
        let mut magnitude = data[row * columns + col].abs();
        for candidate in (row + 1)..rows {
            let value = data[candidate * columns + col].abs();
            if value > magnitude {
                magnitude = value;
                best = candidate;
            }
        }

        if tolerance.is_zero(magnitude) {
            log::trace!("column {} has no pivot (max |a| = {:e})", col, magnitude);
            deficient.push((col, magnitude));
            continue;
        }

        if best != row {
            log::trace!("swapping rows {} and {} for column {}", row, best, col);
            for j in 0..columns {
                data.swap(row * columns + j, best * columns + j);
            }
            swaps += 1;
        }

        let pivot = data[row * columns + col];
        for r in (row + 1)..rows {
            let factor = data[r * columns + col] / pivot;
            data[r * columns + col] = 0.0;
            for j in (col + 1)..columns {
                data[r * columns + j] -= factor * data[row * columns + j];
            }
        }

        pivots.push((row, col));
        row += 1;
    }

    Echelon {
        data,
        columns,
        pivots,
        deficient,
        swaps,
    }
}

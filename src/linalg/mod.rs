//! Linear algebra on [`Matrix`] values.
//!
//! Every function takes its inputs by reference and returns a freshly
//! allocated result; nothing here mutates an argument. The `*_with`
//! variants take an explicit [`Tolerance`](crate::config::Tolerance); the
//! plain forms use the defaults.

mod elimination;
pub mod lu;
pub mod rank;
pub mod solve;

pub use lu::{determinant, determinant_with, lu_decompose, lu_decompose_with};
pub use rank::{rank, rank_with};
pub use solve::{invert, invert_with, power, power_with, solve, solve_with};

use crate::error::{LinalgError, Result};
use crate::math::Matrix;

pub(crate) fn require_square(a: &Matrix, op: &str) -> Result<()> {
    if !a.is_square() {
        return Err(LinalgError::shape(format!(
            "{} requires a square matrix, got {}x{} (not square)",
            op,
            a.rows(),
            a.columns()
        )));
    }
    Ok(())
}

/// Sum of the diagonal. The empty matrix has trace 0.
pub fn trace(a: &Matrix) -> Result<f64> {
    require_square(a, "trace")?;
    Ok((0..a.rows()).map(|i| a[(i, i)]).sum())
}

/// Frobenius norm: square root of the sum of squared elements.
pub fn norm(a: &Matrix) -> f64 {
    a.as_slice().iter().map(|v| v * v).sum::<f64>().sqrt()
}

pub fn transpose(a: &Matrix) -> Matrix {
    let (rows, columns) = a.shape();
    let mut out = Matrix::zeros(columns, rows);
    let src = a.as_slice();
    let dst = out.as_mut_slice();
    for i in 0..rows {
        for j in 0..columns {
            dst[j * rows + i] = src[i * columns + j];
        }
    }
    out
}

/// `n x n` identity; `identity(0)` is the empty matrix.
pub fn identity(n: usize) -> Matrix {
    let mut out = Matrix::zeros(n, n);
    let data = out.as_mut_slice();
    for i in 0..n {
        data[i * n + i] = 1.0;
    }
    out
}

/// Horizontal concatenation `[a | b]`.
///
/// ```
/// use dense_linalg::{concatenate, Matrix};
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let b = Matrix::from_column(&[5.0, 6.0]);
/// let ab = concatenate(&a, &b).unwrap();
/// assert_eq!(ab, Matrix::from_rows(&[[1.0, 2.0, 5.0], [3.0, 4.0, 6.0]]).unwrap());
/// ```
pub fn concatenate(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.rows() != b.rows() {
        return Err(LinalgError::shape(format!(
            "concatenate requires equal row counts, got {} and {}",
            a.rows(),
            b.rows()
        )));
    }
    let rows = a.rows();
    let columns = a.columns() + b.columns();
    let mut data = Vec::with_capacity(rows * columns);
    for row in 0..rows {
        data.extend_from_slice(a.row_slice(row));
        data.extend_from_slice(b.row_slice(row));
    }
    Matrix::from_shape_vec((rows, columns), data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transpose_swaps_shape() {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let t = transpose(&a);
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.to_vec(), vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(transpose(&t), a);
    }

    #[test]
    fn identity_zero_is_empty() {
        let id = identity(0);
        assert!(id.is_empty());
        assert!(id.as_ptr().is_null());
    }

    #[test]
    fn trace_of_empty_is_zero() {
        assert_eq!(trace(&Matrix::new()).unwrap(), 0.0);
    }

    #[test]
    fn norm_of_row_vector() {
        let v = Matrix::from_rows(&[[3.0, 4.0]]).unwrap();
        assert!((norm(&v) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn concatenate_rejects_row_mismatch() {
        let a = Matrix::zeros(2, 2);
        let b = Matrix::zeros(1, 2);
        assert!(concatenate(&a, &b).unwrap_err().is_shape());
    }
}

//! LU decomposition without row interchange, and the determinant built on it.
//!
//! For a square matrix A, computes:
//! ```text
//! A = L * U
//! ```
//! where `L` is lower triangular with unit diagonal and `U` is upper
//! triangular. No permutation is applied: a numerically zero pivot fails
//! the decomposition even if a row exchange would have made it succeed.

use crate::config::Tolerance;
use crate::error::{LinalgError, Result};
use crate::linalg::elimination::forward_eliminate;
use crate::linalg::require_square;
use crate::math::Matrix;

/// Doolittle LU decomposition.
///
/// Fails with `LinalgError::Shape` for non-square or empty input and with
/// `LinalgError::SingularMatrix` on the first zero pivot.
pub fn lu_decompose(a: &Matrix) -> Result<(Matrix, Matrix)> {
    lu_decompose_with(a, &Tolerance::default())
}

pub fn lu_decompose_with(a: &Matrix, tolerance: &Tolerance) -> Result<(Matrix, Matrix)> {
    require_square(a, "lu_decompose")?;
    if a.is_empty() {
        return Err(LinalgError::shape("lu_decompose requires a non-empty matrix"));
    }

    let n = a.rows();
    let mut lower = Matrix::identity(n);
    let mut upper = a.to_compact();
    let l = lower.as_mut_slice();
    let u = upper.as_mut_slice();

    for k in 0..n {
        let pivot = u[k * n + k];
        if tolerance.is_zero(pivot) {
            log::debug!("lu_decompose: zero pivot {:e} at column {}", pivot, k);
            return Err(LinalgError::SingularMatrix {
                index: k,
                value: pivot,
            });
        }
        for i in (k + 1)..n {
            let factor = u[i * n + k] / pivot;
            l[i * n + k] = factor;
            u[i * n + k] = 0.0;
            for j in (k + 1)..n {
                u[i * n + j] -= factor * u[k * n + j];
            }
        }
    }

    Ok((lower, upper))
}

/// Determinant of a square, non-empty matrix.
///
/// Uses the `U` diagonal from [`lu_decompose`]. When that hits a zero pivot
/// the value is recomputed by elimination with row interchange. That pass
/// only skips columns that are exactly zero, so tiny but non-zero pivots
/// still contribute to the signed product.
pub fn determinant(a: &Matrix) -> Result<f64> {
    determinant_with(a, &Tolerance::default())
}

pub fn determinant_with(a: &Matrix, tolerance: &Tolerance) -> Result<f64> {
    require_square(a, "determinant")?;
    if a.is_empty() {
        return Err(LinalgError::shape("determinant requires a non-empty matrix"));
    }

    match lu_decompose_with(a, tolerance) {
        Ok((_, upper)) => {
            let n = upper.rows();
            Ok((0..n).map(|k| upper[(k, k)]).product())
        }
        Err(LinalgError::SingularMatrix { index, .. }) => {
            log::debug!(
                "determinant: LU stopped at column {}, falling back to pivoted elimination",
                index
            );
            Ok(pivoted_determinant(a))
        }
        Err(err) => Err(err),
    }
}

fn pivoted_determinant(a: &Matrix) -> f64 {
    let n = a.rows();
    let exact = Tolerance::new(0.0, 0.0);
    let echelon = forward_eliminate(a.to_vec(), n, n, n, &exact);
    if echelon.rank() < n {
        return 0.0;
    }
    let sign = if echelon.swaps % 2 == 0 { 1.0 } else { -1.0 };
    sign * (0..n).map(|k| echelon.at(k, k)).product::<f64>()
}

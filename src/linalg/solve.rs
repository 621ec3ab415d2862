//! Linear systems, inversion and integer powers.
//!
//! `solve` and `invert` reduce the augmented system `[A | F]` with partial
//! pivoting and back-substitute. Unlike [`lu_decompose`](super::lu_decompose)
//! they interchange rows, so only matrices that are actually singular are
//! rejected.

use crate::config::Tolerance;
use crate::error::{LinalgError, Result};
use crate::linalg::elimination::{forward_eliminate, Echelon};
use crate::linalg::{identity, require_square};
use crate::math::Matrix;

fn eliminate_system(a: &Matrix, f: &Matrix, tolerance: &Tolerance) -> Result<Echelon> {
    require_square(a, "solve")?;
    if f.rows() != a.rows() {
        return Err(LinalgError::shape(format!(
            "right-hand side has {} rows, system has {}",
            f.rows(),
            a.rows()
        )));
    }

    let n = a.rows();
    let k = f.columns();
    let width = n + k;
    let mut augmented = Vec::with_capacity(n * width);
    for row in 0..n {
        augmented.extend_from_slice(a.row_slice(row));
        augmented.extend_from_slice(f.row_slice(row));
    }

    Ok(forward_eliminate(augmented, n, width, n, tolerance))
}

fn first_singular_column(echelon: &Echelon) -> LinalgError {
    let (index, value) = echelon.deficient.first().copied().unwrap_or((0, 0.0));
    LinalgError::SingularMatrix { index, value }
}

/// Back substitution on a full-rank upper-triangular augmented system.
fn back_substitute(echelon: &Echelon, n: usize) -> Matrix {
    let k = echelon.columns - n;
    let mut x = Matrix::zeros(n, k);
    let out = x.as_mut_slice();
    for c in 0..k {
        for i in (0..n).rev() {
            let mut sum = echelon.at(i, n + c);
            for j in (i + 1)..n {
                sum -= echelon.at(i, j) * out[j * k + c];
            }
            out[i * k + c] = sum / echelon.at(i, i);
        }
    }
    x
}

/// Solve `A * X = F` for `X`.
///
/// `A` must be square and `F` must have `A.rows()` rows (usually a single
/// column). Returns `LinalgError::InconsistentSystem` when elimination
/// leaves a zero coefficient row with a non-zero right-hand side, and
/// `LinalgError::SingularMatrix` when the system is consistent but has no
/// unique solution.
pub fn solve(a: &Matrix, f: &Matrix) -> Result<Matrix> {
    solve_with(a, f, &Tolerance::default())
}

pub fn solve_with(a: &Matrix, f: &Matrix, tolerance: &Tolerance) -> Result<Matrix> {
    let echelon = eliminate_system(a, f, tolerance)?;
    let n = a.rows();

    for row in echelon.rank()..n {
        for c in n..echelon.columns {
            if !tolerance.is_zero(echelon.at(row, c)) {
                log::debug!("solve: row {} reduces to 0 = {}", row, echelon.at(row, c));
                return Err(LinalgError::InconsistentSystem { row });
            }
        }
    }

    if echelon.rank() < n {
        return Err(first_singular_column(&echelon));
    }

    Ok(back_substitute(&echelon, n))
}

/// Inverse of a square matrix, computed by solving `A * X = I`.
pub fn invert(a: &Matrix) -> Result<Matrix> {
    invert_with(a, &Tolerance::default())
}

pub fn invert_with(a: &Matrix, tolerance: &Tolerance) -> Result<Matrix> {
    require_square(a, "invert")?;
    let n = a.rows();
    let echelon = eliminate_system(a, &identity(n), tolerance)?;
    if echelon.rank() < n {
        log::debug!("invert: matrix has rank {} < {}", echelon.rank(), n);
        return Err(first_singular_column(&echelon));
    }
    Ok(back_substitute(&echelon, n))
}

/// Integer power of a square matrix.
///
/// `power(a, 0)` is the identity; negative exponents invert first, so a
/// singular `a` fails with `LinalgError::SingularMatrix`.
pub fn power(a: &Matrix, exponent: i32) -> Result<Matrix> {
    power_with(a, exponent, &Tolerance::default())
}

pub fn power_with(a: &Matrix, exponent: i32, tolerance: &Tolerance) -> Result<Matrix> {
    require_square(a, "power")?;
    let mut base = if exponent < 0 {
        invert_with(a, tolerance)?
    } else {
        a.to_compact()
    };

    let mut remaining = exponent.unsigned_abs();
    let mut result = identity(a.rows());
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = &result * &base;
        }
        remaining >>= 1;
        if remaining > 0 {
            base = &base * &base;
        }
    }
    Ok(result)
}

use crate::config::Tolerance;
use crate::linalg::elimination::forward_eliminate;
use crate::math::Matrix;

/// Number of pivots left by Gaussian elimination with row interchange.
///
/// Defined for every shape; the empty and all-zero matrices have rank 0.
pub fn rank(a: &Matrix) -> usize {
    rank_with(a, &Tolerance::default())
}

pub fn rank_with(a: &Matrix, tolerance: &Tolerance) -> usize {
    if a.is_empty() {
        return 0;
    }
    let echelon = forward_eliminate(a.to_vec(), a.rows(), a.columns(), a.columns(), tolerance);
    log::debug!(
        "rank of {}x{} matrix: {}",
        a.rows(),
        a.columns(),
        echelon.rank()
    );
    echelon.rank()
}

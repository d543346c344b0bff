//! Small dense solves on top of nalgebra.

use nalgebra::{DMatrix, DVector};

/// Least-squares solution of `design · β ≈ y` through SVD.
///
/// Returns `None` when the system is rank-deficient or the solution is not
/// finite.
pub(crate) fn least_squares(design: DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let columns = design.ncols();
    let svd = design.svd(true, true);

    let largest = svd.singular_values.max();
    let eps = largest * 1e-12;
    let rank = svd.singular_values.iter().filter(|&&s| s > eps).count();
    if rank < columns {
        return None;
    }

    svd.solve(y, eps)
        .ok()
        .filter(|beta| beta.iter().all(|v| v.is_finite()))
}

/// Solve the square system `a · x = b`, Cholesky first, LU as fallback.
pub(crate) fn solve_square(a: DMatrix<f64>, b: &DVector<f64>) -> Option<DVector<f64>> {
    let solution = match a.clone().cholesky() {
        Some(cholesky) => Some(cholesky.solve(b)),
        None => a.lu().solve(b),
    };
    solution.filter(|x| x.iter().all(|v| v.is_finite()))
}

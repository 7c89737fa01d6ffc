//! Closed-form 3x3 linear solve via the classical adjugate.
//!
//! A fixed-size cofactor expansion, not Gaussian elimination: the basis
//! systems solved here are always 3x3 and the composed transform is
//! normalized afterwards, so the explicit adjugate is both sufficient and
//! cheap.

use nalgebra::{Matrix3, Vector3};

/// Determinant via cofactor expansion along the first row.
pub fn det(a: &Matrix3<f64>) -> f64 {
    a[(0, 0)] * (a[(1, 1)] * a[(2, 2)] - a[(1, 2)] * a[(2, 1)])
        - a[(0, 1)] * (a[(1, 0)] * a[(2, 2)] - a[(1, 2)] * a[(2, 0)])
        + a[(0, 2)] * (a[(1, 0)] * a[(2, 1)] - a[(1, 1)] * a[(2, 0)])
}

/// Classical adjugate: the transposed cofactor matrix, `det(A) · A⁻¹`.
///
/// Not nalgebra's `adjoint()`, which is the conjugate transpose.
pub fn adjugate(m: &Matrix3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)],
        m[(0, 2)] * m[(2, 1)] - m[(0, 1)] * m[(2, 2)],
        m[(0, 1)] * m[(1, 2)] - m[(0, 2)] * m[(1, 1)],
        m[(1, 2)] * m[(2, 0)] - m[(1, 0)] * m[(2, 2)],
        m[(0, 0)] * m[(2, 2)] - m[(0, 2)] * m[(2, 0)],
        m[(0, 2)] * m[(1, 0)] - m[(0, 0)] * m[(1, 2)],
        m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)],
        m[(0, 1)] * m[(2, 0)] - m[(0, 0)] * m[(2, 1)],
        m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
    )
}

/// Solve `A · x = b` using the adjugate scaled by `1/det(A)`.
///
/// Returns `None` when `det(A)` is exactly zero. No epsilon tolerance:
/// near-singular systems produce large coefficients instead of an error.
pub fn solve(a: &Matrix3<f64>, b: &Vector3<f64>) -> Option<Vector3<f64>> {
    let d = det(a);
    if d == 0.0 {
        return None;
    }
    let inv_det = 1.0 / d;
    Some(adjugate(a) * inv_det * b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn solves_well_conditioned_system() {
        // x = [1, -2, 3] under A below.
        let a = Matrix3::new(2.0, 1.0, 1.0, 1.0, 3.0, 2.0, 1.0, 0.0, 0.0);
        let x_true = Vector3::new(1.0, -2.0, 3.0);
        let b = a * x_true;

        let x = solve(&a, &b).unwrap();
        assert_relative_eq!(x[0], x_true[0], epsilon = 1e-12);
        assert_relative_eq!(x[1], x_true[1], epsilon = 1e-12);
        assert_relative_eq!(x[2], x_true[2], epsilon = 1e-12);
    }

    #[test]
    fn singular_system_has_no_solution() {
        // Second row is twice the first.
        let a = Matrix3::new(1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 1.0, 1.0);
        let b = Vector3::new(1.0, 2.0, 3.0);
        assert!(solve(&a, &b).is_none());
    }

    #[test]
    fn adjugate_times_matrix_is_det_identity() {
        let a = Matrix3::new(3.0, 0.0, 2.0, 2.0, 0.0, -2.0, 0.0, 1.0, 1.0);
        let d = det(&a);
        let prod = adjugate(&a) * a;
        for r in 0..3 {
            for c in 0..3 {
                let expected = if r == c { d } else { 0.0 };
                assert_relative_eq!(prod[(r, c)], expected, epsilon = 1e-12);
            }
        }
    }
}

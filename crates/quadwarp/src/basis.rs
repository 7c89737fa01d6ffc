//! Basis-to-points construction for the 4-point projective solve.
//!
//! Each side of a quad correspondence is reduced to the 3x3 matrix that maps
//! the standard homogeneous basis `(1,0,0), (0,1,0), (0,0,1)` onto three of
//! its corners, with column scales chosen so the basis sum `(1,1,1)` lands on
//! the fourth. Composing the destination-side matrix with the (adjugate of
//! the) source-side matrix yields the full homography.

use nalgebra::{Matrix3, Vector3};

use crate::quad::Point;
use crate::solver;

/// Build the matrix taking the homogeneous unit basis to `p1, p2, p3` and
/// the basis sum point to `p4`.
///
/// Returns `None` when the corners are collinear or duplicated (singular
/// coefficient matrix).
pub fn basis_to_points(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Matrix3<f64>> {
    let m = Matrix3::new(
        p1.x, p2.x, p3.x, //
        p1.y, p2.y, p3.y, //
        1.0, 1.0, 1.0,
    );
    let v = Vector3::new(p4.x, p4.y, 1.0);
    let s = solver::solve(&m, &v)?;

    // Scale column i by the solution component s[i].
    Some(Matrix3::new(
        m[(0, 0)] * s[0],
        m[(0, 1)] * s[1],
        m[(0, 2)] * s[2],
        m[(1, 0)] * s[0],
        m[(1, 1)] * s[1],
        m[(1, 2)] * s[2],
        m[(2, 0)] * s[0],
        m[(2, 1)] * s[1],
        m[(2, 2)] * s[2],
    ))
}

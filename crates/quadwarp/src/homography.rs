//! Quad-to-quad projective transform composition.
//!
//! The exact 4-point solve: build a basis matrix per side, multiply the
//! destination matrix by the adjugate of the source matrix, normalize by the
//! homogeneous scale. Closed form throughout; no iterative refinement.

use nalgebra::{Matrix3, Vector3};

use crate::basis::basis_to_points;
use crate::matrix3d;
use crate::quad::Quad;
use crate::solver::adjugate;

// ── Error type ───────────────────────────────────────────────────────────

/// Which side of a quad correspondence failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadRole {
    Source,
    Destination,
}

impl std::fmt::Display for QuadRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WarpError {
    /// Three or more corners of the named quad are collinear or duplicated.
    DegenerateQuad { role: QuadRole },
    /// The composed matrix's homogeneous scale is zero or non-finite.
    DegenerateScale,
}

impl std::fmt::Display for WarpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegenerateQuad { role } => {
                write!(f, "degenerate {} quad: corners are collinear or duplicated", role)
            }
            Self::DegenerateScale => {
                write!(f, "degenerate correspondence: homogeneous scale collapsed to zero")
            }
        }
    }
}

impl std::error::Error for WarpError {}

// ── Projection ───────────────────────────────────────────────────────────

/// Project a 2D point through a 3×3 homography: H * [x, y, 1]^T → [u, v].
pub fn project(h: &Matrix3<f64>, x: f64, y: f64) -> [f64; 2] {
    let p = h * Vector3::new(x, y, 1.0);
    if p[2].abs() < 1e-15 {
        return [f64::NAN, f64::NAN];
    }
    [p[0] / p[2], p[1] / p[2]]
}

// ── Composition ──────────────────────────────────────────────────────────

/// Compose the normalized 3×3 projective transform taking the corners of
/// `src` onto the corresponding corners of `dst`.
///
/// Uses the adjugate of the source basis matrix rather than its inverse: the
/// skipped determinant division only changes the overall scale, which the
/// final normalization removes anyway.
pub fn quad_to_quad(src: &Quad, dst: &Quad) -> Result<Matrix3<f64>, WarpError> {
    let [s1, s2, s3, s4] = src.corners();
    let [d1, d2, d3, d4] = dst.corners();

    let m1 = basis_to_points(s1, s2, s3, s4).ok_or(WarpError::DegenerateQuad {
        role: QuadRole::Source,
    })?;
    let m2 = basis_to_points(d1, d2, d3, d4).ok_or(WarpError::DegenerateQuad {
        role: QuadRole::Destination,
    })?;

    let m3 = m2 * adjugate(&m1);

    let scale = m3[(2, 2)];
    if scale == 0.0 || !scale.is_finite() {
        return Err(WarpError::DegenerateScale);
    }
    Ok(m3 / scale)
}

/// Compute the full 16-coefficient rendering-surface transform for a quad
/// correspondence.
///
/// The coefficients are column-major and serialize directly as a CSS
/// `matrix3d(...)` argument list (see [`matrix3d::css_matrix3d`]).
pub fn compute_transform(src: &Quad, dst: &Quad) -> Result<[f64; 16], WarpError> {
    let h = quad_to_quad(src, dst)?;
    Ok(matrix3d::to_matrix3d(&h))
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix3d::IDENTITY;
    use approx::assert_relative_eq;

    fn unit_square_100() -> Quad {
        Quad::from_rect(100.0, 100.0)
    }

    fn collinear_quad() -> Quad {
        Quad::from([[0.0, 0.0], [10.0, 0.0], [20.0, 0.0], [0.0, 10.0]])
    }

    #[test]
    fn identical_quads_give_identity_transform() {
        let q = Quad::from([[3.0, 4.0], [120.0, -2.0], [110.0, 95.0], [-1.0, 88.0]]);
        let coeffs = compute_transform(&q, &q).unwrap();
        for (got, want) in coeffs.iter().zip(IDENTITY.iter()) {
            assert_relative_eq!(*got, *want, epsilon = 1e-9);
        }
    }

    #[test]
    fn degenerate_quad_fails_as_source_and_as_destination() {
        let good = unit_square_100();
        let bad = collinear_quad();

        assert_eq!(
            compute_transform(&bad, &good),
            Err(WarpError::DegenerateQuad {
                role: QuadRole::Source
            })
        );
        assert_eq!(
            compute_transform(&good, &bad),
            Err(WarpError::DegenerateQuad {
                role: QuadRole::Destination
            })
        );
    }

    #[test]
    fn transform_maps_each_source_corner_onto_its_destination() {
        let src = unit_square_100();
        let dst = Quad::from([[12.0, -8.0], [240.0, 14.0], [215.0, 180.0], [-30.0, 160.0]]);

        let h = quad_to_quad(&src, &dst).unwrap();
        for (s, d) in src.corners().iter().zip(dst.corners().iter()) {
            let p = project(&h, s.x, s.y);
            assert_relative_eq!(p[0], d.x, epsilon = 1e-6);
            assert_relative_eq!(p[1], d.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn pure_scale_has_diagonal_block_and_no_perspective() {
        let src = unit_square_100();
        let dst = Quad::from_rect(200.0, 200.0);

        let coeffs = compute_transform(&src, &dst).unwrap();
        assert_relative_eq!(coeffs[0], 2.0, epsilon = 1e-9); // x scale
        assert_relative_eq!(coeffs[5], 2.0, epsilon = 1e-9); // y scale
        assert_relative_eq!(coeffs[1], 0.0, epsilon = 1e-9);
        assert_relative_eq!(coeffs[4], 0.0, epsilon = 1e-9);
        assert_relative_eq!(coeffs[12], 0.0, epsilon = 1e-9); // translation
        assert_relative_eq!(coeffs[13], 0.0, epsilon = 1e-9);
        assert_relative_eq!(coeffs[3], 0.0, epsilon = 1e-9); // perspective
        assert_relative_eq!(coeffs[7], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn pure_translation_keeps_identity_block() {
        let src = unit_square_100();
        let dst = Quad::from([[10.0, 10.0], [110.0, 10.0], [110.0, 110.0], [10.0, 110.0]]);

        let coeffs = compute_transform(&src, &dst).unwrap();
        assert_relative_eq!(coeffs[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(coeffs[5], 1.0, epsilon = 1e-9);
        assert_relative_eq!(coeffs[1], 0.0, epsilon = 1e-9);
        assert_relative_eq!(coeffs[4], 0.0, epsilon = 1e-9);
        assert_relative_eq!(coeffs[12], 10.0, epsilon = 1e-9); // tx
        assert_relative_eq!(coeffs[13], 10.0, epsilon = 1e-9); // ty
        assert_relative_eq!(coeffs[3], 0.0, epsilon = 1e-9);
        assert_relative_eq!(coeffs[7], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn trapezoid_produces_nonzero_perspective_terms() {
        let src = unit_square_100();
        // Top edge narrower than bottom: a true perspective foreshortening,
        // not expressible as an affine map.
        let dst = Quad::from([[20.0, 0.0], [80.0, 0.0], [100.0, 100.0], [0.0, 100.0]]);

        let h = quad_to_quad(&src, &dst).unwrap();
        let persp = h[(2, 0)].abs() + h[(2, 1)].abs();
        assert!(persp > 1e-9, "expected perspective terms, got {}", persp);

        // Same terms in the formatted coefficients (slots 3 and 7).
        let coeffs = compute_transform(&src, &dst).unwrap();
        assert!(coeffs[3].abs() + coeffs[7].abs() > 1e-9);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let src = unit_square_100();
        let dst = Quad::from([[20.0, 5.0], [85.0, -3.0], [100.0, 100.0], [0.0, 97.0]]);

        let a = compute_transform(&src, &dst).unwrap();
        let b = compute_transform(&src, &dst).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }

    #[test]
    fn source_need_not_be_axis_aligned() {
        let src = Quad::from([[5.0, 5.0], [95.0, 12.0], [90.0, 105.0], [2.0, 98.0]]);
        let dst = Quad::from([[0.0, 0.0], [60.0, 0.0], [60.0, 60.0], [0.0, 60.0]]);

        let h = quad_to_quad(&src, &dst).unwrap();
        for (s, d) in src.corners().iter().zip(dst.corners().iter()) {
            let p = project(&h, s.x, s.y);
            assert_relative_eq!(p[0], d.x, epsilon = 1e-6);
            assert_relative_eq!(p[1], d.y, epsilon = 1e-6);
        }
    }
}

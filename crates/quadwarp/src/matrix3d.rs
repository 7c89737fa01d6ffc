//! Expansion of a 3x3 projective matrix into rendering-surface coefficients.
//!
//! 2D rendering surfaces consume perspective transforms as a 4x4 homogeneous
//! matrix in column-major order (the CSS `matrix3d()` argument list). The
//! expansion embeds the 2D transform in 3D: the z axis stays identity and the
//! perspective terms move to the fourth column/row.

use nalgebra::Matrix3;

/// Coefficients of the identity transform.
///
/// Useful as the caller-side fallback when a correspondence is degenerate
/// and no transform should be applied.
pub const IDENTITY: [f64; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

/// Expand a normalized 3x3 projective matrix into the 16 column-major
/// coefficients of a 4x4 homogeneous transform.
///
/// Pure rearrangement: the 2x2 linear block and translation come from the
/// first two columns, the perspective row becomes the fourth column, and the
/// z axis is left untouched.
pub fn to_matrix3d(h: &Matrix3<f64>) -> [f64; 16] {
    [
        h[(0, 0)],
        h[(1, 0)],
        0.0,
        h[(2, 0)],
        h[(0, 1)],
        h[(1, 1)],
        0.0,
        h[(2, 1)],
        0.0,
        0.0,
        1.0,
        0.0,
        h[(0, 2)],
        h[(1, 2)],
        0.0,
        h[(2, 2)],
    ]
}

/// Serialize coefficients as a CSS `matrix3d(...)` transform value.
pub fn css_matrix3d(coeffs: &[f64; 16]) -> String {
    let parts: Vec<String> = coeffs.iter().map(|c| c.to_string()).collect();
    format!("matrix3d({})", parts.join(","))
}

//! quadwarp — exact 4-point perspective (homography) transforms for 2D
//! rendering surfaces.
//!
//! Given a source quadrilateral (conventionally the untransformed container
//! rectangle) and a destination quadrilateral (four freely positioned
//! corners), compute the unique projective transform mapping source corners
//! onto destination corners, as the 16 column-major coefficients of a 4x4
//! homogeneous matrix (a CSS `matrix3d()` argument list). The pipeline
//! stages are:
//!
//! 1. **Solve** – closed-form adjugate solve of the 3x3 basis system.
//! 2. **Basis** – map the homogeneous unit basis onto each quad's corners.
//! 3. **Compose** – destination basis × adjugate(source basis), normalized
//!    by the homogeneous scale.
//! 4. **Format** – expand the 3x3 into the column-major 4x4 coefficients.
//!
//! Every call is a pure, independent computation; nothing is cached between
//! invocations and all inputs are passed by value, so calls may run from any
//! number of threads without coordination.
//!
//! # Example
//!
//! ```
//! use quadwarp::{compute_transform, css_matrix3d, Quad};
//!
//! let source = Quad::from_rect(100.0, 100.0);
//! let destination = Quad::from([[20.0, 0.0], [80.0, 0.0], [100.0, 100.0], [0.0, 100.0]]);
//!
//! let coeffs = compute_transform(&source, &destination)?;
//! let css = css_matrix3d(&coeffs);
//! assert!(css.starts_with("matrix3d("));
//! # Ok::<(), quadwarp::WarpError>(())
//! ```

pub mod basis;
pub mod homography;
pub mod matrix3d;
pub mod quad;
pub mod solver;

pub use homography::{compute_transform, project, quad_to_quad, QuadRole, WarpError};
pub use matrix3d::{css_matrix3d, to_matrix3d, IDENTITY};
pub use quad::{Point, Quad};

//! Corner points and quadrilaterals.
//!
//! A [`Quad`] names its corners after the untransformed rectangle they start
//! from; once dragged, a corner may land anywhere. Corner order is the
//! correspondence contract for the whole crate.

use serde::{Deserialize, Serialize};

/// A 2D point in container coordinates (pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from(xy: [f64; 2]) -> Self {
        Self { x: xy[0], y: xy[1] }
    }
}

/// An ordered quadrilateral with the fixed correspondence order
/// `[top_left, top_right, bottom_right, bottom_left]`.
///
/// Source and destination quads must both use this cyclic order; it defines
/// which corner maps onto which. The transform is undefined when any three
/// corners are collinear (the basis matrix becomes singular).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    /// Top-left corner.
    pub top_left: Point,
    /// Top-right corner.
    pub top_right: Point,
    /// Bottom-right corner.
    pub bottom_right: Point,
    /// Bottom-left corner.
    pub bottom_left: Point,
}

impl Quad {
    /// Create from four corners in correspondence order.
    pub fn new(top_left: Point, top_right: Point, bottom_right: Point, bottom_left: Point) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// The axis-aligned rectangle `[(0,0), (w,0), (w,h), (0,h)]`.
    ///
    /// This is the conventional source quad: the container's untransformed
    /// corners for a container of the given size.
    pub fn from_rect(width: f64, height: f64) -> Self {
        Self {
            top_left: Point::new(0.0, 0.0),
            top_right: Point::new(width, 0.0),
            bottom_right: Point::new(width, height),
            bottom_left: Point::new(0.0, height),
        }
    }

    /// Corners in correspondence order.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }
}

impl From<[[f64; 2]; 4]> for Quad {
    fn from(corners: [[f64; 2]; 4]) -> Self {
        Self {
            top_left: corners[0].into(),
            top_right: corners[1].into(),
            bottom_right: corners[2].into(),
            bottom_left: corners[3].into(),
        }
    }
}

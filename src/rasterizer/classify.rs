//! Vertex classification: split a triangle into two halves with a shared
//! horizontal edge
//!
//! ```text
//!  pMin
//!   .....
//!    .   ....
//!     S ───── pMid        top half:    (pMin, left, right)
//!      ..   .             bottom half: (left, right, pMax)
//!        ...
//!        pMax
//! ```
//!
//! `S` is the point on the long edge pMin-pMax at the height of pMid.
//! Whichever of `S` / pMid lies further left becomes the left midpoint.

use super::math::{Point, Triangle};

/// Triangle edge walked downwards, from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Triangle with one horizontal edge, bounded by a left and a right edge
/// that both run from `y_top()` down to `y_bottom()`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfTriangle {
    pub left: Edge,
    pub right: Edge,
}

impl HalfTriangle {
    /// Half whose apex is above its horizontal base
    pub fn from_apex_above(apex: Point, base_left: Point, base_right: Point) -> Self {
        Self {
            left: Edge::new(apex, base_left),
            right: Edge::new(apex, base_right),
        }
    }

    /// Half whose horizontal base is above its apex
    pub fn from_apex_below(base_left: Point, base_right: Point, apex: Point) -> Self {
        Self {
            left: Edge::new(base_left, apex),
            right: Edge::new(base_right, apex),
        }
    }

    pub fn y_top(&self) -> f32 {
        self.left.start.y
    }

    pub fn y_bottom(&self) -> f32 {
        self.left.end.y
    }

    pub fn height(&self) -> f32 {
        self.y_bottom() - self.y_top()
    }
}

/// A triangle decomposed at the height of its middle vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitTriangle {
    pub top: HalfTriangle,
    pub bottom: HalfTriangle,
}

/// Stable sort of the vertices by ascending y
pub fn sort_by_y(triangle: &Triangle) -> [Point; 3] {
    let mut points = triangle.vertices();
    points.sort_by(|a, b| a.y.total_cmp(&b.y));
    points
}

/// Split a triangle into its top and bottom halves.
///
/// Returns `None` when the triangle has no vertical extent (all vertices on
/// one row) or its extent is not a finite number; such a triangle covers no
/// pixel centers. Either half may still have zero height when two vertices
/// share a y value.
pub fn split_triangle(triangle: &Triangle) -> Option<SplitTriangle> {
    let [p_min, p_mid, p_max] = sort_by_y(triangle);

    let extent = p_max.y - p_min.y;
    if !(extent > 0.0) || !extent.is_finite() {
        return None;
    }

    let f = (p_mid.y - p_min.y) / extent;
    let split = Point::new(p_min.lerp(p_max, f).x, p_mid.y);

    let (mid_left, mid_right) = if split.x < p_mid.x {
        (split, p_mid)
    } else {
        (p_mid, split)
    };

    Some(SplitTriangle {
        top: HalfTriangle::from_apex_above(p_min, mid_left, mid_right),
        bottom: HalfTriangle::from_apex_below(mid_left, mid_right, p_max),
    })
}

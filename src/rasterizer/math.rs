//! 2D point math in buffer cell units

use std::ops::{Add, Sub, Mul};
use serde::{Serialize, Deserialize};

/// 2D point (x right, y down), measured in raster cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `other` (t = 0 gives self, t = 1 gives other)
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point {
            x: self.x * (1.0 - t) + other.x * t,
            y: self.y * (1.0 - t) + other.y * t,
        }
    }

    /// Mirror `other` through this point
    pub fn reflect(self, other: Point) -> Point {
        self * 2.0 - other
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    fn mul(self, s: f32) -> Point {
        Point {
            x: self.x * s,
            y: self.y * s,
        }
    }
}

/// Triangle as three vertices in the order the user placed them
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
}

impl Triangle {
    pub fn new(p0: Point, p1: Point, p2: Point) -> Self {
        Self { p0, p1, p2 }
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.p0, self.p1, self.p2]
    }

    /// Replace one vertex (index 0..3), leaving the others untouched
    pub fn with_vertex(self, index: usize, point: Point) -> Self {
        match index {
            0 => Self { p0: point, ..self },
            1 => Self { p1: point, ..self },
            2 => Self { p2: point, ..self },
            _ => self,
        }
    }

    /// The companion triangle drawn next to this one: (p1, p2, p0 mirrored through p1)
    pub fn reflected(&self) -> Triangle {
        Triangle {
            p0: self.p1,
            p1: self.p2,
            p2: self.p1.reflect(self.p0),
        }
    }
}

//! Geometric primitives: Point, Delta

use std::ops::{Add, Sub};

/// A position in logical pixels (CSS pixels on the web).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Signed displacement from `other` to `self`.
    pub fn delta_from(self, other: Point) -> Delta {
        Delta {
            dx: self.x - other.x,
            dy: self.y - other.y,
        }
    }
}

/// A signed displacement between two points.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Delta {
    pub dx: f32,
    pub dy: f32,
}

impl Delta {
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    pub const ZERO: Delta = Delta { dx: 0.0, dy: 0.0 };

    /// Component-wise absolute value.
    pub fn abs(self) -> Self {
        Self {
            dx: self.dx.abs(),
            dy: self.dy.abs(),
        }
    }
}

impl Sub for Point {
    type Output = Delta;

    fn sub(self, rhs: Point) -> Delta {
        self.delta_from(rhs)
    }
}

impl Add<Delta> for Point {
    type Output = Point;

    fn add(self, rhs: Delta) -> Point {
        Point::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

use crate::geometry::primitives::Vector;

/// Geometric primitive representing a point in world space.
///
/// The second component is the height (y is up), the first and third span the horizontal plane.
#[derive(Debug, Clone, PartialEq, Copy, Default)]
pub struct Point(pub f64, pub f64, pub f64);

impl Point {
    pub const ORIGIN: Point = Point(0.0, 0.0, 0.0);

    pub fn distance(&self, other: &Point) -> f64 {
        self.sq_distance(other).sqrt()
    }

    pub fn sq_distance(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2) + (self.2 - other.2).powi(2)
    }

    /// Distance between the two points when both are projected onto the horizontal plane
    pub fn horizontal_distance(&self, other: &Point) -> f64 {
        ((self.0 - other.0).powi(2) + (self.2 - other.2).powi(2)).sqrt()
    }

    /// Same horizontal position, different height
    pub fn with_height(self, y: f64) -> Point {
        Point(self.0, y, self.2)
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite() && self.2.is_finite()
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, v: Vector) -> Point {
        Point(self.0 + v.0, self.1 + v.1, self.2 + v.2)
    }
}

impl Sub<Point> for Point {
    type Output = Vector;

    fn sub(self, other: Point) -> Vector {
        Vector(self.0 - other.0, self.1 - other.1, self.2 - other.2)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
        self.1.to_bits().hash(state);
        self.2.to_bits().hash(state);
    }
}

impl From<Point> for (f64, f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1, p.2)
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from(p: (f64, f64, f64)) -> Self {
        Point(p.0, p.1, p.2)
    }
}

impl From<[f64; 3]> for Point {
    fn from(p: [f64; 3]) -> Self {
        Point(p[0], p[1], p[2])
    }
}

impl From<Point> for [f64; 3] {
    fn from(p: Point) -> Self {
        [p.0, p.1, p.2]
    }
}

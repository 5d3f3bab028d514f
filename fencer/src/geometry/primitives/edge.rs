use crate::geometry::primitives::{Point, Vector};

/// Line segment between two [`Point`]s.
///
/// Unlike a polygon edge, a zero-length `Edge` is allowed: coincident anchor points simply yield
/// an edge without direction.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub fn new(start: Point, end: Point) -> Self {
        Edge { start, end }
    }

    /// Displacement from start to end
    pub fn vector(&self) -> Vector {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Length of the edge projected onto the horizontal plane
    pub fn horizontal_length(&self) -> f64 {
        self.start.horizontal_distance(&self.end)
    }

    /// Height gained from start to end (negative when descending)
    pub fn rise(&self) -> f64 {
        self.end.1 - self.start.1
    }

    /// Unit vector from start to end, `None` if the edge is degenerate
    pub fn direction(&self) -> Option<Vector> {
        self.vector().normalize()
    }

    /// Point at distance `d` from the start, measured along the edge
    pub fn point_at(&self, d: f64) -> Option<Point> {
        self.direction().map(|dir| self.start + dir * d)
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

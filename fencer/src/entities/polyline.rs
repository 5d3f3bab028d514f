use itertools::Itertools;

use crate::geometry::primitives::{Edge, Point};

/// Number of anchor points a polyline needs before any element is placed on it
pub const MIN_PLANNABLE_POINTS: usize = 3;

/// Ordered sequence of anchor points.
///
/// When closed, an implicit edge runs from the last point back to the first.
/// When open, the last point is a free end.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub is_closed: bool,
}

impl Polyline {
    pub fn new(points: Vec<Point>, is_closed: bool) -> Self {
        Self { points, is_closed }
    }

    pub fn closed(points: impl IntoIterator<Item = impl Into<Point>>) -> Self {
        Self::new(points.into_iter().map_into().collect(), true)
    }

    pub fn open(points: impl IntoIterator<Item = impl Into<Point>>) -> Self {
        Self::new(points.into_iter().map_into().collect(), false)
    }

    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    /// N edges for a closed polyline, N - 1 for an open one
    pub fn n_edges(&self) -> usize {
        match (self.is_closed, self.points.len()) {
            (_, 0) => 0,
            (true, n) => n,
            (false, n) => n - 1,
        }
    }

    /// Edges in drawing order, `(p_i, p_{i+1 mod N})`
    pub fn edges(&self) -> Vec<Edge> {
        let points = self.points.iter().copied();
        let edges: Vec<Edge> = match self.is_closed {
            true => points
                .circular_tuple_windows()
                .map(|(s, e): (Point, Point)| Edge::new(s, e))
                .collect(),
            false => points
                .tuple_windows()
                .map(|(s, e): (Point, Point)| Edge::new(s, e))
                .collect(),
        };
        debug_assert!(edges.len() == self.n_edges());
        edges
    }

    /// Whether placements can be generated for this polyline
    pub fn is_plannable(&self) -> bool {
        self.points.len() >= MIN_PLANNABLE_POINTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn square() -> Vec<Point> {
        vec![
            Point(0.0, 0.0, 0.0),
            Point(4.0, 0.0, 0.0),
            Point(4.0, 0.0, 4.0),
            Point(0.0, 0.0, 4.0),
        ]
    }

    #[test_case(true, 4; "closed")]
    #[test_case(false, 3; "open")]
    fn edge_count(closed: bool, expected: usize) {
        let pl = Polyline::new(square(), closed);
        assert_eq!(pl.n_edges(), expected);
        assert_eq!(pl.edges().len(), expected);
    }

    #[test]
    fn closing_edge_returns_to_start() {
        let pl = Polyline::new(square(), true);
        let last = *pl.edges().last().unwrap();
        assert_eq!(last.start, Point(0.0, 0.0, 4.0));
        assert_eq!(last.end, Point(0.0, 0.0, 0.0));
    }

    #[test]
    fn empty_polyline_has_no_edges() {
        assert_eq!(Polyline::closed(Vec::<Point>::new()).edges().len(), 0);
        assert_eq!(Polyline::open(Vec::<Point>::new()).n_edges(), 0);
    }
}

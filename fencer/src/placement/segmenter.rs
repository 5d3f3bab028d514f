use crate::PlanError;
use crate::entities::ElementSpec;
use crate::geometry::primitives::{Edge, Point};
use crate::util::FPA;

/// Upper bound on the number of elements a single edge may hold
pub const MAX_ELEMENTS_PER_EDGE: usize = 1 << 20;

/// Divides the edge `p0 -> p1` into as many whole elements as fit.
///
/// The i-th sub-segment spans `p0 + dir * L * i` to `p0 + dir * L * (i + 1)`, measured along the full
/// 3D edge. The remainder at the end of the edge is dropped. A zero-length edge yields no sub-segments.
/// More than [`MAX_ELEMENTS_PER_EDGE`] elements on one edge is rejected as a configuration error.
pub fn segment(p0: Point, p1: Point, element: &ElementSpec) -> Result<Vec<Edge>, PlanError> {
    element.validate()?;

    let edge = Edge::new(p0, p1);
    let Some(direction) = edge.direction() else {
        return Ok(vec![]);
    };
    let n = fit_count(edge.length(), element.length);
    if n > MAX_ELEMENTS_PER_EDGE {
        return Err(PlanError::InvalidConfiguration(format!(
            "an edge of length {:.3} would hold {n} elements of length {}, at most {MAX_ELEMENTS_PER_EDGE} are allowed",
            edge.length(),
            element.length
        )));
    }
    let step = direction * element.length;

    let mut sub_segments: Vec<Edge> = (0..n)
        .map(|i| Edge::new(p0 + step * i as f64, p0 + step * (i + 1) as f64))
        .collect();

    //an exactly dividing edge ends on its anchor, without accumulated rounding
    if let Some(last) = sub_segments.last_mut() {
        if FPA(last.end.distance(&p1)) == FPA(0.0) {
            last.end = p1;
        }
    }

    Ok(sub_segments)
}

/// Number of whole elements of `element_length` that fit in `length`:
/// `floor(length / element_length)`, where a quotient within tolerance of the next integer counts as that integer.
pub fn fit_count(length: f64, element_length: f64) -> usize {
    let quotient = length / element_length;
    if !quotient.is_finite() || quotient <= 0.0 {
        return 0;
    }
    match FPA(quotient) == FPA(quotient.round()) {
        true => quotient.round() as usize,
        false => quotient.floor() as usize,
    }
}

/// Length left uncovered at the end of an edge of `length`
pub fn remainder(length: f64, element_length: f64) -> f64 {
    (length - fit_count(length, element_length) as f64 * element_length).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use test_case::test_case;

    fn spec(l: f64) -> ElementSpec {
        ElementSpec::new(l)
    }

    #[test_case(10.0, 2.0, 5; "exact")]
    #[test_case(11.9, 2.0, 5; "remainder dropped")]
    #[test_case(1.9, 2.0, 0; "shorter than one element")]
    #[test_case(200f64.sqrt(), 2.0, 7; "diagonal")]
    #[test_case(0.3 * 3.0, 0.3, 3; "rounding below an integer")]
    fn counts_whole_elements(length: f64, l: f64, expected: usize) {
        assert_eq!(fit_count(length, l), expected);
        let subs = segment(Point(0.0, 0.0, 0.0), Point(length, 0.0, 0.0), &spec(l)).unwrap();
        assert_eq!(subs.len(), expected);
    }

    #[test]
    fn sub_segments_tile_the_edge_from_its_start() {
        let p0 = Point(1.0, 2.0, 3.0);
        let p1 = Point(1.0, 2.0, 10.5);
        let subs = segment(p0, p1, &spec(2.0)).unwrap();
        assert_eq!(subs.len(), 3);
        assert_eq!(subs[0].start, p0);
        for (i, s) in subs.iter().enumerate() {
            assert!(approx_eq!(f64, s.start.2, 3.0 + 2.0 * i as f64, epsilon = 1e-12));
            assert!(approx_eq!(f64, s.length(), 2.0, epsilon = 1e-12));
        }
        for pair in subs.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test_case(Point(0.0, 0.0, 0.0), Point(6.0, 0.0, 8.0), 2.0; "diagonal 10")]
    #[test_case(Point(0.0, 0.0, 0.0), Point(0.0, 3.0, 4.0), 1.0; "climbing 5")]
    #[test_case(Point(-1.0, 5.0, 2.0), Point(-1.9, 5.0, 2.0), 0.3; "short negative x")]
    fn exact_division_ends_on_the_anchor(p0: Point, p1: Point, l: f64) {
        let subs = segment(p0, p1, &spec(l)).unwrap();
        assert!(!subs.is_empty());
        assert_eq!(subs.last().unwrap().end, p1);
    }

    #[test]
    fn length_is_measured_in_3d() {
        // horizontal span of 6 but a 3D length of 10
        let subs = segment(Point(0.0, 0.0, 0.0), Point(6.0, 8.0, 0.0), &spec(2.5)).unwrap();
        assert_eq!(subs.len(), 4);
    }

    #[test]
    fn coincident_anchors_yield_nothing() {
        let p = Point(3.0, 1.0, -2.0);
        assert!(segment(p, p, &spec(1.0)).unwrap().is_empty());
    }

    #[test_case(0.0; "zero")]
    #[test_case(-1.0; "negative")]
    fn non_positive_length_is_a_configuration_error(l: f64) {
        let res = segment(Point(0.0, 0.0, 0.0), Point(10.0, 0.0, 0.0), &spec(l));
        assert!(matches!(res, Err(PlanError::InvalidConfiguration(_))));
    }

    #[test_case(1e-300; "vanishing")]
    #[test_case(1e-6; "just past the limit")]
    fn too_many_elements_is_a_configuration_error(l: f64) {
        assert!(spec(l).validate().is_ok());
        let res = segment(Point(0.0, 0.0, 0.0), Point(10.0, 0.0, 0.0), &spec(l));
        assert!(matches!(res, Err(PlanError::InvalidConfiguration(_))));
    }

    #[test]
    fn remainder_of_the_diagonal() {
        let diagonal = 200f64.sqrt();
        assert!(approx_eq!(f64, remainder(diagonal, 2.0), diagonal - 14.0, epsilon = 1e-12));
        assert_eq!(remainder(10.0, 2.0), 0.0);
    }
}

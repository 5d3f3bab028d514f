use log::{debug, info};

use crate::PlanError;
use crate::entities::{ElementSpec, FenceLayout, Polyline};
use crate::geometry::primitives::{Edge, Point};
use crate::placement::{Planner, segmenter};
use crate::surface::HeightQuery;
use crate::util::SessionConfig;

/// Editing state of a [`FenceSession`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No polyline is being drawn
    Idle,
    /// Anchor points are being appended
    Collecting,
    /// The polyline was closed or finished; no longer editable until the next [`FenceSession::begin_edit`]
    Finalized,
}

/// Drives the drawing of a polyline: `begin_edit`, any number of `add_point`,
/// then `close_as_polygon` or `finish_open`.
#[derive(Clone, Debug)]
pub struct FenceSession {
    pub config: SessionConfig,
    element: ElementSpec,
    state: SessionState,
    polyline: Polyline,
}

/// What the tentative edge toward the pointer would look like if it were committed
#[derive(Clone, Debug, PartialEq)]
pub struct Preview {
    /// From the last committed anchor to the pointer
    pub edge: Edge,
    /// End of every whole element that fits the tentative edge
    pub element_ends: Vec<Point>,
    /// End of the last whole element, `None` if not even one fits
    pub snap_target: Option<Point>,
    /// Additional length needed before one more element fits
    pub missing_length: f64,
}

impl FenceSession {
    pub fn new(element: ElementSpec, config: SessionConfig) -> Self {
        Self {
            config,
            element,
            state: SessionState::Idle,
            polyline: Polyline::default(),
        }
    }

    /// Starts a new polyline, discarding any previous anchor points
    pub fn begin_edit(&mut self) -> Result<(), PlanError> {
        self.element.validate()?;
        if self.state == SessionState::Collecting {
            return Err(PlanError::InvalidState(
                "already collecting anchor points".to_string(),
            ));
        }
        self.polyline = Polyline::default();
        self.state = SessionState::Collecting;
        debug!("[SESSION] started drawing");
        Ok(())
    }

    /// Appends an anchor point as-is
    pub fn add_point(&mut self, point: Point) -> Result<(), PlanError> {
        self.ensure_collecting("add a point")?;
        self.polyline.points.push(point);
        debug!(
            "[SESSION] anchor {} at ({:.3}, {:.3}, {:.3})",
            self.polyline.n_points() - 1,
            point.0,
            point.1,
            point.2
        );
        Ok(())
    }

    /// Appends the anchor point the pointer designates.
    ///
    /// With [`SessionConfig::snap_to_element`] enabled the point is pulled back to the end of the
    /// last whole element of the tentative edge, if at least one fits. Returns the committed point.
    pub fn add_pointer_point(&mut self, pointer: Point) -> Result<Point, PlanError> {
        self.ensure_collecting("add a point")?;
        let point = match (self.config.snap_to_element, self.polyline.points.last()) {
            (true, Some(&last)) => snap_target(last, pointer, &self.element)?.unwrap_or(pointer),
            _ => pointer,
        };
        self.add_point(point)?;
        Ok(point)
    }

    /// Finishes the polyline, connecting the last anchor back to the first
    pub fn close_as_polygon(&mut self) -> Result<&Polyline, PlanError> {
        self.finalize(true)
    }

    /// Finishes the polyline, leaving the last anchor as a free end
    pub fn finish_open(&mut self) -> Result<&Polyline, PlanError> {
        self.finalize(false)
    }

    fn finalize(&mut self, is_closed: bool) -> Result<&Polyline, PlanError> {
        self.ensure_collecting("finish the polyline")?;
        self.polyline.is_closed = is_closed;
        self.state = SessionState::Finalized;
        info!(
            "[SESSION] finished {} polyline with {} anchor point(s)",
            match is_closed {
                true => "closed",
                false => "open",
            },
            self.polyline.n_points()
        );
        Ok(&self.polyline)
    }

    /// Tentative edge from the last anchor to the pointer, while collecting
    pub fn preview(&self, pointer: Option<Point>) -> Option<Preview> {
        if self.state != SessionState::Collecting {
            return None;
        }
        let last = *self.polyline.points.last()?;
        let pointer = pointer?;
        let edge = Edge::new(last, pointer);
        let sub_segments = segmenter::segment(last, pointer, &self.element).ok()?;
        let remainder = segmenter::remainder(edge.length(), self.element.length);

        Some(Preview {
            edge,
            element_ends: sub_segments.iter().map(|s| s.end).collect(),
            snap_target: sub_segments.last().map(|s| s.end),
            missing_length: self.element.length - remainder,
        })
    }

    /// Places the finalized polyline
    pub fn plan<Q>(&self, planner: &Planner, surface: &Q) -> Result<FenceLayout, PlanError>
    where
        Q: HeightQuery + ?Sized,
    {
        match self.polyline() {
            Some(polyline) => planner.plan_layout(polyline, &self.element, surface),
            None => Err(PlanError::InvalidState(format!(
                "cannot place elements while {:?}",
                self.state
            ))),
        }
    }

    /// The polyline, once closed or finished
    pub fn polyline(&self) -> Option<&Polyline> {
        match self.state {
            SessionState::Finalized => Some(&self.polyline),
            _ => None,
        }
    }

    /// Placing is offered once the polyline is finalized with more than two anchors
    pub fn can_plan(&self) -> bool {
        self.polyline().is_some_and(|p| p.is_plannable())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn points(&self) -> &[Point] {
        &self.polyline.points
    }

    pub fn element(&self) -> &ElementSpec {
        &self.element
    }

    /// Replaces the element; only allowed while no polyline is being drawn
    pub fn set_element(&mut self, element: ElementSpec) -> Result<(), PlanError> {
        if self.state == SessionState::Collecting {
            return Err(PlanError::InvalidState(
                "cannot change the element while collecting".to_string(),
            ));
        }
        self.element = element;
        Ok(())
    }

    fn ensure_collecting(&self, action: &str) -> Result<(), PlanError> {
        match self.state {
            SessionState::Collecting => Ok(()),
            state => Err(PlanError::InvalidState(format!(
                "cannot {action} while {state:?}"
            ))),
        }
    }
}

/// End of the last whole element on the tentative edge `last -> pointer`,
/// `None` if the edge is too short for a single element
pub fn snap_target(
    last: Point,
    pointer: Point,
    element: &ElementSpec,
) -> Result<Option<Point>, PlanError> {
    Ok(segmenter::segment(last, pointer, element)?
        .last()
        .map(|s| s.end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::FlatSurface;
    use float_cmp::approx_eq;

    fn session(snap: bool) -> FenceSession {
        FenceSession::new(
            ElementSpec::new(2.0),
            SessionConfig {
                snap_to_element: snap,
            },
        )
    }

    #[test]
    fn walks_through_the_states() {
        let mut s = session(false);
        assert_eq!(s.state(), SessionState::Idle);
        s.begin_edit().unwrap();
        assert_eq!(s.state(), SessionState::Collecting);
        for p in [Point(0.0, 0.0, 0.0), Point(4.0, 0.0, 0.0), Point(4.0, 0.0, 4.0)] {
            s.add_point(p).unwrap();
        }
        assert!(!s.can_plan());
        let polyline = s.close_as_polygon().unwrap().clone();
        assert!(polyline.is_closed);
        assert_eq!(s.state(), SessionState::Finalized);
        assert!(s.can_plan());

        let layout = s.plan(&Planner::default(), &FlatSurface { height: 0.0 }).unwrap();
        assert_eq!(layout.n_placements(), 2 + 2 + 2);
    }

    #[test]
    fn begin_edit_clears_previous_points() {
        let mut s = session(false);
        s.begin_edit().unwrap();
        s.add_point(Point(1.0, 0.0, 1.0)).unwrap();
        s.finish_open().unwrap();
        s.begin_edit().unwrap();
        assert!(s.points().is_empty());
    }

    #[test]
    fn rejects_out_of_order_operations() {
        let mut s = session(false);
        assert!(matches!(s.add_point(Point::ORIGIN), Err(PlanError::InvalidState(_))));
        assert!(matches!(s.finish_open(), Err(PlanError::InvalidState(_))));
        assert!(matches!(
            s.plan(&Planner::default(), &FlatSurface { height: 0.0 }),
            Err(PlanError::InvalidState(_))
        ));
        s.begin_edit().unwrap();
        assert!(matches!(s.begin_edit(), Err(PlanError::InvalidState(_))));
        assert!(matches!(
            s.set_element(ElementSpec::new(1.0)),
            Err(PlanError::InvalidState(_))
        ));
    }

    #[test]
    fn drawing_requires_a_valid_element() {
        let mut s = FenceSession::new(ElementSpec::new(0.0), SessionConfig::default());
        assert!(matches!(s.begin_edit(), Err(PlanError::InvalidConfiguration(_))));
        assert_eq!(s.state(), SessionState::Idle);
    }

    #[test]
    fn pointer_points_snap_to_the_last_whole_element() {
        let mut s = session(true);
        s.begin_edit().unwrap();
        // first point has nothing to snap to
        let first = s.add_pointer_point(Point(0.0, 0.0, 0.0)).unwrap();
        assert_eq!(first, Point(0.0, 0.0, 0.0));

        let second = s.add_pointer_point(Point(7.3, 0.0, 0.0)).unwrap();
        assert!(approx_eq!(f64, second.0, 6.0, epsilon = 1e-12));

        // too short for a single element: the pointer is taken as-is
        let third = s.add_pointer_point(Point(6.0, 0.0, 1.5)).unwrap();
        assert_eq!(third, Point(6.0, 0.0, 1.5));
    }

    #[test]
    fn snapping_can_be_disabled() {
        let mut s = session(false);
        s.begin_edit().unwrap();
        s.add_pointer_point(Point(0.0, 0.0, 0.0)).unwrap();
        let p = s.add_pointer_point(Point(7.3, 0.0, 0.0)).unwrap();
        assert_eq!(p, Point(7.3, 0.0, 0.0));
    }

    #[test]
    fn preview_shows_the_tentative_elements() {
        let mut s = session(true);
        assert_eq!(s.preview(Some(Point::ORIGIN)), None);
        s.begin_edit().unwrap();
        assert_eq!(s.preview(Some(Point::ORIGIN)), None);
        s.add_point(Point(0.0, 0.0, 0.0)).unwrap();
        assert_eq!(s.preview(None), None);

        let preview = s.preview(Some(Point(0.0, 0.0, 5.0))).unwrap();
        assert_eq!(preview.element_ends.len(), 2);
        assert!(approx_eq!(f64, preview.element_ends[1].2, 4.0, epsilon = 1e-12));
        assert_eq!(preview.snap_target, Some(preview.element_ends[1]));
        assert!(approx_eq!(f64, preview.missing_length, 1.0, epsilon = 1e-12));
    }

    #[test]
    fn snapped_edges_fit_exactly() {
        let last = Point(1.0, 0.5, -2.0);
        let target = snap_target(last, Point(8.7, 3.1, 4.4), &ElementSpec::new(1.5))
            .unwrap()
            .unwrap();
        let n = segmenter::segment(last, target, &ElementSpec::new(1.5)).unwrap().len();
        assert!(approx_eq!(f64, last.distance(&target), n as f64 * 1.5, epsilon = 1e-9));
        let remainder = segmenter::remainder(last.distance(&target), 1.5);
        assert!(approx_eq!(f64, remainder, 0.0, epsilon = 1e-9));
    }
}

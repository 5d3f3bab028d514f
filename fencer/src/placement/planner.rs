use log::{debug, info, warn};

use crate::PlanError;
use crate::entities::{EdgeSummary, ElementSpec, FenceLayout, Placement, Polyline};
use crate::geometry::Orientation;
use crate::geometry::primitives::{Edge, Point};
use crate::placement::{segmenter, solver};
use crate::surface::HeightQuery;
use crate::util::PlannerConfig;
use crate::util::assertions;

/// Fills every edge of a polyline with elements, conformed to a surface.
///
/// Holds no state between calls: planning the same input twice yields the same layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct Planner {
    pub config: PlannerConfig,
}

impl Planner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Plans the full layout: placements, per-edge summaries and the number of height misses.
    ///
    /// Either the complete layout is returned or a single [`PlanError::InvalidConfiguration`],
    /// raised before any edge is processed.
    pub fn plan_layout<Q>(
        &self,
        polyline: &Polyline,
        element: &ElementSpec,
        surface: &Q,
    ) -> Result<FenceLayout, PlanError>
    where
        Q: HeightQuery + ?Sized,
    {
        element.validate()?;
        let reference = self.config.heading_reference;
        if reference.unit().is_none() {
            return Err(PlanError::InvalidConfiguration(format!(
                "heading reference needs a finite, non-zero horizontal direction, got {reference:?}"
            )));
        }

        if !polyline.is_plannable() {
            debug!(
                "[PLAN] {} anchor point(s), nothing to place",
                polyline.n_points()
            );
            return Ok(FenceLayout::default());
        }
        if polyline.points.iter().any(|p| !p.is_finite()) {
            warn!("[PLAN] polyline contains non-finite anchor points, their edges stay empty");
        }

        let mut layout = FenceLayout::default();

        for (edge_index, edge) in polyline.edges().into_iter().enumerate() {
            let sub_segments = segmenter::segment(edge.start, edge.end, element)?;
            if edge.is_degenerate() {
                debug!("[PLAN] edge {edge_index} has coincident anchors, skipped");
            }

            let yaw = solver::yaw(&edge, &reference);
            //consecutive sub-segments share an endpoint, conform it only once
            let mut conformed_end: Option<Point> = None;

            for (element_index, sub) in sub_segments.iter().enumerate() {
                let start = match conformed_end {
                    Some(p) => p,
                    None => self.conform(sub.start, surface, &mut layout.n_height_misses),
                };
                let end = self.conform(sub.end, surface, &mut layout.n_height_misses);
                conformed_end = Some(end);

                let span = Edge::new(start, end);
                layout.placements.push(Placement {
                    position: start,
                    orientation: Orientation::new(yaw, solver::tilt(&span)),
                    edge_index,
                    element_index,
                });
            }

            let length = edge.length();
            layout.edges.push(EdgeSummary {
                edge_index,
                length,
                n_elements: sub_segments.len(),
                remainder: segmenter::remainder(length, element.length),
            });
        }

        info!(
            "[PLAN] {} element(s) placed over {} edge(s) ({}), {} height miss(es), {:.3} left uncovered",
            layout.n_placements(),
            layout.edges.len(),
            match polyline.is_closed {
                true => "closed",
                false => "open",
            },
            layout.n_height_misses,
            layout.total_remainder()
        );
        debug_assert!(assertions::layout_matches_polyline(&layout, polyline, element));

        Ok(layout)
    }

    /// Moves `p` onto the surface. On a miss `p` keeps its height on the straight edge.
    fn conform<Q>(&self, p: Point, surface: &Q, n_misses: &mut usize) -> Point
    where
        Q: HeightQuery + ?Sized,
    {
        if !self.config.conform_to_surface {
            return p;
        }
        match surface.query(p.0, p.2) {
            Some(y) if y.is_finite() => p.with_height(y),
            Some(y) => {
                debug!(
                    "[PLAN] surface returned non-finite height {y} at ({:.3}, {:.3}), keeping {:.3}",
                    p.0, p.2, p.1
                );
                *n_misses += 1;
                p
            }
            None => {
                debug!(
                    "[PLAN] no surface at ({:.3}, {:.3}), keeping height {:.3}",
                    p.0, p.2, p.1
                );
                *n_misses += 1;
                p
            }
        }
    }
}

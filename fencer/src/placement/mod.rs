mod planner;

/// Division of an edge into whole elements
pub mod segmenter;

/// Yaw and tilt of individual elements
pub mod solver;

#[doc(inline)]
pub use planner::Planner;
#[doc(inline)]
pub use segmenter::segment;
#[doc(inline)]
pub use solver::orient;

use crate::PlanError;
use crate::entities::{ElementSpec, Placement, Polyline};
use crate::surface::HeightQuery;

/// Computes the placements of `element` along `polyline`, conformed to `surface`,
/// using the default [`PlannerConfig`](crate::util::PlannerConfig).
///
/// Returns an empty list for polylines with fewer than 3 anchor points.
/// Fails with [`PlanError::InvalidConfiguration`] before doing any work if the element length is not strictly positive.
pub fn plan<Q>(
    polyline: &Polyline,
    element: &ElementSpec,
    surface: &Q,
) -> Result<Vec<Placement>, PlanError>
where
    Q: HeightQuery + ?Sized,
{
    Planner::default()
        .plan_layout(polyline, element, surface)
        .map(|layout| layout.placements)
}

//!
//! Places repeated fixed-length elements (fence panels, rails, walls) along a polyline or closed
//! polygon drawn on top of an arbitrary 3D surface.
//!
//! Every element is positioned at the start of its span, turned to the heading of its edge (yaw)
//! and tilted to follow the height change of the surface underneath it (tilt).
//!
//! The entry point is [`plan`], or [`Planner`](placement::Planner) for a configurable variant that
//! also reports per-edge statistics.
//!

/// Ordered anchor points, element specifications and the resulting placements
pub mod entities;

/// Geometric primitives and orientation math
pub mod geometry;

/// Importing, exporting and drawing fences
pub mod io;

/// Segmentation of edges, orientation of elements and the planner combining both
pub mod placement;

/// State machine for interactively drawing a polyline
pub mod session;

/// Height queries against the surface a fence is drawn on
pub mod surface;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::PlanError;

#[doc(inline)]
pub use placement::plan;

use std::fmt::Display;

use crate::geometry::primitives::Point;
use crate::geometry::{HeadingReference, Orientation, Rotation};

/// A single element positioned on the surface.
///
/// Anchored at the start of its span, conformed to the surface height.
/// `edge_index` and `element_index` identify the element but carry no geometric meaning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Point,
    pub orientation: Orientation,
    /// Index of the polyline edge the element was placed on
    pub edge_index: usize,
    /// Sequence index of the element within its edge
    pub element_index: usize,
}

impl Placement {
    pub fn rotation(&self, reference: &HeadingReference) -> Rotation {
        self.orientation.rotation(reference)
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Point(x, y, z) = self.position;
        write!(
            f,
            "edge {} #{}: ({x:.3}, {y:.3}, {z:.3}), {}",
            self.edge_index, self.element_index, self.orientation
        )
    }
}

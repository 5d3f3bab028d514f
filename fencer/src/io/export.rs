use crate::entities::{EdgeSummary, ElementSpec, FenceLayout, Placement};
use crate::geometry::HeadingReference;
use crate::io::ext_repr::{ExtEdgeSummary, ExtPlacement, ExtPlan};

/// Exports a [`FenceLayout`] by composing an [`ExtPlan`] from it.
/// Angles are converted to degrees, placements are labelled after the element and their index within the edge.
pub fn export_plan(
    layout: &FenceLayout,
    element: &ElementSpec,
    reference: &HeadingReference,
) -> ExtPlan {
    ExtPlan {
        placements: layout
            .placements
            .iter()
            .map(|p| export_placement(p, element.label(p.element_index), reference))
            .collect(),
        edges: layout.edges.iter().map(export_edge_summary).collect(),
        height_misses: layout.n_height_misses,
    }
}

pub fn export_placement(
    placement: &Placement,
    label: String,
    reference: &HeadingReference,
) -> ExtPlacement {
    let rotation = placement.rotation(reference);
    ExtPlacement {
        label,
        edge: placement.edge_index,
        index: placement.element_index,
        position: placement.position.into(),
        yaw: placement.orientation.yaw_degrees(),
        tilt: placement.orientation.tilt_degrees(),
        basis: [
            rotation.forward().into(),
            rotation.up().into(),
            rotation.side().into(),
        ],
    }
}

pub fn export_edge_summary(summary: &EdgeSummary) -> ExtEdgeSummary {
    ExtEdgeSummary {
        index: summary.edge_index,
        length: summary.length,
        n_elements: summary.n_elements,
        remainder: summary.remainder,
    }
}

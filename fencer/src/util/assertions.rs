use itertools::Itertools;
use log::error;

use crate::entities::{ElementSpec, FenceLayout, Polyline};
use crate::placement::segmenter;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// A layout is consistent with its input if it has one summary per edge,
/// the element counts match the segmenter and the placements are in drawing order.
pub fn layout_matches_polyline(
    layout: &FenceLayout,
    polyline: &Polyline,
    element: &ElementSpec,
) -> bool {
    if !polyline.is_plannable() {
        return layout.placements.is_empty() && layout.edges.is_empty();
    }

    if layout.edges.len() != polyline.n_edges() {
        error!(
            "layout has {} edge summaries, polyline has {} edges",
            layout.edges.len(),
            polyline.n_edges()
        );
        return false;
    }

    let counts_match = polyline
        .edges()
        .iter()
        .zip(layout.edges.iter())
        .all(|(e, s)| s.n_elements == segmenter::fit_count(e.length(), element.length));
    if !counts_match {
        error!("element counts deviate from the segmenter");
        return false;
    }

    let total: usize = layout.edges.iter().map(|s| s.n_elements).sum();
    if total != layout.placements.len() {
        error!(
            "{} placements for {} counted elements",
            layout.placements.len(),
            total
        );
        return false;
    }

    placements_in_drawing_order(layout)
}

/// Placements are sorted by edge, element indices restart at 0 on every edge and increase by one
pub fn placements_in_drawing_order(layout: &FenceLayout) -> bool {
    layout
        .placements
        .iter()
        .chunk_by(|p| p.edge_index)
        .into_iter()
        .all(|(_, group)| group.enumerate().all(|(i, p)| p.element_index == i))
        && layout
            .placements
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.edge_index <= b.edge_index)
}

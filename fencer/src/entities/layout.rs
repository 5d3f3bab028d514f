use crate::entities::Placement;

/// Result of a planning pass, see [`Planner::plan_layout`](crate::placement::Planner::plan_layout).
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FenceLayout {
    /// Placements in drawing order: edge by edge, element by element
    pub placements: Vec<Placement>,
    /// One summary per considered edge
    pub edges: Vec<EdgeSummary>,
    /// Number of endpoint heights that could not be resolved by the surface
    pub n_height_misses: usize,
}

impl FenceLayout {
    pub fn n_placements(&self) -> usize {
        self.placements.len()
    }

    /// Total length of the edges left empty because no whole element fit
    pub fn total_remainder(&self) -> f64 {
        self.edges.iter().map(|e| e.remainder).sum()
    }
}

/// How a single edge of the polyline was filled
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeSummary {
    pub edge_index: usize,
    /// Length of the edge between the two (unconformed) anchor points
    pub length: f64,
    pub n_elements: usize,
    /// Length at the end of the edge not covered by an element
    pub remainder: f64,
}

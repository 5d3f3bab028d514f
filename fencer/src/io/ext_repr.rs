use serde::{Deserialize, Serialize};

/// External representation of a fence to be planned: the anchor points, the element to repeat
/// along them and the surface they are drawn on.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtFence {
    /// Optional name, used in the output file names
    #[serde(default)]
    pub name: Option<String>,
    /// Anchor points `[x, y, z]` in drawing order (y is up)
    pub points: Vec<[f64; 3]>,
    /// Whether an edge connects the last point back to the first
    #[serde(default)]
    pub closed: bool,
    pub element: ExtElement,
    /// Surface to conform to. No surface if not specified
    #[serde(default)]
    pub surface: ExtSurface,
}

/// External representation of an [`ElementSpec`](crate::entities::ElementSpec).
/// Exactly one of `length` or `bounds` is expected.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Axis-aligned bounding box of the element's model, `[min, max]`.
    /// Its x-extent is used as length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<[[f64; 3]; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Various ways to represent the surface
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ExtSurface {
    /// No surface, every height query misses
    #[default]
    None,
    /// Horizontal plane at a constant height
    Flat { height: f64 },
    /// Regular grid of height samples, stored row by row (x varies fastest)
    HeightField {
        origin: (f64, f64),
        cell_size: f64,
        resolution: (usize, usize),
        heights: Vec<f64>,
    },
}

/// External representation of a [`Placement`](crate::entities::Placement).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacement {
    pub label: String,
    pub edge: usize,
    pub index: usize,
    pub position: [f64; 3],
    /// Yaw in degrees
    pub yaw: f64,
    /// Tilt in degrees, positive uphill
    pub tilt: f64,
    /// Columns of the rotation matrix: local forward, up and side axes
    pub basis: [[f64; 3]; 3],
}

/// External representation of an [`EdgeSummary`](crate::entities::EdgeSummary).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtEdgeSummary {
    pub index: usize,
    pub length: f64,
    pub n_elements: usize,
    pub remainder: f64,
}

/// External representation of a [`FenceLayout`](crate::entities::FenceLayout).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlan {
    pub placements: Vec<ExtPlacement>,
    pub edges: Vec<ExtEdgeSummary>,
    pub height_misses: usize,
}

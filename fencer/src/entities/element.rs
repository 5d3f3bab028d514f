use crate::PlanError;
use crate::geometry::primitives::Point;

/// Fixed-size unit tiled along every edge.
///
/// The length is authoritative: edges are filled with as many whole elements as fit
/// and the remainder is left empty, elements are never stretched.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementSpec {
    /// Real-world length (x-extent) of one element
    pub length: f64,
    /// Optional name, used to label the placements
    pub name: Option<String>,
}

impl ElementSpec {
    pub fn new(length: f64) -> Self {
        Self { length, name: None }
    }

    pub fn named(length: f64, name: impl Into<String>) -> Self {
        Self {
            length,
            name: Some(name.into()),
        }
    }

    /// Element whose length is the x-extent of an axis-aligned bounding box
    pub fn from_bounds(min: Point, max: Point) -> Self {
        Self::new((max.0 - min.0).abs())
    }

    /// Rejects lengths for which segmentation is undefined
    pub fn validate(&self) -> Result<(), PlanError> {
        match self.length.is_finite() && self.length > 0.0 {
            true => Ok(()),
            false => Err(PlanError::InvalidConfiguration(format!(
                "element length must be finite and strictly positive, got {}",
                self.length
            ))),
        }
    }

    pub fn label(&self, index: usize) -> String {
        format!("{} ({index})", self.name.as_deref().unwrap_or("Fence Element"))
    }
}

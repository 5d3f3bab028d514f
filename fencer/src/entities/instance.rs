use crate::entities::{ElementSpec, Polyline};
use crate::surface::HeightQuery;

/// Everything needed to plan a fence: where it runs, what it is made of and what it stands on.
pub struct FenceInstance {
    pub name: String,
    pub polyline: Polyline,
    pub element: ElementSpec,
    pub surface: Box<dyn HeightQuery>,
}

use serde::{Deserialize, Serialize};

use crate::geometry::HeadingReference;

///Configuration of the [`Planner`](crate::placement::Planner)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PlannerConfig {
    ///Horizontal direction from which every yaw is measured
    #[serde(default)]
    pub heading_reference: HeadingReference,
    ///If disabled, the height query is never consulted and elements follow the straight edges between anchors
    #[serde(default = "enabled")]
    pub conform_to_surface: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            heading_reference: HeadingReference::default(),
            conform_to_surface: true,
        }
    }
}

///Configuration of a [`FenceSession`](crate::session::FenceSession)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig {
    ///Shorten every new edge to the end of its last whole element before it is committed
    #[serde(default = "enabled")]
    pub snap_to_element: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            snap_to_element: true,
        }
    }
}

fn enabled() -> bool {
    true
}

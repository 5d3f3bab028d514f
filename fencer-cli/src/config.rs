use serde::{Deserialize, Serialize};

use fencer::io::svg::SvgDrawOptions;
use fencer::util::{PlannerConfig, SessionConfig};

/// Configuration for the fencer driver
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct FencerCliConfig {
    /// Configuration of the planner
    #[serde(default)]
    pub planner: PlannerConfig,
    /// If defined, the anchor points are treated as pointer positions and replayed through an
    /// editing session with this configuration before planning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionConfig>,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

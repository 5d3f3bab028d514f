use serde::{Deserialize, Serialize};

use fencer::io::ext_repr::{ExtFence, ExtPlan};

use crate::config::FencerCliConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct FenceOutput {
    #[serde(flatten)]
    pub fence: ExtFence,
    pub plan: ExtPlan,
    pub config: FencerCliConfig,
    /// Wall-clock time spent planning, in milliseconds
    pub run_time_ms: u64,
}

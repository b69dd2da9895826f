//! Planner configuration.
//!
//! Only the cost mode is tunable. Dimension weights are fixed constants
//! (see [`crate::model::DIMENSION_WEIGHTS`]).

use serde::{Deserialize, Serialize};

use crate::planner::CostMode;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Cost model used when the agent plans toward a goal.
    pub mode: CostMode,
}

impl PlannerConfig {
    pub fn with_mode(mut self, mode: CostMode) -> Self {
        self.mode = mode;
        self
    }

    /// Parse a JSON document such as `{"mode": "unit"}`. Missing fields
    /// take their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| Error::Config(e.to_string()))
    }
}

//! Flip planner — informed search over the code hypercube.
//!
//! The graph is implicit: [`transition::neighbors`] produces edges on
//! demand and [`heuristic`] estimates the remaining cost. Both are keyed
//! by a [`CostMode`], and [`astar`] pairs them so the estimate always
//! matches the edge costs it is searching under.

pub mod heuristic;
pub mod transition;
pub mod astar;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{Code, Dimension};
use crate::{Error, Result};

pub use astar::{SearchResult, search, search_codes};
pub use heuristic::{hamming, weighted_mismatch};
pub use transition::neighbors;

/// Edge-cost model for the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostMode {
    /// Every flip costs 1.
    Unit,
    /// A flip costs the weight of the flipped dimension.
    #[default]
    Weighted,
}

impl CostMode {
    pub fn as_str(self) -> &'static str {
        match self {
            CostMode::Unit => "unit",
            CostMode::Weighted => "weighted",
        }
    }

    /// Cost of the edge that flips `dim`.
    pub fn edge_cost(self, dim: Dimension) -> u32 {
        match self {
            CostMode::Unit => 1,
            CostMode::Weighted => dim.weight(),
        }
    }

    /// Admissible, consistent estimate of the cost from `from` to `goal`.
    pub fn heuristic(self, from: Code, goal: Code) -> u32 {
        match self {
            CostMode::Unit => hamming(from, goal),
            CostMode::Weighted => weighted_mismatch(from, goal),
        }
    }
}

impl FromStr for CostMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "unit" => Ok(CostMode::Unit),
            "weighted" => Ok(CostMode::Weighted),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for CostMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Transition Generator — one-flip neighbors of a code.

use smallvec::SmallVec;

use super::CostMode;
use crate::model::{Code, Dimension};

/// Neighbors of a code with their edge costs, in dimension order.
pub type Neighbors = SmallVec<[(Code, u32); 4]>;

/// Flip each dimension of `code` in turn, keeping the other three letters.
///
/// A flipped code is kept only if the registry knows it; on the full
/// hypercube every vertex has exactly 4 neighbors.
pub fn neighbors(code: Code, mode: CostMode) -> Neighbors {
    Dimension::ALL
        .into_iter()
        .filter_map(|dim| code.flip(dim).map(|next| (next, mode.edge_cost(dim))))
        .collect()
}

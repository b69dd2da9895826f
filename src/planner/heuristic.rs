//! Heuristic Provider — remaining-cost estimates, one per cost mode.
//!
//! Each unmatched dimension needs at least one flip, and a flip only ever
//! fixes its own dimension. So counting mismatches (unit mode) or summing
//! their weights (weighted mode) never overestimates, and on the hypercube
//! it is exact.

use crate::model::Code;

/// Number of dimensions where `a` and `b` differ. Pairs with unit mode.
pub fn hamming(a: Code, b: Code) -> u32 {
    a.mismatches(b).count() as u32
}

/// Sum of the weights of the dimensions where `a` and `b` differ.
/// Pairs with weighted mode.
pub fn weighted_mismatch(a: Code, b: Code) -> u32 {
    a.mismatches(b).map(|d| d.weight()).sum()
}

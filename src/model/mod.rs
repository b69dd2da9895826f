//! # Type Model
//!
//! The fixed vocabulary every other module speaks: dimensions, their
//! letters and weights, and the 16-entry code registry.
//!
//! Design rule: pure data plus a validator. No search, no state.

pub mod dimension;
pub mod code;
pub mod registry;

pub use dimension::{Dimension, DIMENSION_WEIGHTS};
pub use code::Code;
pub use registry::{ALL_CODES, UNKNOWN_DESCRIPTION, description, is_valid};

//! # typeflip — Trait-Flip Planning over Four-Letter Personality Codes
//!
//! Plans the cheapest sequence of single-trait changes ("flips") that turns
//! one four-letter code into another, and explains what each letter of a
//! code means.
//!
//! ## Design Principles
//!
//! 1. **Registry-first**: every `Code` is validated against the 16-entry registry
//! 2. **Implicit graph**: the 4-dimensional hypercube is never materialized
//! 3. **Mode-matched heuristics**: each `CostMode` carries its own admissible estimate
//! 4. **Classifier at the seam**: predictions arrive through the `Classifier` trait
//!
//! ## Quick Start
//!
//! ```rust
//! use typeflip::{explain, search};
//!
//! # fn example() -> typeflip::Result<()> {
//! let plan = search("ISFP", "ENFP", "weighted")?;
//! assert_eq!(plan.cost, 5);
//! assert_eq!(plan.path.len(), 3);
//!
//! let why = explain("INTJ")?;
//! assert_eq!(why.clauses.len(), 4);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Cost Modes
//!
//! | Mode | Edge cost | Heuristic |
//! |------|-----------|-----------|
//! | `unit` | 1 per flip | Hamming distance |
//! | `weighted` (default) | weight of the flipped dimension | sum of mismatched weights |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod planner;
pub mod reasoning;
pub mod agent;
pub mod config;

// ============================================================================
// Re-exports: Model (the registry)
// ============================================================================

pub use model::{Code, Dimension, ALL_CODES, DIMENSION_WEIGHTS, description, is_valid};

// ============================================================================
// Re-exports: Planner
// ============================================================================

pub use planner::{CostMode, SearchResult, search, search_codes};

// ============================================================================
// Re-exports: Reasoning
// ============================================================================

pub use reasoning::{Explanation, explain, explain_code};

// ============================================================================
// Re-exports: Agent + Config
// ============================================================================

pub use agent::{Agent, Analysis, Classifier, FixedClassifier, Plan, Prediction};
pub use config::PlannerConfig;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid type code: {0:?}")]
    InvalidCode(String),

    #[error("Invalid cost mode: {0:?} (expected \"unit\" or \"weighted\")")]
    InvalidMode(String),

    #[error("No plan found from {start} to {goal}")]
    NoPlanFound { start: Code, goal: Code },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Integrating agent — prediction in, merged analysis out.
//!
//! The `Classifier` trait is the contract between this crate and whatever
//! guesses a starting code from survey answers. The agent explains the
//! predicted code and, when a goal is given, plans toward it.
//!
//! ```text
//! answers ──Classifier──▶ Prediction ──explain──▶ Analysis
//!                              │                     ▲
//!                              └──search(goal)───────┘ (plan | goal_error)
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::PlannerConfig;
use crate::model::Code;
use crate::planner::{CostMode, SearchResult, search_codes};
use crate::reasoning::explain;
use crate::{Error, Result};

// ============================================================================
// Classifier seam
// ============================================================================

/// A predicted starting code. `confidence` is a percentage in `0..=100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub code: String,
    pub confidence: f64,
}

impl Prediction {
    pub fn new(code: impl Into<String>, confidence: f64) -> Self {
        Self { code: code.into(), confidence }
    }
}

/// Anything that can turn survey answers into a predicted code.
pub trait Classifier {
    fn predict(&self, answers: &[i8]) -> Result<Prediction>;
}

/// Classifier that ignores its input and returns a preset prediction.
#[derive(Debug, Clone)]
pub struct FixedClassifier {
    prediction: Prediction,
}

impl FixedClassifier {
    pub fn new(code: impl Into<String>, confidence: f64) -> Self {
        Self { prediction: Prediction::new(code, confidence) }
    }
}

impl Classifier for FixedClassifier {
    fn predict(&self, _answers: &[i8]) -> Result<Prediction> {
        Ok(self.prediction.clone())
    }
}

// ============================================================================
// Merged output
// ============================================================================

/// Presentation form of a search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    pub goal: Code,
    pub path: Vec<Code>,
    pub steps_required: u32,
    pub nodes_expanded: usize,
    /// Search efficiency as a percentage, e.g. `"75.0%"`.
    pub efficiency: String,
}

impl From<SearchResult> for Plan {
    fn from(result: SearchResult) -> Self {
        Self {
            goal: result.goal(),
            steps_required: result.cost,
            nodes_expanded: result.expanded.len(),
            efficiency: format!("{:.1}%", result.efficiency * 100.0),
            path: result.path,
        }
    }
}

/// Marker for a goal code that failed validation. No search was attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidGoal {
    pub value: String,
    pub message: String,
}

/// Everything the agent knows about one prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub predicted_type: Code,
    /// Classifier confidence, e.g. `"87.5%"`.
    pub confidence: String,
    pub description: &'static str,
    pub reasoning: [&'static str; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_error: Option<InvalidGoal>,
}

impl Analysis {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// Agent
// ============================================================================

/// Wraps a classifier and a planner configuration.
pub struct Agent<C: Classifier> {
    classifier: C,
    config: PlannerConfig,
}

impl<C: Classifier> Agent<C> {
    /// Agent with the default configuration (weighted mode).
    pub fn with_classifier(classifier: C) -> Self {
        Self::with_config(classifier, PlannerConfig::default())
    }

    pub fn with_config(classifier: C, config: PlannerConfig) -> Self {
        Self { classifier, config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Classify `answers`, then merge reasoning and planning for the result.
    pub fn analyze(&self, answers: &[i8], goal: Option<&str>) -> Result<Analysis> {
        let prediction = self.classifier.predict(answers)?;
        self.analyze_prediction(&prediction, goal)
    }

    /// Merge reasoning and planning for an existing prediction.
    ///
    /// An invalid predicted code is an error. An invalid goal is not: it is
    /// reported in `goal_error` next to the reasoning. An empty goal means
    /// no goal.
    pub fn analyze_prediction(&self, prediction: &Prediction, goal: Option<&str>) -> Result<Analysis> {
        self.analyze_with(prediction, goal, search_codes)
    }

    fn analyze_with<P>(&self, prediction: &Prediction, goal: Option<&str>, plan: P) -> Result<Analysis>
    where
        P: Fn(Code, Code, CostMode) -> Result<SearchResult>,
    {
        if !(0.0..=100.0).contains(&prediction.confidence) {
            return Err(Error::Classifier(format!(
                "confidence {} outside 0..=100",
                prediction.confidence
            )));
        }

        let explanation = explain(&prediction.code)?;
        let mut analysis = Analysis {
            predicted_type: explanation.code,
            confidence: format!("{:.1}%", prediction.confidence),
            description: explanation.description,
            reasoning: explanation.clauses,
            plan: None,
            goal_error: None,
        };

        let Some(raw_goal) = goal.filter(|g| !g.is_empty()) else {
            return Ok(analysis);
        };

        match Code::parse(raw_goal) {
            Ok(goal) => match plan(explanation.code, goal, self.config.mode) {
                Ok(result) => analysis.plan = Some(result.into()),
                // Already logged by the search; the plan stays absent.
                Err(Error::NoPlanFound { .. }) => {}
                Err(e) => return Err(e),
            },
            Err(e) => {
                warn!(goal = raw_goal, "rejected goal code");
                analysis.goal_error = Some(InvalidGoal {
                    value: raw_goal.to_string(),
                    message: e.to_string(),
                });
            }
        }

        Ok(analysis)
    }
}

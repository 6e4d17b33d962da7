use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{DifficultyLevel, ScenarioCategory};

/// A speaking prompt with its context, category, and difficulty.
///
/// Scenarios are generated fresh per request and carry no identity; once
/// produced they are never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// The task presented to the learner.
    pub prompt: String,
    /// Background for the situation.
    pub context: String,
    pub category: ScenarioCategory,
    pub difficulty: DifficultyLevel,
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ErrorSeverity, Scenario};

pub const MIN_SCORE: f32 = 0.0;
pub const MAX_SCORE: f32 = 100.0;

/// A grammar mistake found in the transcript, with its fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GrammarError {
    /// The incorrect phrase as spoken.
    pub original: String,
    pub correction: String,
    pub explanation: String,
    pub severity: ErrorSeverity,
}

/// A pronunciation problem inferred from transcription artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PronunciationIssue {
    pub word: String,
    pub issue: String,
    pub suggestion: String,
    /// Known ESL mistake pattern (e.g. "th" spoken as "s"); empty string
    /// when none applies.
    pub common_mistake: String,
}

/// Whether and how well the response addressed its scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RelevanceAnalysis {
    pub is_relevant: bool,
    pub analysis: String,
    /// Points the response should have covered. Always present, empty when
    /// nothing is missing.
    pub missing_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FluencyFeedback {
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Per-dimension scores on the closed [0, 100] scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Scores {
    #[schemars(range(min = 0.0, max = 100.0))]
    pub pronunciation: f32,
    #[schemars(range(min = 0.0, max = 100.0))]
    pub grammar: f32,
    #[schemars(range(min = 0.0, max = 100.0))]
    pub relevance: f32,
    #[schemars(range(min = 0.0, max = 100.0))]
    pub fluency: f32,
    #[schemars(range(min = 0.0, max = 100.0))]
    pub overall: f32,
}

impl Scores {
    /// Rejects any score outside [0, 100]. The provider is asked for bounded
    /// values through the schema, but the network boundary is not trusted.
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("pronunciation", self.pronunciation),
            ("grammar", self.grammar),
            ("relevance", self.relevance),
            ("fluency", self.fluency),
            ("overall", self.overall),
        ];
        for (name, value) in fields {
            if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
                return Err(format!(
                    "score `{}` is {}, expected a value in [{}, {}]",
                    name, value, MIN_SCORE, MAX_SCORE
                ));
            }
        }
        Ok(())
    }
}

/// All feedback dimensions for one response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Feedback {
    pub grammar: Vec<GrammarError>,
    pub pronunciation: Vec<PronunciationIssue>,
    pub relevance: RelevanceAnalysis,
    pub fluency: FluencyFeedback,
}

/// The full scored result for one transcribed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Evaluation {
    /// The transcript the scores refer to. Services overwrite this with the
    /// learner's actual transcript; the model's echo is never trusted.
    pub transcription: String,
    pub scores: Scores,
    pub feedback: Feedback,
    /// A model answer at the scenario's difficulty level.
    pub suggested_response: String,
    /// Encouraging wrap-up: praise, key improvement areas, encouragement.
    pub summary: String,
    /// A fresh scenario varying category and difficulty from the current one.
    pub next_scenario: Scenario,
}

impl Evaluation {
    pub fn validate(&self) -> Result<(), String> {
        self.scores.validate()
    }
}

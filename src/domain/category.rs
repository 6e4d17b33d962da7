use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Situational category of a speaking practice scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioCategory {
    Daily,
    Business,
    Travel,
    Shopping,
    Dining,
    Medical,
    Social,
    Education,
}

impl ScenarioCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioCategory::Daily => "daily",
            ScenarioCategory::Business => "business",
            ScenarioCategory::Travel => "travel",
            ScenarioCategory::Shopping => "shopping",
            ScenarioCategory::Dining => "dining",
            ScenarioCategory::Medical => "medical",
            ScenarioCategory::Social => "social",
            ScenarioCategory::Education => "education",
        }
    }
}

impl fmt::Display for ScenarioCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How much a grammar error impacts clarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    Minor,
    Moderate,
    Major,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorSeverity::Minor => "minor",
            ErrorSeverity::Moderate => "moderate",
            ErrorSeverity::Major => "major",
        };
        write!(f, "{}", label)
    }
}

mod evaluate;
mod health;
mod scenario;
mod transcribe;

pub use evaluate::evaluate_handler;
pub use health::health_handler;
pub use scenario::scenario_handler;
pub use transcribe::transcribe_handler;

use serde::Serialize;

/// Error body shared by every route: a short summary plus the upstream
/// error chain when one exists.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

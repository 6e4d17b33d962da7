mod error;
mod evaluation_service;
mod scenario_service;
mod transcription_service;

pub use error::CoachError;
pub use evaluation_service::EvaluationService;
pub use scenario_service::ScenarioService;
pub use transcription_service::{TranscriptionService, DEFAULT_LANGUAGE};

/// Pick the credential for one provider call: an explicit per-call key wins,
/// else the key captured from the environment at startup.
pub(crate) fn resolve_api_key<'a>(
    explicit: Option<&'a str>,
    configured: Option<&'a str>,
) -> Result<&'a str, CoachError> {
    explicit
        .filter(|key| !key.is_empty())
        .or_else(|| configured.filter(|key| !key.is_empty()))
        .ok_or(CoachError::MissingApiKey)
}

use crate::application::ports::{LanguageModelError, TranscriptionError};

/// Failures surfaced by the capability services. Every variant aborts the
/// whole request; there are no partial results to clean up.
#[derive(Debug, thiserror::Error)]
pub enum CoachError {
    #[error("no OpenAI API key provided and none configured")]
    MissingApiKey,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("model output failed validation: {0}")]
    InvalidModelOutput(String),
    #[error("completion failed: {0}")]
    Model(#[from] LanguageModelError),
    #[error("transcription failed: {0}")]
    Transcription(#[from] TranscriptionError),
}

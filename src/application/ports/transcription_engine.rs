use crate::domain::{AudioUpload, Transcription};

/// Speech-to-text against a hosted provider.
pub trait TranscriptionEngine: Send + Sync {
    fn transcribe(
        &self,
        api_key: &str,
        upload: &AudioUpload,
        language: &str,
    ) -> impl std::future::Future<Output = Result<Transcription, TranscriptionError>> + Send + Sync;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

use std::sync::Arc;

use crate::application::ports::TranscriptionEngine;
use crate::domain::{AudioUpload, Transcription};

use super::{resolve_api_key, CoachError};

pub const DEFAULT_LANGUAGE: &str = "en";

/// Converts learner audio to text through the transcription engine.
pub struct TranscriptionService<T: TranscriptionEngine> {
    engine: Arc<T>,
    default_api_key: Option<String>,
}

impl<T: TranscriptionEngine> TranscriptionService<T> {
    pub fn new(engine: Arc<T>, default_api_key: Option<String>) -> Self {
        Self {
            engine,
            default_api_key,
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn transcribe(
        &self,
        api_key: Option<&str>,
        upload: &AudioUpload,
        language: &str,
    ) -> Result<Transcription, CoachError> {
        let key = resolve_api_key(api_key, self.default_api_key.as_deref())?;

        if upload.filename.trim().is_empty() {
            return Err(CoachError::InvalidInput(
                "audio upload is missing a file name".to_string(),
            ));
        }
        if upload.bytes.is_empty() {
            return Err(CoachError::InvalidInput(
                "audio upload contains no data".to_string(),
            ));
        }

        let transcription = self.engine.transcribe(key, upload, language).await?;

        tracing::info!(chars = transcription.text.len(), "Audio transcribed");

        Ok(transcription)
    }
}

use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioUpload, Transcription, WordTiming};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "whisper-1";

/// Whisper speech-to-text adapter.
pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

#[derive(Deserialize)]
struct VerboseTranscription {
    text: String,
    words: Option<Vec<RecognizedWord>>,
}

#[derive(Deserialize)]
struct RecognizedWord {
    word: String,
    start: f32,
    end: f32,
}

impl OpenAiWhisperEngine {
    pub fn new(base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

impl TranscriptionEngine for OpenAiWhisperEngine {
    fn transcribe(
        &self,
        api_key: &str,
        upload: &AudioUpload,
        language: &str,
    ) -> impl std::future::Future<Output = Result<Transcription, TranscriptionError>> + Send + Sync {
        async move {
        let url = format!("{}/audio/transcriptions", self.base_url.trim_end_matches('/'));

        let file_part = multipart::Part::bytes(upload.bytes.clone())
            .file_name(upload.filename.clone())
            .mime_str(upload.mime_type())
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))?;

        // verbose_json carries the word-level timing the plain formats drop.
        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("language", language.to_string())
            .text("response_format", "verbose_json")
            .text("timestamp_granularities[]", "word")
            .part("file", file_part);

        tracing::debug!(
            model = %self.model,
            language = %language,
            bytes = upload.bytes.len(),
            "Sending audio to Whisper"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: VerboseTranscription = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(e.to_string()))?;

        tracing::info!(
            chars = result.text.len(),
            words = result.words.as_ref().map(Vec::len).unwrap_or(0),
            "Whisper transcription completed"
        );

        Ok(Transcription {
            text: result.text.trim().to_string(),
            words: result.words.map(|words| {
                words
                    .into_iter()
                    .map(|w| WordTiming {
                        word: w.word,
                        start: w.start,
                        end: w.end,
                    })
                    .collect()
            }),
        })
        }
    }
}

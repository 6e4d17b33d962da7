use std::sync::Arc;

use rig::completion::ToolDefinition;
use rig::tool::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LanguageModel, TranscriptionEngine};
use crate::application::services::{
    CoachError, EvaluationService, ScenarioService, TranscriptionService, DEFAULT_LANGUAGE,
};
use crate::domain::{json_schema_for, AudioUpload, Evaluation, Scenario, Transcription};

/// Generate a fresh practice scenario.
pub struct GenerateScenarioTool<L: LanguageModel + 'static> {
    service: Arc<ScenarioService<L>>,
}

impl<L: LanguageModel + 'static> GenerateScenarioTool<L> {
    pub fn new(service: Arc<ScenarioService<L>>) -> Self {
        Self { service }
    }
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateScenarioArgs {
    /// Optional OpenAI API key override.
    pub api_key: Option<String>,
    /// Sampling temperature for scenario creativity.
    pub temperature: Option<f32>,
}

impl<L: LanguageModel + 'static> Tool for GenerateScenarioTool<L> {
    const NAME: &'static str = "generate_scenario";

    type Error = CoachError;
    type Args = GenerateScenarioArgs;
    type Output = Scenario;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description:
                "Generate a creative ESL speaking practice scenario with context, category, and difficulty."
                    .to_string(),
            parameters: json_schema_for::<GenerateScenarioArgs>(),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        self.service
            .generate(args.api_key.as_deref(), args.temperature)
            .await
    }
}

/// Evaluate a transcribed spoken response.
pub struct EvaluateSpeechTool<L: LanguageModel + 'static> {
    service: Arc<EvaluationService<L>>,
}

impl<L: LanguageModel + 'static> EvaluateSpeechTool<L> {
    pub fn new(service: Arc<EvaluationService<L>>) -> Self {
        Self { service }
    }
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateSpeechArgs {
    /// Optional OpenAI API key override.
    pub api_key: Option<String>,
    /// Scenario the learner responded to.
    pub scenario: Scenario,
    /// Transcribed learner response.
    pub transcription: String,
    /// Sampling temperature when generating the evaluation.
    pub temperature: Option<f32>,
}

impl<L: LanguageModel + 'static> Tool for EvaluateSpeechTool<L> {
    const NAME: &'static str = "evaluate_spoken_english";

    type Error = CoachError;
    type Args = EvaluateSpeechArgs;
    type Output = Evaluation;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description:
                "Evaluate a spoken English response, returning structured scores, feedback, and a next scenario."
                    .to_string(),
            parameters: json_schema_for::<EvaluateSpeechArgs>(),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        self.service
            .evaluate(
                args.api_key.as_deref(),
                &args.scenario,
                &args.transcription,
                args.temperature,
            )
            .await
    }
}

/// Transcribe an audio file from disk.
pub struct TranscribeAudioTool<T: TranscriptionEngine + 'static> {
    service: Arc<TranscriptionService<T>>,
}

impl<T: TranscriptionEngine + 'static> TranscribeAudioTool<T> {
    pub fn new(service: Arc<TranscriptionService<T>>) -> Self {
        Self { service }
    }
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeAudioArgs {
    /// Optional OpenAI API key override.
    pub api_key: Option<String>,
    /// Path to the audio file to transcribe.
    pub path: String,
    /// Language code (e.g. "en" for English).
    pub language: Option<String>,
}

impl<T: TranscriptionEngine + 'static> Tool for TranscribeAudioTool<T> {
    const NAME: &'static str = "transcribe_audio";

    type Error = CoachError;
    type Args = TranscribeAudioArgs;
    type Output = Transcription;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description:
                "Convert speech audio to text using Whisper. Returns the transcript with optional word-level timestamps."
                    .to_string(),
            parameters: json_schema_for::<TranscribeAudioArgs>(),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        let bytes = tokio::fs::read(&args.path)
            .await
            .map_err(|e| CoachError::InvalidInput(format!("failed to read {}: {}", args.path, e)))?;

        let filename = std::path::Path::new(&args.path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("audio")
            .to_string();
        let upload = AudioUpload::new(
            filename,
            Some(mime_for_extension(&args.path).to_string()),
            bytes,
        );

        self.service
            .transcribe(
                args.api_key.as_deref(),
                &upload,
                args.language.as_deref().unwrap_or(DEFAULT_LANGUAGE),
            )
            .await
    }
}

/// Infer a MIME type from a file extension.
fn mime_for_extension(path: &str) -> &'static str {
    match path
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
        .as_str()
    {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        "m4a" | "mp4" => "audio/mp4",
        "ogg" => "audio/ogg",
        "webm" => "audio/webm",
        _ => "application/octet-stream",
    }
}

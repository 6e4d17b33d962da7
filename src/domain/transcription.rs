use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Text derived from spoken audio, with optional word-level timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Transcription {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<WordTiming>>,
}

/// One recognized word. Offsets are seconds from the start of the audio and
/// non-decreasing across the sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WordTiming {
    pub word: String,
    pub start: f32,
    pub end: f32,
}

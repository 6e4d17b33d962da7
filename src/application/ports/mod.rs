mod language_model;
mod transcription_engine;

pub use language_model::{LanguageModel, LanguageModelError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};

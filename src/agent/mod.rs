//! Tool wrappers for agent frameworks: the same three capabilities the HTTP
//! routes expose, invocable by a model-driven agent.

mod tools;

pub use tools::{
    EvaluateSpeechArgs, EvaluateSpeechTool, GenerateScenarioArgs, GenerateScenarioTool,
    TranscribeAudioArgs, TranscribeAudioTool,
};

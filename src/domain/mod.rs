mod audio_upload;
mod category;
mod difficulty;
mod evaluation;
mod scenario;
mod schema;
mod severity;
mod transcription;

pub use audio_upload::AudioUpload;
pub use category::ScenarioCategory;
pub use difficulty::DifficultyLevel;
pub use evaluation::{
    Evaluation, Feedback, FluencyFeedback, GrammarError, PronunciationIssue, RelevanceAnalysis,
    Scores, MAX_SCORE, MIN_SCORE,
};
pub use scenario::Scenario;
pub use schema::json_schema_for;
pub use severity::ErrorSeverity;
pub use transcription::{Transcription, WordTiming};

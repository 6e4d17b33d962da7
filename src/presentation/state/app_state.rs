use std::sync::Arc;

use crate::application::ports::{LanguageModel, TranscriptionEngine};
use crate::application::services::{EvaluationService, ScenarioService, TranscriptionService};

pub struct AppState<L, T>
where
    L: LanguageModel,
    T: TranscriptionEngine,
{
    pub scenario_service: Arc<ScenarioService<L>>,
    pub evaluation_service: Arc<EvaluationService<L>>,
    pub transcription_service: Arc<TranscriptionService<T>>,
}

impl<L, T> Clone for AppState<L, T>
where
    L: LanguageModel,
    T: TranscriptionEngine,
{
    fn clone(&self) -> Self {
        Self {
            scenario_service: Arc::clone(&self.scenario_service),
            evaluation_service: Arc::clone(&self.evaluation_service),
            transcription_service: Arc::clone(&self.transcription_service),
        }
    }
}

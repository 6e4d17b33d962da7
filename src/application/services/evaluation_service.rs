use std::sync::Arc;

use crate::application::ports::LanguageModel;
use crate::application::prompts::{build_evaluation_prompt, EVALUATION_SYSTEM_PROMPT};
use crate::domain::{json_schema_for, Evaluation, Scenario};

use super::{resolve_api_key, CoachError};

const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Scores one transcribed response against its scenario.
pub struct EvaluationService<L: LanguageModel> {
    model: Arc<L>,
    default_api_key: Option<String>,
}

impl<L: LanguageModel> EvaluationService<L> {
    pub fn new(model: Arc<L>, default_api_key: Option<String>) -> Self {
        Self {
            model,
            default_api_key,
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn evaluate(
        &self,
        api_key: Option<&str>,
        scenario: &Scenario,
        transcript: &str,
        temperature: Option<f32>,
    ) -> Result<Evaluation, CoachError> {
        if transcript.trim().is_empty() {
            return Err(CoachError::InvalidInput(
                "transcript must not be empty".to_string(),
            ));
        }

        let key = resolve_api_key(api_key, self.default_api_key.as_deref())?;
        let prompt = build_evaluation_prompt(scenario, transcript);
        let schema = json_schema_for::<Evaluation>();

        let value = self
            .model
            .complete_structured(
                key,
                EVALUATION_SYSTEM_PROMPT,
                &prompt,
                "evaluation_result",
                &schema,
                temperature.unwrap_or(DEFAULT_TEMPERATURE),
            )
            .await?;

        let mut evaluation: Evaluation = serde_json::from_value(value)
            .map_err(|e| CoachError::InvalidModelOutput(e.to_string()))?;
        evaluation.validate().map_err(CoachError::InvalidModelOutput)?;

        // The model's echo of the transcript is not trusted.
        evaluation.transcription = transcript.to_string();

        tracing::info!(overall = evaluation.scores.overall, "Evaluation completed");

        Ok(evaluation)
    }
}

use std::sync::Arc;

use crate::application::ports::LanguageModel;
use crate::application::prompts::{build_scenario_prompt, SCENARIO_SYSTEM_PROMPT};
use crate::domain::{json_schema_for, Scenario};

use super::{resolve_api_key, CoachError};

/// High temperature keeps consecutive scenarios from repeating themselves.
const DEFAULT_TEMPERATURE: f32 = 0.9;

/// Generates fresh practice scenarios. Pure generation, no grounding in any
/// prior state.
pub struct ScenarioService<L: LanguageModel> {
    model: Arc<L>,
    default_api_key: Option<String>,
}

impl<L: LanguageModel> ScenarioService<L> {
    pub fn new(model: Arc<L>, default_api_key: Option<String>) -> Self {
        Self {
            model,
            default_api_key,
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn generate(
        &self,
        api_key: Option<&str>,
        temperature: Option<f32>,
    ) -> Result<Scenario, CoachError> {
        let key = resolve_api_key(api_key, self.default_api_key.as_deref())?;
        let schema = json_schema_for::<Scenario>();

        let value = self
            .model
            .complete_structured(
                key,
                SCENARIO_SYSTEM_PROMPT,
                build_scenario_prompt(),
                "scenario",
                &schema,
                temperature.unwrap_or(DEFAULT_TEMPERATURE),
            )
            .await?;

        let scenario: Scenario = serde_json::from_value(value)
            .map_err(|e| CoachError::InvalidModelOutput(e.to_string()))?;

        tracing::info!(
            category = %scenario.category,
            difficulty = %scenario.difficulty,
            "Scenario generated"
        );

        Ok(scenario)
    }
}

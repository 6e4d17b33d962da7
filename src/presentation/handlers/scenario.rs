use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::ports::{LanguageModel, TranscriptionEngine};
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[tracing::instrument(skip(state))]
pub async fn scenario_handler<L, T>(State(state): State<AppState<L, T>>) -> impl IntoResponse
where
    L: LanguageModel + 'static,
    T: TranscriptionEngine + 'static,
{
    match state.scenario_service.generate(None, None).await {
        Ok(scenario) => (StatusCode::OK, Json(scenario)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Scenario generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details(
                    "Failed to generate scenario",
                    e.to_string(),
                )),
            )
                .into_response()
        }
    }
}

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::ports::{LanguageModel, TranscriptionEngine};
use crate::application::services::DEFAULT_LANGUAGE;
use crate::domain::{AudioUpload, Scenario};
use crate::infrastructure::observability::sanitize_text;
use crate::presentation::state::AppState;

use super::ErrorResponse;

struct EvaluateForm {
    upload: Option<AudioUpload>,
    scenario_json: Option<String>,
}

async fn collect_form(multipart: &mut Multipart) -> Result<EvaluateForm, String> {
    let mut form = EvaluateForm {
        upload: None,
        scenario_json: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Failed to read multipart: {}", e))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "audio" => {
                let filename = field.file_name().unwrap_or("audio").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read audio: {}", e))?;
                form.upload = Some(AudioUpload::new(filename, content_type, bytes.to_vec()));
            }
            "scenario" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| format!("Failed to read scenario: {}", e))?;
                form.scenario_json = Some(text);
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Two-stage pipeline: transcribe the upload, then evaluate the transcript
/// against the scenario. A transcription failure aborts before evaluation
/// ever starts.
#[tracing::instrument(skip(state, multipart))]
pub async fn evaluate_handler<L, T>(
    State(state): State<AppState<L, T>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    L: LanguageModel + 'static,
    T: TranscriptionEngine + 'static,
{
    let form = match collect_form(&mut multipart).await {
        Ok(form) => form,
        Err(message) => {
            tracing::warn!(error = %message, "Bad evaluate request");
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response();
        }
    };

    let upload = match form.upload {
        Some(upload) => upload,
        None => {
            tracing::warn!("Evaluate request with no audio file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("No audio file provided")),
            )
                .into_response();
        }
    };

    let scenario_json = match form.scenario_json {
        Some(json) => json,
        None => {
            tracing::warn!("Evaluate request with no scenario");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("No scenario provided")),
            )
                .into_response();
        }
    };

    let scenario: Scenario = match serde_json::from_str(&scenario_json) {
        Ok(scenario) => scenario,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid scenario JSON");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Invalid scenario JSON")),
            )
                .into_response();
        }
    };

    tracing::debug!(
        filename = %upload.filename,
        bytes = upload.bytes.len(),
        "Evaluate pipeline started"
    );

    let transcription = match state
        .transcription_service
        .transcribe(None, &upload, DEFAULT_LANGUAGE)
        .await
    {
        Ok(transcription) => transcription,
        Err(e) => {
            tracing::error!(error = %e, "Transcription stage failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details(
                    "Failed to evaluate speech",
                    e.to_string(),
                )),
            )
                .into_response();
        }
    };

    tracing::debug!(transcript = %sanitize_text(&transcription.text), "Transcription stage completed");

    match state
        .evaluation_service
        .evaluate(None, &scenario, &transcription.text, None)
        .await
    {
        Ok(evaluation) => (StatusCode::OK, Json(evaluation)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Evaluation stage failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details(
                    "Failed to evaluate speech",
                    e.to_string(),
                )),
            )
                .into_response()
        }
    }
}

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::ports::{LanguageModel, TranscriptionEngine};
use crate::application::services::DEFAULT_LANGUAGE;
use crate::domain::AudioUpload;
use crate::infrastructure::observability::sanitize_text;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<L, T>(
    State(state): State<AppState<L, T>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    L: LanguageModel + 'static,
    T: TranscriptionEngine + 'static,
{
    let mut upload = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let name = field.name().unwrap_or_default().to_string();
                if name != "audio" {
                    continue;
                }
                let filename = field.file_name().unwrap_or("audio").to_string();
                let content_type = field.content_type().map(str::to_string);
                match field.bytes().await {
                    Ok(bytes) => {
                        upload = Some(AudioUpload::new(filename, content_type, bytes.to_vec()));
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read audio bytes");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse::new(format!("Failed to read audio: {}", e))),
                        )
                            .into_response();
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(format!(
                        "Failed to read multipart: {}",
                        e
                    ))),
                )
                    .into_response();
            }
        }
    }

    let upload = match upload {
        Some(upload) => upload,
        None => {
            tracing::warn!("Transcribe request with no audio file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("No audio file provided")),
            )
                .into_response();
        }
    };

    match state
        .transcription_service
        .transcribe(None, &upload, DEFAULT_LANGUAGE)
        .await
    {
        Ok(transcription) => {
            tracing::debug!(transcript = %sanitize_text(&transcription.text), "Transcription completed");
            (StatusCode::OK, Json(transcription)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Transcription failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details(
                    "Failed to transcribe audio",
                    e.to_string(),
                )),
            )
                .into_response()
        }
    }
}

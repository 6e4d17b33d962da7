use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{LanguageModel, TranscriptionEngine};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    evaluate_handler, health_handler, scenario_handler, transcribe_handler,
};
use crate::presentation::state::AppState;

/// Whisper rejects files above 25 MB, so uploads are capped to match.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn create_router<L, T>(state: AppState<L, T>) -> Router
where
    L: LanguageModel + 'static,
    T: TranscriptionEngine + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(health_handler))
        .route("/api/scenario", get(scenario_handler::<L, T>))
        .route("/api/evaluate", post(evaluate_handler::<L, T>))
        .route("/api/transcribe", post(transcribe_handler::<L, T>))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

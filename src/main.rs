use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use speaking_coach::application::services::{
    EvaluationService, ScenarioService, TranscriptionService,
};
use speaking_coach::infrastructure::audio::OpenAiWhisperEngine;
use speaking_coach::infrastructure::llm::OpenAiChatClient;
use speaking_coach::infrastructure::observability::{init_tracing, TracingConfig};
use speaking_coach::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    init_tracing(TracingConfig::default(), settings.server.port);

    if settings.openai.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; requests without an explicit key will fail");
    }

    let chat_client = Arc::new(OpenAiChatClient::new(
        settings.openai.base_url.clone(),
        settings.openai.chat_model.clone(),
    ));
    let whisper_engine = Arc::new(OpenAiWhisperEngine::new(
        settings.openai.base_url.clone(),
        settings.openai.whisper_model.clone(),
    ));

    let api_key = settings.openai.api_key.clone();
    let state = AppState {
        scenario_service: Arc::new(ScenarioService::new(Arc::clone(&chat_client), api_key.clone())),
        evaluation_service: Arc::new(EvaluationService::new(chat_client, api_key.clone())),
        transcription_service: Arc::new(TranscriptionService::new(whisper_engine, api_key)),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

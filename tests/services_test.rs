use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use speaking_coach::application::ports::{
    LanguageModel, LanguageModelError, TranscriptionEngine, TranscriptionError,
};
use speaking_coach::application::services::{
    CoachError, EvaluationService, ScenarioService, TranscriptionService,
};
use speaking_coach::domain::{
    AudioUpload, DifficultyLevel, Scenario, ScenarioCategory, Transcription,
};

const TEST_API_KEY: &str = "sk-configured-key";

struct RecordingModel {
    value: serde_json::Value,
    calls: AtomicUsize,
    seen_api_key: Mutex<Option<String>>,
    seen_temperature: Mutex<Option<f32>>,
}

impl RecordingModel {
    fn new(value: serde_json::Value) -> Arc<Self> {
        Arc::new(Self {
            value,
            calls: AtomicUsize::new(0),
            seen_api_key: Mutex::new(None),
            seen_temperature: Mutex::new(None),
        })
    }
}

impl LanguageModel for RecordingModel {
    fn complete_structured(
        &self,
        api_key: &str,
        _system_prompt: &str,
        _user_prompt: &str,
        _schema_name: &str,
        _schema: &serde_json::Value,
        temperature: f32,
    ) -> impl std::future::Future<Output = Result<serde_json::Value, LanguageModelError>> + Send + Sync
    {
        async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.seen_api_key.lock().unwrap() = Some(api_key.to_string());
            *self.seen_temperature.lock().unwrap() = Some(temperature);
            Ok(self.value.clone())
        }
    }
}

struct RecordingEngine {
    calls: AtomicUsize,
}

impl RecordingEngine {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }
}

impl TranscriptionEngine for RecordingEngine {
    fn transcribe(
        &self,
        _api_key: &str,
        _upload: &AudioUpload,
        _language: &str,
    ) -> impl std::future::Future<Output = Result<Transcription, TranscriptionError>> + Send + Sync {
        async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Transcription {
                text: "recorded transcript".to_string(),
                words: None,
            })
        }
    }
}

fn sample_scenario() -> Scenario {
    Scenario {
        prompt: "Order a meal at a restaurant.".to_string(),
        context: "You are at a casual diner with a friend.".to_string(),
        category: ScenarioCategory::Dining,
        difficulty: DifficultyLevel::Beginner,
    }
}

fn evaluation_value(overall: f64) -> serde_json::Value {
    serde_json::json!({
        "transcription": "whatever the model echoed",
        "scores": {
            "pronunciation": 80.0,
            "grammar": 90.0,
            "relevance": 95.0,
            "fluency": 85.0,
            "overall": overall
        },
        "feedback": {
            "grammar": [],
            "pronunciation": [],
            "relevance": {
                "isRelevant": true,
                "analysis": "On topic.",
                "missingPoints": []
            },
            "fluency": {"issues": [], "suggestions": []}
        },
        "suggestedResponse": "I'd like the grilled chicken sandwich, please.",
        "summary": "Good work! Focus on article usage and pacing. Keep practicing!",
        "nextScenario": {
            "prompt": "Ask a colleague to cover your shift.",
            "context": "You have a medical appointment tomorrow.",
            "category": "business",
            "difficulty": "intermediate"
        }
    })
}

fn scenario_value() -> serde_json::Value {
    serde_json::json!({
        "prompt": "Return a jacket that does not fit.",
        "context": "You bought it online and have the receipt.",
        "category": "shopping",
        "difficulty": "beginner"
    })
}

#[tokio::test]
async fn given_valid_model_output_when_evaluating_then_transcription_is_overwritten() {
    let model = RecordingModel::new(evaluation_value(87.0));
    let service = EvaluationService::new(Arc::clone(&model), Some(TEST_API_KEY.to_string()));

    let evaluation = service
        .evaluate(None, &sample_scenario(), "I want a coffee", None)
        .await
        .unwrap();

    assert_eq!(evaluation.transcription, "I want a coffee");
    assert_eq!(evaluation.scores.overall, 87.0);
    assert!(evaluation.feedback.relevance.missing_points.is_empty());
}

#[tokio::test]
async fn given_out_of_range_score_when_evaluating_then_fails_validation() {
    let model = RecordingModel::new(evaluation_value(120.0));
    let service = EvaluationService::new(model, Some(TEST_API_KEY.to_string()));

    let result = service
        .evaluate(None, &sample_scenario(), "I want a coffee", None)
        .await;

    assert!(matches!(result, Err(CoachError::InvalidModelOutput(_))));
}

#[tokio::test]
async fn given_missing_points_absent_when_evaluating_then_fails_validation() {
    let mut value = evaluation_value(87.0);
    value["feedback"]["relevance"]
        .as_object_mut()
        .unwrap()
        .remove("missingPoints");
    let model = RecordingModel::new(value);
    let service = EvaluationService::new(model, Some(TEST_API_KEY.to_string()));

    let result = service
        .evaluate(None, &sample_scenario(), "I want a coffee", None)
        .await;

    assert!(matches!(result, Err(CoachError::InvalidModelOutput(_))));
}

#[tokio::test]
async fn given_empty_transcript_when_evaluating_then_invalid_input_without_model_call() {
    let model = RecordingModel::new(evaluation_value(87.0));
    let model_calls = Arc::clone(&model);
    let service = EvaluationService::new(model, Some(TEST_API_KEY.to_string()));

    let result = service.evaluate(None, &sample_scenario(), "   ", None).await;

    assert!(matches!(result, Err(CoachError::InvalidInput(_))));
    assert_eq!(model_calls.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_no_temperature_when_evaluating_then_uses_default() {
    let model = RecordingModel::new(evaluation_value(87.0));
    let model_seen = Arc::clone(&model);
    let service = EvaluationService::new(model, Some(TEST_API_KEY.to_string()));

    service
        .evaluate(None, &sample_scenario(), "I want a coffee", None)
        .await
        .unwrap();

    assert_eq!(*model_seen.seen_temperature.lock().unwrap(), Some(0.7));
}

#[tokio::test]
async fn given_valid_model_output_when_generating_scenario_then_returns_scenario() {
    let model = RecordingModel::new(scenario_value());
    let service = ScenarioService::new(model, Some(TEST_API_KEY.to_string()));

    let scenario = service.generate(None, None).await.unwrap();

    assert_eq!(scenario.category, ScenarioCategory::Shopping);
    assert_eq!(scenario.difficulty, DifficultyLevel::Beginner);
}

#[tokio::test]
async fn given_no_temperature_when_generating_scenario_then_uses_creative_default() {
    let model = RecordingModel::new(scenario_value());
    let model_seen = Arc::clone(&model);
    let service = ScenarioService::new(model, Some(TEST_API_KEY.to_string()));

    service.generate(None, None).await.unwrap();

    assert_eq!(*model_seen.seen_temperature.lock().unwrap(), Some(0.9));
}

#[tokio::test]
async fn given_unknown_category_when_generating_scenario_then_fails_validation() {
    let mut value = scenario_value();
    value["category"] = serde_json::json!("sports");
    let model = RecordingModel::new(value);
    let service = ScenarioService::new(model, Some(TEST_API_KEY.to_string()));

    let result = service.generate(None, None).await;

    assert!(matches!(result, Err(CoachError::InvalidModelOutput(_))));
}

#[tokio::test]
async fn given_no_key_anywhere_when_calling_any_service_then_missing_key_without_network() {
    let model = RecordingModel::new(scenario_value());
    let model_calls = Arc::clone(&model);
    let engine = RecordingEngine::new();
    let engine_calls = Arc::clone(&engine);

    let scenario_service = ScenarioService::new(Arc::clone(&model), None);
    let evaluation_service = EvaluationService::new(model, None);
    let transcription_service = TranscriptionService::new(engine, None);

    let upload = AudioUpload::new("clip.wav", Some("audio/wav".to_string()), b"data".to_vec());

    assert!(matches!(
        scenario_service.generate(None, None).await,
        Err(CoachError::MissingApiKey)
    ));
    assert!(matches!(
        evaluation_service
            .evaluate(None, &sample_scenario(), "hello", None)
            .await,
        Err(CoachError::MissingApiKey)
    ));
    assert!(matches!(
        transcription_service.transcribe(None, &upload, "en").await,
        Err(CoachError::MissingApiKey)
    ));

    assert_eq!(model_calls.calls.load(Ordering::SeqCst), 0);
    assert_eq!(engine_calls.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_explicit_key_when_generating_scenario_then_it_overrides_configured_key() {
    let model = RecordingModel::new(scenario_value());
    let model_seen = Arc::clone(&model);
    let service = ScenarioService::new(model, Some(TEST_API_KEY.to_string()));

    service.generate(Some("sk-explicit"), None).await.unwrap();

    assert_eq!(
        model_seen.seen_api_key.lock().unwrap().as_deref(),
        Some("sk-explicit")
    );
}

#[tokio::test]
async fn given_nameless_upload_when_transcribing_then_invalid_input_without_engine_call() {
    let engine = RecordingEngine::new();
    let engine_calls = Arc::clone(&engine);
    let service = TranscriptionService::new(engine, Some(TEST_API_KEY.to_string()));

    let upload = AudioUpload::new("", Some("audio/wav".to_string()), b"data".to_vec());
    let result = service.transcribe(None, &upload, "en").await;

    assert!(matches!(result, Err(CoachError::InvalidInput(_))));
    assert_eq!(engine_calls.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_empty_upload_when_transcribing_then_invalid_input_without_engine_call() {
    let engine = RecordingEngine::new();
    let engine_calls = Arc::clone(&engine);
    let service = TranscriptionService::new(engine, Some(TEST_API_KEY.to_string()));

    let upload = AudioUpload::new("clip.wav", Some("audio/wav".to_string()), Vec::new());
    let result = service.transcribe(None, &upload, "en").await;

    assert!(matches!(result, Err(CoachError::InvalidInput(_))));
    assert_eq!(engine_calls.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_valid_upload_when_transcribing_then_returns_engine_transcription() {
    let engine = RecordingEngine::new();
    let service = TranscriptionService::new(engine, Some(TEST_API_KEY.to_string()));

    let upload = AudioUpload::new("clip.wav", Some("audio/wav".to_string()), b"data".to_vec());
    let transcription = service.transcribe(None, &upload, "en").await.unwrap();

    assert_eq!(transcription.text, "recorded transcript");
    assert!(transcription.words.is_none());
}

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LanguageModel, LanguageModelError};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Chat-completions adapter that constrains output to a JSON schema.
///
/// The credential arrives per call; the only shared state is the reqwest
/// connection pool, which is credential-independent.
pub struct OpenAiChatClient {
    client: Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    response_format: ResponseFormat<'a>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    format_type: &'a str,
    json_schema: JsonSchemaFormat<'a>,
}

#[derive(Serialize)]
struct JsonSchemaFormat<'a> {
    name: &'a str,
    strict: bool,
    schema: &'a serde_json::Value,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

impl OpenAiChatClient {
    pub fn new(base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

impl LanguageModel for OpenAiChatClient {
    fn complete_structured(
        &self,
        api_key: &str,
        system_prompt: &str,
        user_prompt: &str,
        schema_name: &str,
        schema: &serde_json::Value,
        temperature: f32,
    ) -> impl std::future::Future<Output = Result<serde_json::Value, LanguageModelError>> + Send + Sync
    {
        async move {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: schema_name,
                    strict: true,
                    schema,
                },
            },
            temperature,
        };

        tracing::debug!(model = %self.model, schema = schema_name, "Requesting structured completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LanguageModelError::ApiRequestFailed(format!("request: {}", e)))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LanguageModelError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(LanguageModelError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LanguageModelError::ApiRequestFailed(format!("parse response: {}", e)))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(LanguageModelError::EmptyResponse)?;

        let parsed = serde_json::from_str(&content)
            .map_err(|e| LanguageModelError::InvalidResponse(e.to_string()))?;

        tracing::info!(chars = content.len(), schema = schema_name, "Structured completion received");

        Ok(parsed)
        }
    }
}

/// Schema-constrained chat completion against a hosted language model.
pub trait LanguageModel: Send + Sync {
    /// Request a completion whose content must conform to `schema`.
    ///
    /// Returns the parsed JSON content. Validating the value against the
    /// domain types is the caller's responsibility.
    fn complete_structured(
        &self,
        api_key: &str,
        system_prompt: &str,
        user_prompt: &str,
        schema_name: &str,
        schema: &serde_json::Value,
        temperature: f32,
    ) -> impl std::future::Future<Output = Result<serde_json::Value, LanguageModelError>> + Send + Sync;
}

#[derive(Debug, thiserror::Error)]
pub enum LanguageModelError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("model returned no content")]
    EmptyResponse,
    #[error("model content is not valid JSON: {0}")]
    InvalidResponse(String),
}

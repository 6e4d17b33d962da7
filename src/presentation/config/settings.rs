/// Process configuration, resolved once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub openai: OpenAiSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    /// Default credential for requests that do not carry one explicitly.
    pub api_key: Option<String>,
    /// Override for testing against a local mock; the adapters fall back to
    /// the public endpoint when unset.
    pub base_url: Option<String>,
    pub chat_model: Option<String>,
    pub whisper_model: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
            },
            openai: OpenAiSettings {
                api_key: non_empty_env("OPENAI_API_KEY"),
                base_url: non_empty_env("OPENAI_BASE_URL"),
                chat_model: non_empty_env("OPENAI_CHAT_MODEL"),
                whisper_model: non_empty_env("OPENAI_WHISPER_MODEL"),
            },
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    non_empty_env(name).unwrap_or_else(|| default.to_string())
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

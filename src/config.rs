use std::env;

pub struct AppConfig {
    pub port: u16,
    pub ollama_url: String,
    pub model: String,
    pub timeout_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000);

        let ollama_url =
            env::var("OLLAMA_URL").unwrap_or_else(|_| "http://127.0.0.1:11434".to_string());

        let model = env::var("OLLAMA_MODEL").unwrap_or_else(|_| "qwen3:8b".to_string());

        let timeout_ms = env::var("OLLAMA_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(120_000);

        Self {
            port,
            ollama_url,
            model,
            timeout_ms,
        }
    }
}

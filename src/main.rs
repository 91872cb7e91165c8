use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use summarizer_service::config::AppConfig;
use summarizer_service::ollama::OllamaClient;
use summarizer_service::{build_app, run_server, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    let client = OllamaClient::new(&config.ollama_url, config.model.clone(), config.timeout_ms);

    info!(
        port = config.port,
        backend = %config.ollama_url,
        model = client.model(),
        "starting summarizer service"
    );

    let app = build_app(AppState {
        chat: Arc::new(client),
    });

    run_server(app, config.port).await;
}

pub mod api;
pub mod config;
pub mod ollama;
pub mod prompt;

use std::sync::Arc;

use axum::Router;

use crate::ollama::ChatCompletion;

#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<dyn ChatCompletion>,
}

pub fn build_app(state: AppState) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("bind failed");

    axum::serve(listener, app).await.expect("server failed");
}

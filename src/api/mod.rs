mod handlers;
mod models;

use axum::{routing::post, Router};

use crate::AppState;

pub use handlers::{generate, not_found};
pub use models::{ErrorResponse, GenerateRequest, GenerateResponse};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate", post(generate))
        .fallback(not_found)
        .with_state(state)
}

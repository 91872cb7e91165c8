use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use crate::prompt::build_prompt;
use crate::AppState;

use super::models::{ErrorResponse, GenerateRequest, GenerateResponse};

pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let prompt = build_prompt(&payload.query);

    match state.chat.complete(&prompt).await {
        Ok(response) => {
            info!(query_len = payload.query.len(), "generate completed");
            Ok(Json(GenerateResponse { response }))
        }
        Err(err) => {
            warn!(error = %err, "chat completion failed");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            ))
        }
    }
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "route not found".to_string(),
        }),
    )
        .into_response()
}

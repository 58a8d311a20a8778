use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::content::ContentRepository;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Ready when the content API answers
pub async fn health_ready(
    State(content_repo): State<Arc<dyn ContentRepository>>,
) -> impl IntoResponse {
    match content_repo.list_interests().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "content_api": "reachable"
            })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Content API unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "content_api": "unreachable"
                })),
            )
        }
    }
}

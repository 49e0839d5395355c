pub mod health;
pub mod roadmaps;

use axum::Json;
use axum::http::{Method, StatusCode, Uri};
use serde::Serialize;

#[derive(Serialize)]
pub struct NotFoundResponse {
    pub error: &'static str,
    pub message: String,
}

/// Fallback for unmatched routes and unsupported methods on known paths.
pub async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<NotFoundResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            error: "Not Found",
            message: format!("Route {method} {} not found", uri.path()),
        }),
    )
}

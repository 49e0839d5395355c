use axum::Json;
use axum::extract::State;
use compass_core::payloads::HealthResponse;

use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.db.ping().await {
        Ok(()) => "Connected",
        Err(e) => {
            tracing::warn!(%e, "database ping failed");
            "Disconnected"
        }
    };
    Json(HealthResponse {
        status: "Backend is running".to_string(),
        database: database.to_string(),
        llm: state.generator.source(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

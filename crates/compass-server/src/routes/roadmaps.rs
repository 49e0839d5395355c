//! `/api/v1/roadmaps` handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use compass_core::payloads::{
    GenerateRoadmapBody, GenerateRoadmapResponse, MessageResponse, SaveRoadmapBody,
};
use compass_core::roadmap::SavedRoadmap;

use crate::auth::CallerId;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn generate(
    State(state): State<AppState>,
    body: Result<Json<GenerateRoadmapBody>, JsonRejection>,
) -> Result<Json<GenerateRoadmapResponse>, ApiError> {
    let Json(body) = body?;
    let request = body.into_request()?;

    tracing::info!(branch = %request.branch, role = %request.role, "generating roadmap");
    let generated = state.generator.generate(&request).await;
    Ok(Json(GenerateRoadmapResponse::new(request, generated)))
}

pub async fn save(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    body: Result<Json<SaveRoadmapBody>, JsonRejection>,
) -> Result<(StatusCode, Json<SavedRoadmap>), ApiError> {
    let Json(body) = body?;
    let roadmap = body.into_new_roadmap()?;

    let saved = state.db.create_roadmap(&user_id, roadmap).await?;
    tracing::info!(id = %saved.id, phases = saved.phases.len(), "roadmap saved");
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn list(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
) -> Result<Json<Vec<SavedRoadmap>>, ApiError> {
    Ok(Json(state.db.list_roadmaps(&user_id).await?))
}

pub async fn get(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    Path(id): Path<String>,
) -> Result<Json<SavedRoadmap>, ApiError> {
    Ok(Json(owned(&state, &user_id, &id).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    owned(&state, &user_id, &id).await?;
    state.db.delete_roadmap(&id).await?;
    tracing::info!(%id, "roadmap deleted");
    Ok(Json(MessageResponse {
        message: "Roadmap deleted".to_string(),
    }))
}

/// Fetch a roadmap, enforcing that `user_id` owns it.
async fn owned(state: &AppState, user_id: &str, id: &str) -> Result<SavedRoadmap, ApiError> {
    let roadmap = state.db.get_roadmap(id).await?.ok_or(ApiError::NotFound)?;
    if roadmap.user_id != user_id {
        return Err(ApiError::Forbidden);
    }
    Ok(roadmap)
}

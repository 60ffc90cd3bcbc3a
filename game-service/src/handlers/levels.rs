use crate::dtos::{LevelCreate, MessageResponse};
use crate::models::Level;
use crate::services::{metrics, LIST_LIMIT};
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use service_core::error::AppError;
use service_core::extract::ValidatedJson;

fn level_not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("Level not found"))
}

/// POST /api/levels
pub async fn create_level(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LevelCreate>,
) -> Result<Json<Level>, AppError> {
    let level = req.into_level();

    state.store.insert_level(&level).await?;
    metrics::record_created("levels");

    tracing::info!(
        level_id = %level.id,
        name = %level.name,
        author = %level.author,
        platforms = level.platforms.len(),
        spikes = level.spikes.len(),
        "Level created"
    );

    Ok(Json(level))
}

/// GET /api/levels
pub async fn list_levels(State(state): State<AppState>) -> Result<Json<Vec<Level>>, AppError> {
    let levels = state.store.list_levels(LIST_LIMIT).await?;
    Ok(Json(levels))
}

/// GET /api/levels/:level_id
pub async fn get_level(
    State(state): State<AppState>,
    Path(level_id): Path<String>,
) -> Result<Json<Level>, AppError> {
    let level = state
        .store
        .find_level(&level_id)
        .await?
        .ok_or_else(level_not_found)?;

    Ok(Json(level))
}

/// DELETE /api/levels/:level_id
///
/// Match results recorded against the level are left in place.
pub async fn delete_level(
    State(state): State<AppState>,
    Path(level_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.store.delete_level(&level_id).await? {
        tracing::info!(level_id = %level_id, "Delete requested for unknown level");
        return Err(level_not_found());
    }

    metrics::record_level_deleted();
    tracing::info!(level_id = %level_id, "Level deleted");

    Ok(Json(MessageResponse::new("Level deleted successfully")))
}

use crate::dtos::MatchResultCreate;
use crate::models::MatchResult;
use crate::services::{metrics, LIST_LIMIT};
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::extract::ValidatedJson;

/// POST /api/matches
///
/// `level_id` is stored as given; it is not checked against existing levels.
pub async fn create_match_result(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<MatchResultCreate>,
) -> Result<Json<MatchResult>, AppError> {
    let result = req.into_match_result();

    state.store.insert_match_result(&result).await?;
    metrics::record_created("matches");

    tracing::info!(
        match_id = %result.id,
        level_id = %result.level_id,
        mode = %result.mode,
        winner = %result.winner,
        time_ms = result.time_ms,
        deaths = result.deaths,
        "Match result recorded"
    );

    Ok(Json(result))
}

/// GET /api/matches
pub async fn list_match_results(
    State(state): State<AppState>,
) -> Result<Json<Vec<MatchResult>>, AppError> {
    let results = state.store.list_match_results(LIST_LIMIT).await?;
    Ok(Json(results))
}

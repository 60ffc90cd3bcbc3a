use crate::dtos::StatusCheckCreate;
use crate::models::StatusCheck;
use crate::services::{metrics, LIST_LIMIT};
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::extract::ValidatedJson;

/// POST /api/status
pub async fn create_status_check(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<StatusCheckCreate>,
) -> Result<Json<StatusCheck>, AppError> {
    let check = req.into_status_check();

    state.store.insert_status_check(&check).await?;
    metrics::record_created("status_checks");

    tracing::info!(
        status_check_id = %check.id,
        client_name = %check.client_name,
        "Status check recorded"
    );

    Ok(Json(check))
}

/// GET /api/status
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, AppError> {
    let checks = state.store.list_status_checks(LIST_LIMIT).await?;
    Ok(Json(checks))
}

use crate::models::{Level, MatchResult, StatusCheck};
use async_trait::async_trait;
use service_core::error::AppError;

/// Most records a list endpoint returns.
pub const LIST_LIMIT: i64 = 1000;

/// Persistence operations behind the HTTP handlers.
///
/// Each call is a single independent document operation; nothing here spans
/// collections or retries on failure.
#[async_trait]
pub trait GameStore: Send + Sync {
    async fn health_check(&self) -> Result<(), AppError>;

    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError>;
    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, AppError>;

    async fn insert_level(&self, level: &Level) -> Result<(), AppError>;
    async fn list_levels(&self, limit: i64) -> Result<Vec<Level>, AppError>;
    async fn find_level(&self, id: &str) -> Result<Option<Level>, AppError>;
    /// Returns whether a level was removed.
    async fn delete_level(&self, id: &str) -> Result<bool, AppError>;

    async fn insert_match_result(&self, result: &MatchResult) -> Result<(), AppError>;
    async fn list_match_results(&self, limit: i64) -> Result<Vec<MatchResult>, AppError>;

    /// Releases the underlying connection. Called once when the server stops.
    async fn shutdown(&self);
}

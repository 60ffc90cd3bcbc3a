//! Store that keeps everything in process memory.
//!
//! Used by the integration tests and for running the API without a MongoDB
//! instance. Records come back in insertion order.

use crate::models::{Level, MatchResult, StatusCheck};
use crate::services::store::GameStore;
use async_trait::async_trait;
use service_core::error::AppError;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryStore {
    status_checks: RwLock<Vec<StatusCheck>>,
    levels: RwLock<Vec<Level>>,
    matches: RwLock<Vec<MatchResult>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn take_limited<T: Clone>(items: &[T], limit: i64) -> Vec<T> {
    let limit = usize::try_from(limit).unwrap_or(0);
    items.iter().take(limit).cloned().collect()
}

#[async_trait]
impl GameStore for InMemoryStore {
    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError> {
        self.status_checks.write().await.push(check.clone());
        Ok(())
    }

    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, AppError> {
        Ok(take_limited(&self.status_checks.read().await, limit))
    }

    async fn insert_level(&self, level: &Level) -> Result<(), AppError> {
        self.levels.write().await.push(level.clone());
        Ok(())
    }

    async fn list_levels(&self, limit: i64) -> Result<Vec<Level>, AppError> {
        Ok(take_limited(&self.levels.read().await, limit))
    }

    async fn find_level(&self, id: &str) -> Result<Option<Level>, AppError> {
        let levels = self.levels.read().await;
        Ok(levels.iter().find(|level| level.id == id).cloned())
    }

    async fn delete_level(&self, id: &str) -> Result<bool, AppError> {
        let mut levels = self.levels.write().await;
        match levels.iter().position(|level| level.id == id) {
            Some(index) => {
                levels.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn insert_match_result(&self, result: &MatchResult) -> Result<(), AppError> {
        self.matches.write().await.push(result.clone());
        Ok(())
    }

    async fn list_match_results(&self, limit: i64) -> Result<Vec<MatchResult>, AppError> {
        Ok(take_limited(&self.matches.read().await, limit))
    }

    async fn shutdown(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusCheck;

    #[tokio::test]
    async fn test_list_respects_limit() {
        let store = InMemoryStore::new();
        for i in 0..5 {
            store
                .insert_status_check(&StatusCheck::new(format!("client-{}", i)))
                .await
                .unwrap();
        }

        let checks = store.list_status_checks(3).await.unwrap();
        assert_eq!(checks.len(), 3);
        assert_eq!(checks[0].client_name, "client-0");
    }

    #[tokio::test]
    async fn test_delete_missing_level_reports_false() {
        let store = InMemoryStore::new();
        assert!(!store.delete_level("missing").await.unwrap());
    }
}

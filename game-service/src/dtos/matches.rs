use crate::models::{MatchMode, MatchResult, Winner};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct MatchResultCreate {
    #[validate(length(min = 1, message = "level_id is required"))]
    pub level_id: String,
    pub mode: MatchMode,
    pub winner: Winner,
    #[validate(range(min = 0.0, message = "time_ms must not be negative"))]
    pub time_ms: f64,
    pub deaths: u32,
}

impl MatchResultCreate {
    pub fn into_match_result(self) -> MatchResult {
        MatchResult {
            id: Uuid::new_v4().to_string(),
            level_id: self.level_id,
            mode: self.mode,
            winner: self.winner,
            time_ms: self.time_ms,
            deaths: self.deaths,
            timestamp: Utc::now(),
        }
    }
}

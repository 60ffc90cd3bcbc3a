use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    HumanVsAi,
    AiVsAi,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Human,
    Ai,
    Ai1,
    Ai2,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::HumanVsAi => write!(f, "human_vs_ai"),
            MatchMode::AiVsAi => write!(f, "ai_vs_ai"),
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Human => write!(f, "human"),
            Winner::Ai => write!(f, "ai"),
            Winner::Ai1 => write!(f, "ai1"),
            Winner::Ai2 => write!(f, "ai2"),
        }
    }
}

/// Outcome of one finished race. `level_id` is not checked against stored
/// levels, so results can outlive the level they were played on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub id: String,
    pub level_id: String,
    pub mode: MatchMode,
    pub winner: Winner,
    pub time_ms: f64,
    pub deaths: u32,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_value(MatchMode::HumanVsAi).unwrap(),
            "human_vs_ai"
        );
        assert_eq!(serde_json::to_value(MatchMode::AiVsAi).unwrap(), "ai_vs_ai");
        assert_eq!(serde_json::to_value(Winner::Ai1).unwrap(), "ai1");
        assert_eq!(serde_json::to_value(Winner::Ai2).unwrap(), "ai2");
    }

    #[test]
    fn test_display_matches_wire_names() {
        for mode in [MatchMode::HumanVsAi, MatchMode::AiVsAi] {
            assert_eq!(serde_json::to_value(mode).unwrap(), mode.to_string());
        }
        for winner in [Winner::Human, Winner::Ai, Winner::Ai1, Winner::Ai2] {
            assert_eq!(serde_json::to_value(winner).unwrap(), winner.to_string());
        }
    }

    #[test]
    fn test_unknown_winner_is_rejected() {
        assert!(serde_json::from_str::<Winner>("\"nobody\"").is_err());
    }
}

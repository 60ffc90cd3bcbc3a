use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A client check-in record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    pub fn new(client_name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_check_creation() {
        let check = StatusCheck::new("web".to_string());

        assert_eq!(check.client_name, "web");
        assert!(Uuid::parse_str(&check.id).is_ok());
        assert!(check.timestamp <= Utc::now());
    }

    #[test]
    fn test_timestamp_parses_from_stored_text() {
        let stored = serde_json::json!({
            "id": "abc",
            "client_name": "web",
            "timestamp": "2024-03-01T12:30:00.123456+00:00"
        });

        let check: StatusCheck = serde_json::from_value(stored).expect("Failed to parse");
        assert_eq!(check.timestamp.to_rfc3339(), "2024-03-01T12:30:00.123456+00:00");
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Sent,
}

/// One digest email handed off for a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryRecord {
    pub user_id: String,
    pub sent_at: DateTime<Utc>,
    pub recommendation_ids: Vec<String>,
    pub status: DeliveryStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    /// A section is behind its word-count goal
    GoalShortfall,
}

/// A nudge generated for a user's writing project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reminder {
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reminder_wire_format() {
        let reminder = Reminder {
            user_id: "u2".to_string(),
            kind: ReminderKind::GoalShortfall,
            message: "method is behind target".to_string(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&reminder).unwrap();
        assert_eq!(value["type"], "goal_shortfall");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_delivery_status_serialization() {
        assert_eq!(
            serde_json::to_string(&DeliveryStatus::Sent).unwrap(),
            "\"sent\""
        );
    }
}

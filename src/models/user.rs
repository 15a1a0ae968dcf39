use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// How often the digest goes out
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekdays,
}

/// Per-user digest email settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailPreferences {
    pub user_id: String,
    /// Local send time as "HH:MM"
    #[serde(default = "default_send_time")]
    pub send_time: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_send_time() -> String {
    "07:00".to_string()
}

fn default_timezone() -> String {
    "Asia/Seoul".to_string()
}

fn default_enabled() -> bool {
    true
}

impl EmailPreferences {
    /// Checks the fields the JSON schema alone cannot
    pub fn validate(&self) -> AppResult<()> {
        if NaiveTime::parse_from_str(&self.send_time, "%H:%M").is_err() {
            return Err(AppError::InvalidInput(format!(
                "send_time must be HH:MM, got {:?}",
                self.send_time
            )));
        }
        if self.timezone.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "timezone must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

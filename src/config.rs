use std::collections::HashMap;

use serde::Deserialize;

use crate::models::PaperCategory;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_rust_log")]
    pub rust_log: String,

    /// Optional JSON file replacing the built-in paper catalog
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Scheme of the `<scheme>://papers/<id>` deep links
    #[serde(default = "default_deep_link_scheme")]
    pub deep_link_scheme: String,

    /// Subject line shown in the digest preview
    #[serde(default = "default_digest_subject")]
    pub digest_subject: String,

    /// Send time reported for users without stored email preferences
    #[serde(default = "default_send_time")]
    pub default_send_time: String,

    /// Timezone reported for users without stored email preferences
    #[serde(default = "default_timezone")]
    pub default_timezone: String,

    /// Number of papers recommended when the caller does not ask for a count
    #[serde(default = "default_recommendation_count")]
    pub recommendation_count: usize,

    /// Sections whose completion ratio is below this value get a reminder
    #[serde(default = "default_shortfall_threshold")]
    pub shortfall_threshold: f64,

    /// Word count suggested by shortfall reminders
    #[serde(default = "default_shortfall_boost_words")]
    pub shortfall_boost_words: u32,

    /// Score bonus for papers matching the user's weakest section
    #[serde(default = "default_category_boost")]
    pub category_boost: u8,

    /// Papers published within this many years of now are "recent"
    #[serde(default = "default_recent_window_years")]
    pub recent_window_years: i32,

    /// Maps writing-section names to the paper category that helps them
    #[serde(skip_deserializing, default = "default_section_categories")]
    pub section_categories: HashMap<String, PaperCategory>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_rust_log() -> String {
    "info".to_string()
}

fn default_deep_link_scheme() -> String {
    "paperwork".to_string()
}

fn default_digest_subject() -> String {
    "[Paperwork] Today's recommended papers".to_string()
}

fn default_send_time() -> String {
    "07:00".to_string()
}

fn default_timezone() -> String {
    "Asia/Seoul".to_string()
}

fn default_recommendation_count() -> usize {
    3
}

fn default_shortfall_threshold() -> f64 {
    0.7
}

fn default_shortfall_boost_words() -> u32 {
    300
}

fn default_category_boost() -> u8 {
    2
}

fn default_recent_window_years() -> i32 {
    1
}

fn default_section_categories() -> HashMap<String, PaperCategory> {
    [
        ("intro", PaperCategory::Background),
        ("priorWork", PaperCategory::Background),
        ("method", PaperCategory::Method),
        ("results", PaperCategory::Method),
        ("discussion", PaperCategory::Discussion),
    ]
    .into_iter()
    .map(|(section, category)| (section.to_string(), category))
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            rust_log: default_rust_log(),
            catalog_path: None,
            deep_link_scheme: default_deep_link_scheme(),
            digest_subject: default_digest_subject(),
            default_send_time: default_send_time(),
            default_timezone: default_timezone(),
            recommendation_count: default_recommendation_count(),
            shortfall_threshold: default_shortfall_threshold(),
            shortfall_boost_words: default_shortfall_boost_words(),
            category_boost: default_category_boost(),
            recent_window_years: default_recent_window_years(),
            section_categories: default_section_categories(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Paper category preferred for a section, if the section is mapped
    pub fn category_for_section(&self, section: &str) -> Option<PaperCategory> {
        self.section_categories.get(section).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envy_defaults_match_default_impl() {
        let vars: Vec<(String, String)> = Vec::new();
        let config: Config = envy::from_iter(vars).unwrap();
        let defaults = Config::default();

        assert_eq!(config.port, defaults.port);
        assert_eq!(config.default_send_time, "07:00");
        assert_eq!(config.default_timezone, "Asia/Seoul");
        assert_eq!(config.recommendation_count, 3);
        assert_eq!(config.shortfall_threshold, 0.7);
        assert_eq!(config.section_categories, defaults.section_categories);
    }

    #[test]
    fn test_envy_overrides() {
        let vars = vec![
            ("PORT".to_string(), "8080".to_string()),
            ("SHORTFALL_THRESHOLD".to_string(), "0.5".to_string()),
            ("CATALOG_PATH".to_string(), "/tmp/papers.json".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.shortfall_threshold, 0.5);
        assert_eq!(config.catalog_path.as_deref(), Some("/tmp/papers.json"));
    }

    #[test]
    fn test_section_category_table() {
        let config = Config::default();
        assert_eq!(
            config.category_for_section("priorWork"),
            Some(PaperCategory::Background)
        );
        assert_eq!(
            config.category_for_section("results"),
            Some(PaperCategory::Method)
        );
        assert_eq!(config.category_for_section("appendix"), None);
    }
}

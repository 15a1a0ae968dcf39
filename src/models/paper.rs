use serde::{Deserialize, Serialize};

/// Writing-section category a paper is most useful for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaperCategory {
    Background,
    Method,
    Discussion,
}

/// Catalog entry for an academic paper
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paper {
    pub id: String,
    pub title: String,
    pub authors: String,
    pub journal: String,
    pub year: i32,
    pub keywords: Vec<String>,
    pub category: PaperCategory,
}

/// A ranked paper with the reasons it was picked
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResult {
    pub paper_id: String,
    pub title: String,
    pub authors: String,
    pub journal: String,
    pub year: i32,
    /// Reasons joined by " / "
    pub reason: String,
    pub deep_link: String,
}

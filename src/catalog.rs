use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::models::{Paper, PaperCategory};

/// Error types for catalog loading
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate paper id in catalog: {0}")]
    DuplicateId(String),
}

/// Immutable list of recommendable papers, in catalog order
#[derive(Debug, Clone)]
pub struct Catalog {
    papers: Vec<Paper>,
}

impl Catalog {
    /// Creates a catalog, rejecting duplicate paper ids
    pub fn new(papers: Vec<Paper>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for paper in &papers {
            if !seen.insert(paper.id.as_str()) {
                return Err(CatalogError::DuplicateId(paper.id.clone()));
            }
        }
        Ok(Self { papers })
    }

    /// Parses a JSON array of papers
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let papers: Vec<Paper> = serde_json::from_str(json)?;
        Self::new(papers)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The catalog shipped with the service
    pub fn builtin() -> Self {
        Self {
            papers: vec![
                paper(
                    "p1",
                    "Smartphone Use and Sleep Quality Among Adolescents",
                    "Kim et al.",
                    "Korean Journal of Youth Studies",
                    2024,
                    &["adolescents", "smartphone", "sleep"],
                    PaperCategory::Background,
                ),
                paper(
                    "p2",
                    "Applying Mixed-Methods Research Designs in Practice",
                    "Lee",
                    "Journal of Educational Methods",
                    2023,
                    &["methodology", "mixed-methods", "research-design"],
                    PaperCategory::Method,
                ),
                paper(
                    "p3",
                    "Time Management Strategies and Outcomes of Working Graduate Students",
                    "Park et al.",
                    "Adult Learning Research",
                    2022,
                    &["time-management", "working-professionals", "graduate-school"],
                    PaperCategory::Discussion,
                ),
                paper(
                    "p4",
                    "Personalization Performance of Deep-Learning Recommender Systems",
                    "Jung",
                    "Journal of Information Science",
                    2024,
                    &["recommendation", "personalization", "deep-learning"],
                    PaperCategory::Method,
                ),
            ],
        }
    }

    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }
}

fn paper(
    id: &str,
    title: &str,
    authors: &str,
    journal: &str,
    year: i32,
    keywords: &[&str],
    category: PaperCategory,
) -> Paper {
    Paper {
        id: id.to_string(),
        title: title.to_string(),
        authors: authors.to_string(),
        journal: journal.to_string(),
        year,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        category,
    }
}

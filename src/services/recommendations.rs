use std::collections::{BTreeSet, HashSet};

use chrono::{DateTime, Datelike, Utc};

use crate::{
    catalog::Catalog,
    config::Config,
    models::{Paper, PaperCategory, RecommendationResult},
    services::progress::preferred_category,
    store::Store,
};

const DIVERSITY_REASON: &str = "exploratory diversity pick";

/// A catalog paper with its ranking inputs
struct ScoredPaper<'p> {
    paper: &'p Paper,
    boosted: bool,
    category_boost: u8,
    /// Matching keywords, sorted and deduplicated
    overlap: BTreeSet<&'p str>,
}

impl ScoredPaper<'_> {
    /// Compared descending: boost, then overlap count, then year
    fn key(&self) -> (u8, usize, i32) {
        (self.category_boost, self.overlap.len(), self.paper.year)
    }
}

/// Ranks the catalog against a user's topics and weakest writing section
pub struct Recommender<'a> {
    catalog: &'a Catalog,
    config: &'a Config,
}

impl<'a> Recommender<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a Config) -> Self {
        Self { catalog, config }
    }

    /// Number of papers returned when the caller does not choose
    pub fn default_count(&self) -> usize {
        self.config.recommendation_count
    }

    /// Returns up to `count` papers, best first
    ///
    /// Papers are ordered by category boost, topic overlap and publication
    /// year, all descending. Equal scores keep catalog order.
    pub fn recommend(
        &self,
        store: &Store,
        user_id: &str,
        count: usize,
        now: DateTime<Utc>,
    ) -> Vec<RecommendationResult> {
        let topics: HashSet<&str> = store.topics(user_id).iter().map(String::as_str).collect();
        let preferred = preferred_category(store, self.config, user_id);

        let mut scored: Vec<ScoredPaper> = self
            .catalog
            .papers()
            .iter()
            .map(|paper| self.score(paper, &topics, preferred))
            .collect();

        // sort_by is stable, so ties stay in catalog order
        scored.sort_by(|a, b| b.key().cmp(&a.key()));

        tracing::debug!(
            user_id = %user_id,
            topic_count = topics.len(),
            preferred_category = ?preferred,
            "Ranked catalog"
        );

        let current_year = now.year();
        scored
            .into_iter()
            .take(count)
            .map(|scored| self.describe(scored, current_year))
            .collect()
    }

    fn score<'p>(
        &self,
        paper: &'p Paper,
        topics: &HashSet<&str>,
        preferred: Option<PaperCategory>,
    ) -> ScoredPaper<'p> {
        let boosted = preferred == Some(paper.category);
        let overlap = paper
            .keywords
            .iter()
            .map(String::as_str)
            .filter(|keyword| topics.contains(keyword))
            .collect();

        ScoredPaper {
            paper,
            boosted,
            category_boost: if boosted { self.config.category_boost } else { 0 },
            overlap,
        }
    }

    fn describe(&self, scored: ScoredPaper, current_year: i32) -> RecommendationResult {
        let paper = scored.paper;
        let mut reasons = Vec::new();

        if !scored.overlap.is_empty() {
            let keywords: Vec<&str> = scored.overlap.into_iter().collect();
            reasons.push(format!("topic overlap: {}", keywords.join(", ")));
        }
        if scored.boosted {
            reasons.push("fills an underperforming section".to_string());
        }
        if paper.year >= current_year.saturating_sub(self.config.recent_window_years) {
            reasons.push("recent publication".to_string());
        }
        if reasons.is_empty() {
            reasons.push(DIVERSITY_REASON.to_string());
        }

        RecommendationResult {
            paper_id: paper.id.clone(),
            title: paper.title.clone(),
            authors: paper.authors.clone(),
            journal: paper.journal.clone(),
            year: paper.year,
            reason: reasons.join(" / "),
            deep_link: format!("{}://papers/{}", self.config.deep_link_scheme, paper.id),
        }
    }
}

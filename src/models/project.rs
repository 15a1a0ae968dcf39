use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::OrderedMap;

/// Word-count goal and progress for one section of a writing project
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    pub target_words: NonZeroU32,
    pub current_words: u32,
}

impl Section {
    /// Creates a section with no words written yet
    pub fn new(target_words: NonZeroU32) -> Self {
        Self {
            target_words,
            current_words: 0,
        }
    }

    /// current / target, unbounded above
    pub fn completion_ratio(&self) -> f64 {
        f64::from(self.current_words) / f64::from(self.target_words.get())
    }
}

/// A user's thesis or paper in progress, split into named sections
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WritingProject {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub sections: OrderedMap<Section>,
}

impl WritingProject {
    /// Creates a project whose sections all start at zero words
    pub fn new(user_id: String, title: String, targets: OrderedMap<NonZeroU32>) -> Self {
        let sections = targets
            .iter()
            .map(|(name, target)| (name.clone(), Section::new(*target)))
            .collect();

        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            sections,
        }
    }
}

/// Sections used when a new project does not list its own
pub fn default_section_targets() -> OrderedMap<NonZeroU32> {
    [
        ("intro", 800),
        ("priorWork", 1200),
        ("method", 1200),
        ("results", 1200),
        ("discussion", 1000),
    ]
    .into_iter()
    .filter_map(|(name, target)| NonZeroU32::new(target).map(|t| (name.to_string(), t)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_completion_ratio() {
        let section = Section {
            target_words: words(1000),
            current_words: 100,
        };
        assert!((section.completion_ratio() - 0.1).abs() < f64::EPSILON);

        let overshoot = Section {
            target_words: words(100),
            current_words: 250,
        };
        assert!((overshoot.completion_ratio() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_new_project_starts_empty() {
        let project = WritingProject::new(
            "u1".to_string(),
            "Thesis".to_string(),
            default_section_targets(),
        );

        let names: Vec<&str> = project.sections.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec!["intro", "priorWork", "method", "results", "discussion"]
        );
        assert!(project.sections.iter().all(|(_, s)| s.current_words == 0));
        assert_eq!(
            project.sections.get("priorWork").map(|s| s.target_words.get()),
            Some(1200)
        );
    }

    #[test]
    fn test_section_targets_keep_document_order() {
        let targets: OrderedMap<NonZeroU32> =
            serde_json::from_str(r#"{"results": 500, "intro": 300, "method": 900}"#).unwrap();
        let project = WritingProject::new("u1".to_string(), "Draft".to_string(), targets);

        let json = serde_json::to_string(&project.sections).unwrap();
        assert_eq!(
            json,
            r#"{"results":{"target_words":500,"current_words":0},"intro":{"target_words":300,"current_words":0},"method":{"target_words":900,"current_words":0}}"#
        );
    }

    #[test]
    fn test_zero_target_is_rejected_by_deserialization() {
        let result: Result<Section, _> =
            serde_json::from_str(r#"{"target_words": 0, "current_words": 5}"#);
        assert!(result.is_err());
    }
}

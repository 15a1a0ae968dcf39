use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{DeliveryRecord, EmailPreferences, Reminder, WritingProject};

/// In-memory state for users, writing projects and job logs
///
/// Users are remembered in the order their topics were first set, projects
/// in creation order. Both logs are append-only.
#[derive(Debug, Default)]
pub struct Store {
    user_order: Vec<String>,
    topics: HashMap<String, Vec<String>>,
    email_preferences: HashMap<String, EmailPreferences>,
    projects: Vec<WritingProject>,
    reminder_log: Vec<Reminder>,
    delivery_log: Vec<DeliveryRecord>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all users, projects and log entries
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replaces a user's topics
    pub fn set_topics(&mut self, user_id: &str, topics: Vec<String>) {
        if self.topics.insert(user_id.to_string(), topics).is_none() {
            self.user_order.push(user_id.to_string());
        }
    }

    /// Topics for a user; empty if none were set
    pub fn topics(&self, user_id: &str) -> &[String] {
        self.topics.get(user_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Users that have ever set topics, in first-seen order
    pub fn known_users(&self) -> &[String] {
        &self.user_order
    }

    pub fn set_email_preferences(&mut self, preferences: EmailPreferences) {
        self.email_preferences
            .insert(preferences.user_id.clone(), preferences);
    }

    pub fn email_preferences(&self, user_id: &str) -> Option<&EmailPreferences> {
        self.email_preferences.get(user_id)
    }

    pub fn insert_project(&mut self, project: WritingProject) {
        self.projects.push(project);
    }

    pub fn project_mut(&mut self, id: Uuid) -> Option<&mut WritingProject> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    /// All projects in creation order
    pub fn projects(&self) -> &[WritingProject] {
        &self.projects
    }

    /// A user's projects in creation order
    pub fn projects_for<'a>(
        &'a self,
        user_id: &'a str,
    ) -> impl Iterator<Item = &'a WritingProject> + 'a {
        self.projects.iter().filter(move |p| p.user_id == user_id)
    }

    pub fn append_reminders(&mut self, reminders: &[Reminder]) {
        self.reminder_log.extend_from_slice(reminders);
    }

    /// Every reminder ever generated for a user, oldest first
    pub fn reminders_for(&self, user_id: &str) -> Vec<Reminder> {
        self.reminder_log
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn reminder_log(&self) -> &[Reminder] {
        &self.reminder_log
    }

    pub fn append_deliveries(&mut self, records: &[DeliveryRecord]) {
        self.delivery_log.extend_from_slice(records);
    }

    pub fn delivery_log(&self) -> &[DeliveryRecord] {
        &self.delivery_log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_section_targets;

    #[test]
    fn test_known_users_keep_first_seen_order() {
        let mut store = Store::new();
        store.set_topics("b", vec!["x".to_string()]);
        store.set_topics("a", vec![]);
        store.set_topics("b", vec!["y".to_string()]);

        assert_eq!(store.known_users(), ["b".to_string(), "a".to_string()]);
        assert_eq!(store.topics("b"), ["y".to_string()]);
        assert!(store.topics("missing").is_empty());
    }

    #[test]
    fn test_projects_for_filters_by_user() {
        let mut store = Store::new();
        store.insert_project(WritingProject::new(
            "u1".to_string(),
            "One".to_string(),
            default_section_targets(),
        ));
        store.insert_project(WritingProject::new(
            "u2".to_string(),
            "Two".to_string(),
            default_section_targets(),
        ));

        let titles: Vec<&str> = store.projects_for("u2").map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Two"]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut store = Store::new();
        store.set_topics("u1", vec!["sleep".to_string()]);
        store.insert_project(WritingProject::new(
            "u1".to_string(),
            "Thesis".to_string(),
            default_section_targets(),
        ));

        store.reset();

        assert!(store.known_users().is_empty());
        assert!(store.projects().is_empty());
        assert!(store.reminder_log().is_empty());
        assert!(store.delivery_log().is_empty());
    }
}

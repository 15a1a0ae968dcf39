use serde::Serialize;

use crate::{
    clock::Clock,
    config::Config,
    models::{Reminder, ReminderKind},
    store::Store,
};

/// Outcome of one reminder job run
#[derive(Debug, Clone, Serialize)]
pub struct ReminderRun {
    pub created: usize,
    /// Reminders created by this run only
    pub reminders: Vec<Reminder>,
}

/// Emits at most one shortfall reminder per project
///
/// The first section, in insertion order, whose completion ratio is below
/// the configured threshold names the reminder.
pub fn generate_reminders(store: &mut Store, config: &Config, clock: &dyn Clock) -> ReminderRun {
    let now = clock.now();

    let reminders: Vec<Reminder> = store
        .projects()
        .iter()
        .filter_map(|project| {
            let (section, _) = project
                .sections
                .iter()
                .find(|(_, s)| s.completion_ratio() < config.shortfall_threshold)?;

            tracing::debug!(
                project_id = %project.id,
                user_id = %project.user_id,
                section = %section,
                "Section behind target"
            );

            Some(Reminder {
                user_id: project.user_id.clone(),
                kind: ReminderKind::GoalShortfall,
                message: format!(
                    "{} is behind target; recommend adding ~{} words today.",
                    section, config.shortfall_boost_words
                ),
                created_at: now,
            })
        })
        .collect();

    store.append_reminders(&reminders);

    tracing::info!(
        created = reminders.len(),
        projects = store.projects().len(),
        "Reminders generated"
    );

    ReminderRun {
        created: reminders.len(),
        reminders,
    }
}

mod activity;
mod paper;
mod project;
mod user;

pub use activity::{DeliveryRecord, DeliveryStatus, Reminder, ReminderKind};
pub use paper::{Paper, PaperCategory, RecommendationResult};
pub use project::{default_section_targets, Section, WritingProject};
pub use user::{EmailPreferences, Frequency};

/// String-keyed map that keeps insertion (and JSON document) order
pub type OrderedMap<V> = indexmap::IndexMap<String, V>;

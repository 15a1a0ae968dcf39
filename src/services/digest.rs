use serde::Serialize;

use crate::{
    clock::Clock,
    config::Config,
    models::{DeliveryRecord, DeliveryStatus, RecommendationResult},
    services::recommendations::Recommender,
    store::Store,
};

/// Outcome of one digest job run
#[derive(Debug, Clone, Serialize)]
pub struct DigestRun {
    pub sent: usize,
    /// Records appended by this run only
    pub logs: Vec<DeliveryRecord>,
}

/// What a user's next digest email would contain
#[derive(Debug, Clone, Serialize)]
pub struct DigestPreview {
    pub user_id: String,
    pub send_time: String,
    pub timezone: String,
    pub subject: String,
    pub recommendations: Vec<RecommendationResult>,
}

/// Logs a digest delivery for every user with topics
///
/// Users whose stored preferences are disabled are skipped. Users without
/// stored preferences get the defaults, which means the digest is sent.
pub fn send_daily_digest(
    store: &mut Store,
    recommender: &Recommender,
    clock: &dyn Clock,
) -> DigestRun {
    let now = clock.now();

    let logs: Vec<DeliveryRecord> = store
        .known_users()
        .iter()
        .filter(|user_id| {
            let enabled = store
                .email_preferences(user_id)
                .map_or(true, |prefs| prefs.enabled);
            if !enabled {
                tracing::debug!(user_id = %user_id, "Digest disabled, skipping");
            }
            enabled
        })
        .map(|user_id| DeliveryRecord {
            user_id: user_id.clone(),
            sent_at: now,
            recommendation_ids: recommender
                .recommend(store, user_id, recommender.default_count(), now)
                .into_iter()
                .map(|r| r.paper_id)
                .collect(),
            status: DeliveryStatus::Sent,
        })
        .collect();

    store.append_deliveries(&logs);

    tracing::info!(
        sent = logs.len(),
        known_users = store.known_users().len(),
        "Daily digest dispatched"
    );

    DigestRun {
        sent: logs.len(),
        logs,
    }
}

/// Builds the digest a user would receive, falling back to default timing
pub fn preview_digest(
    store: &Store,
    recommender: &Recommender,
    config: &Config,
    clock: &dyn Clock,
    user_id: &str,
) -> DigestPreview {
    let (send_time, timezone) = match store.email_preferences(user_id) {
        Some(prefs) => (prefs.send_time.clone(), prefs.timezone.clone()),
        None => (
            config.default_send_time.clone(),
            config.default_timezone.clone(),
        ),
    };

    DigestPreview {
        user_id: user_id.to_string(),
        send_time,
        timezone,
        subject: config.digest_subject.clone(),
        recommendations: recommender.recommend(
            store,
            user_id,
            recommender.default_count(),
            clock.now(),
        ),
    }
}

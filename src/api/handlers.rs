use std::num::NonZeroU32;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{
        default_section_targets, EmailPreferences, OrderedMap, RecommendationResult, Reminder,
        Section, WritingProject,
    },
    services::{
        digest::{self, DigestPreview, DigestRun},
        reminders::{self, ReminderRun},
    },
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct TopicRequest {
    pub user_id: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TopicResponse {
    pub user_id: String,
    pub topics: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub user_id: String,
    pub title: String,
    /// Section name to target word count
    #[serde(default = "default_section_targets")]
    pub sections: OrderedMap<NonZeroU32>,
}

#[derive(Debug, Deserialize)]
pub struct PatchSectionRequest {
    pub current_words: u32,
    pub target_words: NonZeroU32,
}

#[derive(Debug, Serialize)]
pub struct SectionResponse {
    pub project_id: Uuid,
    pub section_id: String,
    pub target_words: NonZeroU32,
    pub current_words: u32,
}

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub user_id: String,
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub user_id: String,
    pub recommendations: Vec<RecommendationResult>,
}

#[derive(Debug, Serialize)]
pub struct RemindersResponse {
    pub user_id: String,
    pub reminders: Vec<Reminder>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Replace a user's topics of interest
pub async fn set_topics(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<TopicRequest>,
) -> Json<TopicResponse> {
    tracing::info!(
        request_id = %request_id,
        user_id = %request.user_id,
        topic_count = request.topics.len(),
        "Setting topics"
    );

    let mut store = state.store.write().await;
    store.set_topics(&request.user_id, request.topics.clone());

    Json(TopicResponse {
        user_id: request.user_id,
        topics: request.topics,
    })
}

/// Store or overwrite a user's digest email settings
pub async fn set_email_preferences(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(preferences): Json<EmailPreferences>,
) -> AppResult<Json<EmailPreferences>> {
    preferences.validate()?;

    tracing::info!(
        request_id = %request_id,
        user_id = %preferences.user_id,
        enabled = preferences.enabled,
        "Updating email preferences"
    );

    let mut store = state.store.write().await;
    store.set_email_preferences(preferences.clone());

    Ok(Json(preferences))
}

/// Create a writing project with all sections at zero words
pub async fn create_project(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<CreateProjectRequest>,
) -> Json<WritingProject> {
    let project = WritingProject::new(request.user_id, request.title, request.sections);

    tracing::info!(
        request_id = %request_id,
        project_id = %project.id,
        user_id = %project.user_id,
        section_count = project.sections.len(),
        "Created writing project"
    );

    let mut store = state.store.write().await;
    store.insert_project(project.clone());

    Json(project)
}

/// Replace the word counts of one section
pub async fn patch_section(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path((project_id, section_id)): Path<(String, String)>,
    Json(request): Json<PatchSectionRequest>,
) -> AppResult<Json<SectionResponse>> {
    let not_found = || AppError::NotFound("Project not found".to_string());
    let project_id = Uuid::parse_str(&project_id).map_err(|_| not_found())?;

    let mut store = state.store.write().await;
    let project = store.project_mut(project_id).ok_or_else(not_found)?;
    let section = project
        .sections
        .get_mut(&section_id)
        .ok_or_else(|| AppError::NotFound("Section not found".to_string()))?;

    *section = Section {
        target_words: request.target_words,
        current_words: request.current_words,
    };

    tracing::info!(
        request_id = %request_id,
        project_id = %project_id,
        section = %section_id,
        ratio = section.completion_ratio(),
        "Updated section progress"
    );

    Ok(Json(SectionResponse {
        project_id,
        section_id,
        target_words: section.target_words,
        current_words: section.current_words,
    }))
}

/// Today's paper recommendations for a user
pub async fn recommendations_today(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<RecommendationQuery>,
) -> Json<RecommendationsResponse> {
    let recommender = state.recommender();
    let count = query.count.unwrap_or_else(|| recommender.default_count());

    tracing::info!(
        request_id = %request_id,
        user_id = %query.user_id,
        count,
        "Fetching recommendations"
    );

    let store = state.store.read().await;
    let recommendations = recommender.recommend(&store, &query.user_id, count, state.clock.now());

    Json(RecommendationsResponse {
        user_id: query.user_id,
        recommendations,
    })
}

/// Preview the digest email a user would receive
pub async fn digest_preview(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<UserQuery>,
) -> Json<DigestPreview> {
    tracing::info!(
        request_id = %request_id,
        user_id = %query.user_id,
        "Previewing daily digest"
    );

    let store = state.store.read().await;
    let preview = digest::preview_digest(
        &store,
        &state.recommender(),
        &state.config,
        state.clock.as_ref(),
        &query.user_id,
    );
    Json(preview)
}

/// Run the daily digest job
pub async fn send_daily_digest(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Json<DigestRun> {
    tracing::info!(request_id = %request_id, "Running daily digest job");

    let mut store = state.store.write().await;
    let run = digest::send_daily_digest(&mut store, &state.recommender(), state.clock.as_ref());

    Json(run)
}

/// Run the reminder generation job
pub async fn generate_reminders(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Json<ReminderRun> {
    tracing::info!(request_id = %request_id, "Running reminder job");

    let mut store = state.store.write().await;
    let run = reminders::generate_reminders(&mut store, &state.config, state.clock.as_ref());

    Json(run)
}

/// All reminders ever generated for a user
pub async fn reminders_today(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<UserQuery>,
) -> Json<RemindersResponse> {
    tracing::info!(
        request_id = %request_id,
        user_id = %query.user_id,
        "Fetching reminder history"
    );

    let store = state.store.read().await;
    let reminders = store.reminders_for(&query.user_id);

    Json(RemindersResponse {
        user_id: query.user_id,
        reminders,
    })
}

use axum::{
    middleware,
    routing::{get, patch, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;
use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Users
        .route("/users/topics", post(handlers::set_topics))
        .route("/users/email-preferences", put(handlers::set_email_preferences))
        .route("/users/daily-digest/preview", get(handlers::digest_preview))
        .route("/users/reminders/today", get(handlers::reminders_today))
        // Writing projects
        .route("/writing-projects", post(handlers::create_project))
        .route(
            "/writing-projects/:project_id/sections/:section_id",
            patch(handlers::patch_section),
        )
        // Papers
        .route(
            "/papers/recommendations/today",
            get(handlers::recommendations_today),
        )
        // Jobs
        .route("/jobs/send-daily-paper-email", post(handlers::send_daily_digest))
        .route("/jobs/generate-reminders", post(handlers::generate_reminders))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}

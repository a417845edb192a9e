pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::feedback::handlers as feedback;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume skill extraction
        .route(
            "/parse_resume",
            post(skills::handle_parse_resume).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        // Feedback API
        .route("/api/ai-feedback", post(feedback::handle_feedback))
        .route(
            "/api/ai-feedback/batch",
            post(feedback::handle_batch_feedback),
        )
        .route(
            "/api/ai-feedback/health",
            get(feedback::handle_feedback_health),
        )
        .with_state(state)
}

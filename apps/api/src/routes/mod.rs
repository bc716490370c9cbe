pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::interview::handlers as interview;
use crate::screening::handlers as screening;
use crate::state::AppState;

/// Headroom above the upload ceiling for multipart framing and headers.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes() + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume screening
        .route("/api/v1/resumes/screen", post(screening::handle_screen_text))
        .route(
            "/api/v1/resumes/upload",
            post(screening::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Topics
        .route("/api/v1/topics", get(interview::handle_list_topics))
        .route("/api/v1/topics/resolve", post(interview::handle_resolve_topic))
        // Practice interviews
        .route("/api/v1/interviews", post(interview::handle_create_session))
        .route(
            "/api/v1/interviews/score",
            post(interview::handle_score_session),
        )
        .with_state(state)
}

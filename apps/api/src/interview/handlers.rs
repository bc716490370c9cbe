use std::collections::HashSet;

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::bank::TopicSummary;
use crate::interview::report::SessionReport;
use crate::interview::selector::QuestionSelector;
use crate::models::interview::{
    AskedQuestionHistory, InterviewSession, QuestionAnswerPair, SelectionRequest, SessionScore,
};
use crate::state::AppState;

/// Upper bound on questions drawn for a single topic in one session.
pub const MAX_QUESTIONS_PER_TOPIC: usize = 50;

#[derive(Serialize)]
pub struct TopicListResponse {
    pub topics: Vec<TopicSummary>,
}

#[derive(Deserialize)]
pub struct ResolveTopicRequest {
    pub label: String,
}

#[derive(Serialize)]
pub struct ResolveTopicResponse {
    pub label: String,
    pub topics: Vec<String>,
}

#[derive(Deserialize)]
pub struct CreateSessionRequest {
    pub requests: Vec<SelectionRequest>,
    #[serde(default)]
    pub history: AskedQuestionHistory,
}

#[derive(Deserialize)]
pub struct ScoreSessionRequest {
    pub pairs: Vec<QuestionAnswerPair>,
}

#[derive(Serialize)]
pub struct ScoreSessionResponse {
    pub score: SessionScore,
    pub report: SessionReport,
}

/// GET /api/v1/topics
pub async fn handle_list_topics(State(state): State<AppState>) -> Json<TopicListResponse> {
    Json(TopicListResponse {
        topics: state.catalog.bank.topics(),
    })
}

/// POST /api/v1/topics/resolve
pub async fn handle_resolve_topic(
    State(state): State<AppState>,
    Json(req): Json<ResolveTopicRequest>,
) -> Json<ResolveTopicResponse> {
    let topics = state.catalog.resolver().resolve(&req.label);
    Json(ResolveTopicResponse {
        label: req.label,
        topics,
    })
}

/// POST /api/v1/interviews
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<InterviewSession>, AppError> {
    let requests = validate_requests(req.requests)?;

    let outcome = {
        let selector = QuestionSelector::new(state.catalog.resolver());
        let mut rng = rand::thread_rng();
        selector.select(&requests, &req.history, &mut rng)
    };

    let session = InterviewSession {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        questions: outcome
            .questions
            .into_iter()
            .map(QuestionAnswerPair::unanswered)
            .collect(),
        history: outcome.history,
    };
    info!(
        "Created interview session {} with {} questions ({} asked in total)",
        session.id,
        session.questions.len(),
        session.history.len()
    );

    Ok(Json(session))
}

/// POST /api/v1/interviews/score
pub async fn handle_score_session(
    State(state): State<AppState>,
    Json(req): Json<ScoreSessionRequest>,
) -> Json<ScoreSessionResponse> {
    let score = state.scorer.score(&req.pairs);
    let report = SessionReport::build(&req.pairs, &score);
    info!(
        "Scored session: {}/{} answered, overall {:.1}",
        report.answered, report.total, score.overall
    );
    Json(ScoreSessionResponse { score, report })
}

/// Rejects unusable session configurations and drops zero-count requests.
pub fn validate_requests(
    requests: Vec<SelectionRequest>,
) -> Result<Vec<SelectionRequest>, AppError> {
    if requests.is_empty() {
        return Err(AppError::Validation(
            "At least one topic request is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for request in &requests {
        let label = request.topic_label.trim();
        if label.is_empty() {
            return Err(AppError::Validation("Topic label must not be blank".to_string()));
        }
        if request.requested_count > MAX_QUESTIONS_PER_TOPIC {
            return Err(AppError::Validation(format!(
                "Topic '{label}' requests {} questions; the maximum is {MAX_QUESTIONS_PER_TOPIC}",
                request.requested_count
            )));
        }
        if !seen.insert(label.to_lowercase()) {
            return Err(AppError::Validation(format!(
                "Duplicate topic label '{label}'"
            )));
        }
    }

    let requests: Vec<SelectionRequest> = requests
        .iter()
        .filter(|r| r.requested_count > 0)
        .map(|r| SelectionRequest::new(r.topic_label.trim(), r.requested_count))
        .collect();
    if requests.is_empty() {
        return Err(AppError::Validation(
            "At least one topic must request one or more questions".to_string(),
        ));
    }
    Ok(requests)
}

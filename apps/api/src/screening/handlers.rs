use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::screening::document::{extract_text, validate_upload, DocumentKind};
use crate::screening::pipeline::{screen_text, ScreeningOutcome};
use crate::state::AppState;

/// Multipart field carrying the uploaded resume.
pub const UPLOAD_FIELD: &str = "resume";

#[derive(Deserialize)]
pub struct ScreenTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ScreeningResponse {
    pub matched_keywords: Vec<String>,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_kind: Option<DocumentKind>,
}

/// Turns a pipeline outcome into a response; every rejection is a 422.
fn into_response(
    outcome: ScreeningOutcome,
    document_kind: Option<DocumentKind>,
) -> Result<Json<ScreeningResponse>, AppError> {
    if let Some(reason) = outcome.rejection_reason() {
        return Err(AppError::UnprocessableEntity(reason.message().to_string()));
    }
    Ok(Json(ScreeningResponse {
        matched_keywords: outcome.matched_keywords().to_vec(),
        skills: outcome.skills().to_vec(),
        document_kind,
    }))
}

/// POST /api/v1/resumes/screen
pub async fn handle_screen_text(
    State(state): State<AppState>,
    Json(req): Json<ScreenTextRequest>,
) -> Result<Json<ScreeningResponse>, AppError> {
    let outcome = screen_text(&req.text, &state.catalog.signals);
    into_response(outcome, None)
}

/// POST /api/v1/resumes/upload
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScreeningResponse>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(multipart_error)?;
        upload = Some((filename, bytes));
        break;
    }

    let (filename, bytes) = upload.ok_or_else(|| {
        AppError::Validation(format!("Missing multipart field '{UPLOAD_FIELD}'"))
    })?;
    if filename.is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }

    let kind = validate_upload(&filename, &bytes, state.config.max_upload_bytes())?;
    info!(
        "Screening upload '{}' ({}, {} bytes)",
        filename,
        kind.as_str(),
        bytes.len()
    );

    // PDF decoding is CPU-bound and may panic on hostile input; both degrade to no text.
    let text = tokio::task::spawn_blocking(move || extract_text(kind, &bytes))
        .await
        .unwrap_or_else(|e| {
            warn!("Text extraction task failed: {e}");
            String::new()
        });

    let outcome = screen_text(&text, &state.catalog.signals);
    into_response(outcome, Some(kind))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(e.body_text())
    }
}

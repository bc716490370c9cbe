use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::screening::document::DocumentError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<DocumentError> for AppError {
    fn from(e: DocumentError) -> Self {
        match e {
            DocumentError::TooLarge { .. } => AppError::PayloadTooLarge(e.to_string()),
            _ => AppError::Validation(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                msg.clone(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_errors_map_to_status() {
        let too_large: AppError = DocumentError::TooLarge {
            size_mb: 12.0,
            max_mb: 10,
        }
        .into();
        assert_eq!(
            too_large.into_response().status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );

        let bad_ext: AppError = DocumentError::UnsupportedExtension.into();
        assert_eq!(bad_ext.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_hides_details() {
        let err = AppError::Internal(anyhow::anyhow!("secret path /etc/x"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

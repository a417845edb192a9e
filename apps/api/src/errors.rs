use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request payload, bad upload, or a document with no readable text.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Scoring failed after the request itself was accepted.
    #[error("Computation error: {message}")]
    Computation {
        message: String,
        generated_at: DateTime<Utc>,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            AppError::Computation {
                message,
                generated_at,
            } => {
                tracing::error!("Computation error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": message,
                        "generated_at": generated_at,
                    })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::Validation("No selected file".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_computation_maps_to_server_error() {
        let response = AppError::Computation {
            message: "Failed to generate feedback: boom".to_string(),
            generated_at: Utc::now(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

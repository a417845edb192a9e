//! Axum route handlers for the feedback API.

use axum::{extract::rejection::JsonRejection, Json};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::feedback::engine::{
    generate_batch, generate_feedback, BatchFeedbackEntry, FeedbackFailure, FeedbackReport,
};

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: FeedbackReport,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BatchFeedbackResponse {
    pub batch_feedback: Vec<BatchFeedbackEntry>,
    pub status: &'static str,
}

/// Null, false, zero, empty string, empty array and empty object all count as "no data".
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// POST /api/ai-feedback
pub async fn handle_feedback(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let Json(payload) = payload
        .ok()
        .filter(|Json(v)| !is_blank(v))
        .ok_or_else(|| AppError::Validation("No fresher data provided".to_string()))?;

    let feedback = generate_feedback(&payload).map_err(|e| {
        let failure = FeedbackFailure::from_error(&e);
        AppError::Computation {
            message: failure.error,
            generated_at: failure.generated_at,
        }
    })?;

    Ok(Json(FeedbackResponse {
        feedback,
        status: "success",
    }))
}

/// POST /api/ai-feedback/batch
pub async fn handle_batch_feedback(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BatchFeedbackResponse>, AppError> {
    let entries = match payload {
        Ok(Json(Value::Array(entries))) if !entries.is_empty() => entries,
        _ => {
            return Err(AppError::Validation(
                "No freshers data provided or invalid format".to_string(),
            ))
        }
    };

    info!("Generating batch feedback for {} freshers", entries.len());
    let batch_feedback = generate_batch(&entries);

    Ok(Json(BatchFeedbackResponse {
        batch_feedback,
        status: "success",
    }))
}

/// GET /api/ai-feedback/health
pub async fn handle_feedback_health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "AI Feedback Generator",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

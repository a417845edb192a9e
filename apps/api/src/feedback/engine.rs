//! Feedback Engine: a pure function from four sub-scores to a feedback report.
//!
//! Scores are coerced to integers the forgiving way (absent → 0, floats
//! truncated, numeric strings parsed) and never range-checked: negative or
//! >100 values flow through the arithmetic and thresholds unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::feedback::analysis::{DetailedAnalysis, Metric};
use crate::feedback::recommendations::{build_recommendations, identify_improvement_areas};
use crate::feedback::tiers::PerformanceTier;

pub const QUIZ_FIELD: &str = "quizzes";
pub const CODING_FIELD: &str = "coding";
pub const ASSIGNMENT_FIELD: &str = "assignments";
pub const CERTIFICATION_FIELD: &str = "certifications";

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("expected an object of scores, got {0}")]
    NotAnObject(&'static str),

    #[error("invalid value for '{field}': {value}")]
    InvalidScore { field: &'static str, value: String },
}

/// The four sub-scores after coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreInput {
    pub quiz: i64,
    pub coding: i64,
    pub assignment: i64,
    pub certification: i64,
}

impl ScoreInput {
    /// Reads the four score fields from a request payload. Other keys are ignored.
    pub fn from_payload(payload: &Value) -> Result<Self, FeedbackError> {
        let map = payload
            .as_object()
            .ok_or(FeedbackError::NotAnObject(json_kind(payload)))?;

        let field = |name: &'static str| -> Result<i64, FeedbackError> {
            map.get(name).map_or(Ok(0), |v| coerce_score(name, v))
        };

        Ok(ScoreInput {
            quiz: field(QUIZ_FIELD)?,
            coding: field(CODING_FIELD)?,
            assignment: field(ASSIGNMENT_FIELD)?,
            certification: field(CERTIFICATION_FIELD)?,
        })
    }

    /// Arithmetic mean at full precision.
    pub fn overall(&self) -> f64 {
        (self.quiz as f64 + self.coding as f64 + self.assignment as f64 + self.certification as f64)
            / 4.0
    }
}

/// Integer conversion: integers pass, floats truncate toward zero, strings
/// parse as base-10 integers, booleans are 0/1. Everything else is rejected.
fn coerce_score(field: &'static str, value: &Value) -> Result<i64, FeedbackError> {
    let invalid = || FeedbackError::InvalidScore {
        field,
        value: value.to_string(),
    };

    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .ok_or_else(invalid),
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid()),
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(invalid()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Rounds to one decimal, ties to even (88.75 → 88.8, 72.25 → 72.2).
pub fn round_display(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackReport {
    pub overall_score: f64,
    pub performance_level: String,
    pub performance_color: String,
    pub performance_insight: String,
    pub recommendations: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub motivational_message: String,
    pub generated_at: DateTime<Utc>,
    pub detailed_analysis: DetailedAnalysis,
}

/// Error object returned in place of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackFailure {
    pub error: String,
    pub generated_at: DateTime<Utc>,
}

impl FeedbackFailure {
    pub fn from_error(err: &FeedbackError) -> Self {
        Self {
            error: format!("Failed to generate feedback: {err}"),
            generated_at: Utc::now(),
        }
    }
}

/// Either a report or the error object that replaced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeedbackOutcome {
    Report(FeedbackReport),
    Failed(FeedbackFailure),
}

impl FeedbackOutcome {
    pub fn from_payload(payload: &Value) -> Self {
        match generate_feedback(payload) {
            Ok(report) => FeedbackOutcome::Report(report),
            Err(e) => FeedbackOutcome::Failed(FeedbackFailure::from_error(&e)),
        }
    }
}

pub fn generate_feedback(payload: &Value) -> Result<FeedbackReport, FeedbackError> {
    let scores = ScoreInput::from_payload(payload)?;
    Ok(build_report(&scores, Utc::now()))
}

/// Builds the report for already-coerced scores. Deterministic apart from `generated_at`.
pub fn build_report(scores: &ScoreInput, generated_at: DateTime<Utc>) -> FeedbackReport {
    let overall = scores.overall();
    let tier = PerformanceTier::classify(overall);

    FeedbackReport {
        overall_score: round_display(overall),
        performance_level: tier.label().to_string(),
        performance_color: tier.color().to_string(),
        performance_insight: tier.insight().to_string(),
        recommendations: build_recommendations(scores, overall),
        improvement_areas: identify_improvement_areas(scores),
        motivational_message: tier.motivational_message().to_string(),
        generated_at,
        detailed_analysis: DetailedAnalysis {
            quiz_analysis: Metric::Quiz.analyse(scores.quiz),
            coding_analysis: Metric::Coding.analyse(scores.coding),
            assignment_analysis: Metric::Assignment.analyse(scores.assignment),
            certification_analysis: Metric::Certification.analyse(scores.certification),
        },
    }
}

/// One batch result; `id` and `name` are echoed back untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchFeedbackEntry {
    pub id: Value,
    pub name: Value,
    pub feedback: FeedbackOutcome,
}

/// Scores every entry independently. A bad entry carries its own error
/// object; it never aborts the rest of the batch.
pub fn generate_batch(entries: &[Value]) -> Vec<BatchFeedbackEntry> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let feedback = FeedbackOutcome::from_payload(entry);
            if let FeedbackOutcome::Failed(failure) = &feedback {
                warn!("Batch entry {index} failed: {}", failure.error);
            }
            BatchFeedbackEntry {
                id: entry.get("id").cloned().unwrap_or(Value::Null),
                name: entry.get("name").cloned().unwrap_or(Value::Null),
                feedback,
            }
        })
        .collect()
}

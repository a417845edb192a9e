//! Resume skill extraction pipeline: pick format → extract text → resolve → normalise.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::skills::extract::{extract_text, DocumentKind};
use crate::skills::resolver::{ExtractionMode, SkillResolver};

pub const NO_SKILLS_MESSAGE: &str = "No specific skills identified.";
pub const AI_MESSAGE: &str = "Skills extracted using AI analysis";
pub const FALLBACK_MESSAGE: &str = "Skills extracted using basic analysis (AI unavailable)";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillExtractionResponse {
    pub skills: Vec<String>,
    pub mode: ExtractionMode,
    pub message: String,
}

pub async fn extract_skills(
    document: Bytes,
    filename: &str,
    resolver: &dyn SkillResolver,
) -> Result<SkillExtractionResponse, AppError> {
    if filename.is_empty() {
        return Err(AppError::Validation("No selected file".to_string()));
    }

    let kind = DocumentKind::from_filename(filename).ok_or_else(|| {
        AppError::Validation("Unsupported file type. Please upload a PDF or DOCX.".to_string())
    })?;

    // Parsing is CPU-bound; keep it off the async workers.
    let text = tokio::task::spawn_blocking(move || extract_text(&document, kind))
        .await
        .unwrap_or_else(|e| {
            warn!("Text extraction task failed: {e}");
            String::new()
        });

    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "Could not extract text from the resume. The file might be corrupted or empty."
                .to_string(),
        ));
    }

    let result = resolver.resolve(&text).await;
    info!(
        "Extracted {} skills from {filename} (mode: {:?})",
        result.skills.len(),
        result.mode
    );

    let message = if result.skills.is_empty() {
        NO_SKILLS_MESSAGE
    } else {
        match result.mode {
            ExtractionMode::Ai => AI_MESSAGE,
            ExtractionMode::Fallback => FALLBACK_MESSAGE,
        }
    };

    Ok(SkillExtractionResponse {
        skills: result.skills,
        mode: result.mode,
        message: message.to_string(),
    })
}

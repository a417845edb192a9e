//! Axum route handler for resume uploads.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    Json,
};

use crate::errors::AppError;
use crate::skills::service::{extract_skills, SkillExtractionResponse};
use crate::state::AppState;

/// Multipart field carrying the uploaded file.
pub const RESUME_FIELD: &str = "resume";

fn bad_upload(e: MultipartError) -> AppError {
    AppError::Validation(format!("Could not read uploaded file: {}", e.body_text()))
}

/// POST /parse_resume
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SkillExtractionResponse>, AppError> {
    let no_file = || AppError::Validation("No resume file provided".to_string());
    let mut multipart = multipart.map_err(|_| no_file())?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(bad_upload)? {
        // Fields without a filename are plain form values, not files.
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field.bytes().await.map_err(bad_upload)?;
        upload = Some((filename, data));
        break;
    }

    let (filename, data) = upload.ok_or_else(no_file)?;
    let response = extract_skills(data, &filename, state.skill_resolver.as_ref()).await?;
    Ok(Json(response))
}

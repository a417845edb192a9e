use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::skills::resolver::ExtractionMode;
use crate::state::AppState;

/// GET /health
/// Liveness probe; also reports whether skill extraction can use the model.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let mode = state.skill_resolver.configured_mode();
    Json(json!({
        "status": "OK",
        "message": "Resume parser service is running",
        "aiAvailable": mode == ExtractionMode::Ai,
        "mode": mode
    }))
}

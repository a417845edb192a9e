use std::sync::Arc;

use crate::config::Config;
use crate::skills::resolver::SkillResolver;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Skill strategy, fixed at startup: LlmSkillResolver when a Gemini key is set,
    /// KeywordSkillResolver otherwise.
    pub skill_resolver: Arc<dyn SkillResolver>,
}

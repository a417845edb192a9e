//! Skill resolution: pluggable, trait-based strategy that turns resume text into skills.
//!
//! `KeywordSkillResolver` is pure and deterministic. `LlmSkillResolver` asks the
//! model once and degrades to keyword matching on any failure.
//!
//! `AppState` holds an `Arc<dyn SkillResolver>`, chosen once at startup.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::llm_client::{strip_json_fences, LlmError, TextGenerator};
use crate::skills::keywords::extract_skills_by_keyword;
use crate::skills::prompts::build_skill_prompt;

/// Which strategy actually produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    Ai,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillExtractionResult {
    pub skills: Vec<String>,
    pub mode: ExtractionMode,
}

impl SkillExtractionResult {
    fn fallback(text: &str) -> Self {
        Self {
            skills: extract_skills_by_keyword(text),
            mode: ExtractionMode::Fallback,
        }
    }
}

/// Resolves skills from extracted document text. Infallible by contract.
#[async_trait]
pub trait SkillResolver: Send + Sync {
    /// The mode this resolver runs in when nothing goes wrong.
    fn configured_mode(&self) -> ExtractionMode;

    async fn resolve(&self, text: &str) -> SkillExtractionResult;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordSkillResolver
// ────────────────────────────────────────────────────────────────────────────

pub struct KeywordSkillResolver;

#[async_trait]
impl SkillResolver for KeywordSkillResolver {
    fn configured_mode(&self) -> ExtractionMode {
        ExtractionMode::Fallback
    }

    async fn resolve(&self, text: &str) -> SkillExtractionResult {
        SkillExtractionResult::fallback(text)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmSkillResolver
// ────────────────────────────────────────────────────────────────────────────

/// Single model call, no retries. A failed call or unparseable reply is
/// reported as `mode = fallback`, same as a process with no model at all.
pub struct LlmSkillResolver {
    generator: Arc<dyn TextGenerator>,
}

impl LlmSkillResolver {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl SkillResolver for LlmSkillResolver {
    fn configured_mode(&self) -> ExtractionMode {
        ExtractionMode::Ai
    }

    async fn resolve(&self, text: &str) -> SkillExtractionResult {
        let prompt = build_skill_prompt(text);

        let reply = match self.generator.generate(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Error calling skill model, using fallback: {e}");
                return SkillExtractionResult::fallback(text);
            }
        };

        match parse_skill_reply(&reply) {
            Ok(skills) => SkillExtractionResult {
                skills,
                mode: ExtractionMode::Ai,
            },
            Err(e) => {
                warn!("Skill model reply was not valid JSON ({e}), using fallback: {reply}");
                SkillExtractionResult::fallback(text)
            }
        }
    }
}

/// Accepts a JSON array of skills, or an object with a `skills` array.
/// Any other valid JSON yields no skills. Non-string items are skipped and
/// duplicates dropped, keeping first occurrence.
pub fn parse_skill_reply(reply: &str) -> Result<Vec<String>, LlmError> {
    let parsed: Value = serde_json::from_str(strip_json_fences(reply))?;

    let items: &[Value] = match &parsed {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get("skills") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        },
        _ => &[],
    };

    let mut seen = HashSet::new();
    Ok(items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty() && seen.insert(s.to_string()))
        .map(String::from)
        .collect())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Replies with a canned string, or fails, and records the prompts it saw.
    pub(crate) struct StubGenerator {
        reply: Option<String>,
        pub(crate) prompts: Mutex<Vec<String>>,
    }

    impl StubGenerator {
        pub(crate) fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                reply: None,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().ok_or(LlmError::Api {
                status: 503,
                message: "unavailable".to_string(),
            })
        }
    }

    fn resolver(stub: StubGenerator) -> (Arc<StubGenerator>, LlmSkillResolver) {
        let stub = Arc::new(stub);
        (stub.clone(), LlmSkillResolver::new(stub))
    }

    #[tokio::test]
    async fn test_fenced_array_is_unwrapped() {
        let (stub, resolver) =
            resolver(StubGenerator::replying("```json\n[\"Rust\", \"Teamwork\"]\n```"));
        let result = resolver.resolve("resume text").await;
        assert_eq!(result.mode, ExtractionMode::Ai);
        assert_eq!(result.skills, vec!["Rust", "Teamwork"]);

        let prompts = stub.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("---\nresume text\n---"));
    }

    #[tokio::test]
    async fn test_malformed_json_falls_back_to_keywords() {
        let (_, resolver) = resolver(StubGenerator::replying("Sure! Skills: Python, Git"));
        let result = resolver.resolve("Python and Git").await;
        assert_eq!(result.mode, ExtractionMode::Fallback);
        assert_eq!(result.skills, vec!["Python", "Git"]);
    }

    #[tokio::test]
    async fn test_call_failure_falls_back_without_retry() {
        let (stub, resolver) = resolver(StubGenerator::failing());
        let result = resolver.resolve("nothing relevant here").await;
        assert_eq!(result.mode, ExtractionMode::Fallback);
        assert_eq!(result.skills, vec!["General Programming", "Problem Solving"]);
        assert_eq!(stub.prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_object_without_skills_key_is_empty_ai_result() {
        let (_, resolver) = resolver(StubGenerator::replying(r#"{"result": ["Go"]}"#));
        let result = resolver.resolve("Go developer").await;
        assert_eq!(result.mode, ExtractionMode::Ai);
        assert!(result.skills.is_empty());
    }

    #[tokio::test]
    async fn test_keyword_resolver_reports_fallback() {
        let result = KeywordSkillResolver.resolve("GraphQL and Scrum").await;
        assert_eq!(result.mode, ExtractionMode::Fallback);
        assert_eq!(result.skills, vec!["Scrum", "GraphQL"]);
    }

    #[test]
    fn test_parse_object_with_skills_key() {
        let skills = parse_skill_reply(r#"{"skills": ["SQL", "Git"]}"#).unwrap();
        assert_eq!(skills, vec!["SQL", "Git"]);
    }

    #[test]
    fn test_parse_drops_duplicates_and_non_strings() {
        let skills = parse_skill_reply(r#"["SQL", 3, "SQL", " Git ", null, ""]"#).unwrap();
        assert_eq!(skills, vec!["SQL", "Git"]);
    }

    #[test]
    fn test_parse_scalar_is_empty() {
        assert!(parse_skill_reply("42").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(matches!(
            parse_skill_reply("```json\n[\"Rust\",\n```"),
            Err(LlmError::Parse(_))
        ));
    }
}

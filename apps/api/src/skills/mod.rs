// Resume Skill Extractor: document text → skills, via the model or keyword matching.
// All model calls go through llm_client.

pub mod extract;
pub mod handlers;
pub mod keywords;
pub mod prompts;
pub mod resolver;
pub mod service;

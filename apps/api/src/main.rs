mod config;
mod errors;
mod feedback;
mod llm_client;
mod routes;
mod skills;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::skills::resolver::{KeywordSkillResolver, LlmSkillResolver, SkillResolver};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting fresher API v{} (ai configured: {})",
        env!("CARGO_PKG_VERSION"),
        config.ai_enabled()
    );

    // Skill strategy is fixed for the life of the process.
    let skill_resolver: Arc<dyn SkillResolver> = match &config.gemini_api_key {
        Some(api_key) => {
            let llm = LlmClient::new(api_key.clone(), &config.gemini_api_base)?;
            info!("Skill extraction: ai (model: {})", llm_client::MODEL);
            Arc::new(LlmSkillResolver::new(Arc::new(llm)))
        }
        None => {
            info!("GEMINI_API_KEY not set, skill extraction: fallback");
            Arc::new(KeywordSkillResolver)
        }
    };

    let state = AppState {
        config: config.clone(),
        skill_resolver,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

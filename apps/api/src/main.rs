mod chat;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::service::OpenAiPromptService;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on a missing API key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting classroom API v{}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.env);
    info!("Serving front-end from: {}", config.frontend_dir);

    // One shared, stateless prompt service for all requests
    let llm = LlmClient::new(config.openai_api_key.clone());
    let service = Arc::new(OpenAiPromptService::new(llm));
    info!("LLM client initialized (default model: {})", llm_client::DEFAULT_MODEL);

    let state = AppState {
        service,
        config: config.clone(),
    };

    // The front-end is served from arbitrary origins during development, so
    // CORS stays wide open: all origins, methods, and headers.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only the provider API key is required; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Deployment environment label ("development", "production", ...).
    /// Logged at startup; drives no behavior in the compiled binary.
    pub env: String,
    pub openai_api_key: String,
    /// Directory holding the pre-built front-end bundle.
    pub frontend_dir: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            env: std::env::var("ENV").unwrap_or_else(|_| "development".to_string()),
            openai_api_key: require_env("OPENAI_API_KEY")?,
            frontend_dir: std::env::var("FRONTEND_DIR").unwrap_or_else(|_| "frontend".to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

use std::sync::Arc;

use crate::chat::service::PromptService;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The prompt service is stateless, so one instance is built at startup and
/// shared across requests rather than constructed per call.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn PromptService>,
    pub config: Config,
}

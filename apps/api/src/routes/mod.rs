pub mod health;

use std::path::Path;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::services::{ServeDir, ServeFile};

use crate::chat::handlers;
use crate::state::AppState;

/// GET /api
async fn api_root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Classroom API" }))
}

pub fn build_router(state: AppState) -> Router {
    let frontend_dir = state.config.frontend_dir.clone();
    let index = Path::new(&frontend_dir).join("index.html");
    // Everything the API does not match falls through to the front-end
    // bundle; unknown paths get index.html (SPA fallback routing).
    let frontend = ServeDir::new(&frontend_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .route("/api", get(api_root))
        .route("/api/health", get(health::health_handler))
        .route("/api/oneshot", post(handlers::handle_oneshot))
        .route(
            "/api/evaluate-prompt",
            post(handlers::handle_evaluate_prompt),
        )
        .fallback_service(frontend)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::models::OneshotResult;
    use crate::chat::service::PromptService;
    use crate::config::Config;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Router-level tests never reach the provider; any adapter call is a bug.
    struct UnreachableService;

    #[async_trait]
    impl PromptService for UnreachableService {
        async fn generate_oneshot(
            &self,
            _prompt: &str,
            _model: Option<&str>,
            _temperature: Option<f32>,
            _max_tokens: Option<u32>,
        ) -> OneshotResult {
            unreachable!("adapter must not be invoked")
        }

        async fn generate_ideal_prompt(
            &self,
            _learning_objective: &str,
            _settings: &Value,
        ) -> Result<String, LlmError> {
            unreachable!("adapter must not be invoked")
        }

        async fn evaluate_prompt(
            &self,
            _current_prompt: &str,
            _learning_objective: &str,
            _settings: &Value,
            _previous_prompt: Option<&str>,
        ) -> Result<Value, LlmError> {
            unreachable!("adapter must not be invoked")
        }
    }

    fn router_with_frontend(frontend_dir: &str) -> Router {
        build_router(AppState {
            service: Arc::new(UnreachableService),
            config: Config {
                host: "127.0.0.1".to_string(),
                port: 0,
                env: "test".to_string(),
                openai_api_key: "test-key".to_string(),
                frontend_dir: frontend_dir.to_string(),
                rust_log: "info".to_string(),
            },
        })
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_api_root_returns_welcome_message() {
        let app = router_with_frontend("frontend");
        let response = app
            .oneshot(Request::get("/api").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["message"].as_str().unwrap().contains("Welcome"));
    }

    #[tokio::test]
    async fn test_health_route_returns_ok() {
        let app = router_with_frontend("frontend");
        let response = app
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_oneshot_empty_prompt_is_400_and_adapter_untouched() {
        let app = router_with_frontend("frontend");
        let response = app
            .oneshot(
                Request::post("/api/oneshot")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"prompt": ""}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "Prompt is required");
    }

    #[tokio::test]
    async fn test_oneshot_absent_prompt_is_400() {
        let app = router_with_frontend("frontend");
        let response = app
            .oneshot(
                Request::post("/api/oneshot")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_evaluate_missing_fields_is_400() {
        let app = router_with_frontend("frontend");
        let response = app
            .oneshot(
                Request::post("/api/evaluate-prompt")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"currentPrompt": "Teach fractions"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unmatched_path_falls_back_to_index_html() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>classroom</html>").unwrap();

        let app = router_with_frontend(dir.path().to_str().unwrap());
        let response = app
            .oneshot(
                Request::get("/some/spa/route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(bytes.as_ref(), b"<html>classroom</html>");
    }

    #[tokio::test]
    async fn test_root_serves_index_html() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>classroom</html>").unwrap();

        let app = router_with_frontend(dir.path().to_str().unwrap());
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_static_asset_served_as_is() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>classroom</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('hi')").unwrap();

        let app = router_with_frontend(dir.path().to_str().unwrap());
        let response = app
            .oneshot(Request::get("/app.js").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(bytes.as_ref(), b"console.log('hi')");
    }
}

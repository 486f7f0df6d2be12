use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /api/health
/// Always succeeds, regardless of provider availability.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
        "service": env!("CARGO_PKG_NAME")
    }))
}

use axum::Json;
use serde_json::{json, Value};

/// Liveness probe and landing message.
pub async fn handler() -> Json<Value> {
    Json(json!({ "message": "API de control de LED para ESP32" }))
}

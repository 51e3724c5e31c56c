use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::app_state::AppState;

pub async fn count(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "count": state.count() }))
}

pub async fn increment(State(state): State<Arc<AppState>>) -> Json<Value> {
    let count = state.increment();
    tracing::debug!(count, "Button press recorded");

    Json(json!({ "message": "Contador incrementado", "count": count }))
}

pub async fn reset(State(state): State<Arc<AppState>>) -> Json<Value> {
    let count = state.reset();
    tracing::info!("Button counter reset");

    Json(json!({ "message": "Contador reiniciado", "count": count }))
}

use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::app_state::{AppState, LedState};

pub async fn status(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "state": state.led() }))
}

pub async fn on(State(state): State<Arc<AppState>>) -> Json<Value> {
    let led = state.set_led(LedState::On);
    tracing::info!(?led, "LED switched on");

    Json(json!({ "message": "LED encendido", "state": led }))
}

pub async fn off(State(state): State<Arc<AppState>>) -> Json<Value> {
    let led = state.set_led(LedState::Off);
    tracing::info!(?led, "LED switched off");

    Json(json!({ "message": "LED apagado", "state": led }))
}

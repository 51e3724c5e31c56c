pub mod button;
pub mod index;
pub mod led;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{app_state::AppState, error::AppError};

pub fn router(state: Arc<AppState>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/",                  get(index::handler))
        .route("/led/status",        get(led::status))
        .route("/led/on",            post(led::on))
        .route("/led/off",           post(led::off))
        .route("/button/count",      get(button::count))
        .route("/button/increment",  post(button::increment))
        .route("/button/reset",      post(button::reset))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

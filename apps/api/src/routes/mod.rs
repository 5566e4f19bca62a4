pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::extract::handlers as extract_handlers;
use crate::render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/upload", post(extract_handlers::handle_upload))
        .route("/api/v1/analyze", post(analysis_handlers::handle_analyze))
        .route("/api/v1/optimize", post(analysis_handlers::handle_optimize))
        .route("/api/v1/render", post(render::handle_render))
        .with_state(state)
}

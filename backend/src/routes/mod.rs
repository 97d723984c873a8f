//! Route definitions for the Gym Tracker API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod achievements;
mod health;
mod planner;
mod progress;
mod training;

pub use achievements::achievement_routes;
pub use planner::planner_routes;
pub use progress::progress_routes;
pub use training::training_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    let server = &state.config().server;
    let timeout = Duration::from_secs(server.request_timeout_secs);
    let body_limit = server.body_limit_bytes;

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        // A nested "/" only matches the bare prefix, so the slash form is explicit
        .route("/api/v1/", get(api_banner))
        .nest("/api/v1", api_routes())
        // Apply middleware layers
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(api_banner))
        .nest("/training", training::training_routes())
        .nest("/progress", progress::progress_routes())
        .nest("/planner", planner::planner_routes())
        .nest("/achievements", achievements::achievement_routes())
}

/// GET /api/v1 - API banner
async fn api_banner() -> &'static str {
    "Gym Tracker API v1"
}

//! Progress API routes

use crate::error::ApiError;
use crate::services::ProgressService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use gym_tracker_shared::dashboard::{Dashboard, DashboardSnapshot};
use gym_tracker_shared::types::{DashboardRequest, ProgressRequest};
use gym_tracker_shared::{AnalyticsContext, UserProgressMetrics};

/// Create progress routes
pub fn progress_routes() -> Router<AppState> {
    Router::new()
        .route("/metrics", post(progress_metrics))
        .route("/dashboard", post(dashboard))
}

/// POST /api/v1/progress/metrics - Streak, level and monthly totals
async fn progress_metrics(
    State(state): State<AppState>,
    Json(req): Json<ProgressRequest>,
) -> Result<Json<UserProgressMetrics>, ApiError> {
    let ctx = AnalyticsContext::new(req.user_id, state.resolve_today(req.today));
    let metrics =
        ProgressService::metrics(&ctx, &req.workouts, &req.achievements, &state.estimates())?;
    Ok(Json(metrics))
}

/// POST /api/v1/progress/dashboard - Dashboard summary
async fn dashboard(
    State(state): State<AppState>,
    Json(req): Json<DashboardRequest>,
) -> Result<Json<Dashboard>, ApiError> {
    let ctx = AnalyticsContext::new(req.user_id, state.resolve_today(req.today));
    let snapshot = DashboardSnapshot {
        workouts: &req.workouts,
        achievements: &req.achievements,
        goals: &req.goals,
        planned: &req.planned,
    };
    let dashboard = ProgressService::dashboard(&ctx, snapshot, &state.estimates())?;
    Ok(Json(dashboard))
}

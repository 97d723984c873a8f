//! Planner API routes

use crate::error::ApiError;
use crate::services::PlannerService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use gym_tracker_shared::types::{CompareRequest, PlannerWeekRequest, PlannerWeekResponse};
use gym_tracker_shared::WorkoutComparison;

/// Create planner routes
pub fn planner_routes() -> Router<AppState> {
    Router::new()
        .route("/compare", post(compare_workout))
        .route("/week", post(planner_week))
}

/// POST /api/v1/planner/compare - Completion of one planned workout
async fn compare_workout(
    Json(req): Json<CompareRequest>,
) -> Result<Json<WorkoutComparison>, ApiError> {
    let comparison = PlannerService::compare(&req.planned, req.actual)?;
    Ok(Json(comparison))
}

/// POST /api/v1/planner/week - Weekly plan with completion per workout
async fn planner_week(
    State(state): State<AppState>,
    Json(req): Json<PlannerWeekRequest>,
) -> Result<Json<PlannerWeekResponse>, ApiError> {
    let selected = req
        .selected_date
        .unwrap_or_else(|| state.resolve_today(req.today));
    let week = PlannerService::week(req.user_id, selected, &req.planned, &req.logged)?;
    Ok(Json(week))
}

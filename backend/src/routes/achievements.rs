//! Achievement API routes

use crate::error::ApiError;
use crate::services::AchievementService;
use crate::state::AppState;
use axum::{routing::post, Json, Router};
use gym_tracker_shared::types::{AchievementCheckRequest, AchievementCheckResponse};

/// Create achievement routes
pub fn achievement_routes() -> Router<AppState> {
    Router::new().route("/evaluate", post(evaluate_achievements))
}

/// POST /api/v1/achievements/evaluate - Newly earned achievements
async fn evaluate_achievements(
    Json(req): Json<AchievementCheckRequest>,
) -> Result<Json<AchievementCheckResponse>, ApiError> {
    let response = AchievementService::evaluate(req.user_id, &req.workouts, &req.achievements)?;
    Ok(Json(response))
}

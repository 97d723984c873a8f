//! Training analysis API routes

use crate::error::ApiError;
use crate::services::TrainingService;
use crate::state::AppState;
use axum::{routing::post, Json, Router};
use gym_tracker_shared::types::{
    ExerciseSnapshotRequest, GuideRequest, GuideResponse, MuscleGroupStatsResponse,
    SuggestionsResponse,
};

/// Create training routes
pub fn training_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", post(muscle_group_stats))
        .route("/suggestions", post(training_suggestions))
        .route("/guide", post(exercise_guide))
}

/// POST /api/v1/training/stats - Muscle group distribution
async fn muscle_group_stats(
    Json(req): Json<ExerciseSnapshotRequest>,
) -> Result<Json<MuscleGroupStatsResponse>, ApiError> {
    let response = TrainingService::muscle_group_stats(req.user_id, &req.exercises)?;
    Ok(Json(response))
}

/// POST /api/v1/training/suggestions - What to train next
async fn training_suggestions(
    Json(req): Json<ExerciseSnapshotRequest>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    let response = TrainingService::suggestions(req.user_id, &req.exercises)?;
    Ok(Json(response))
}

/// POST /api/v1/training/guide - Catalog exercises for a muscle group
async fn exercise_guide(Json(req): Json<GuideRequest>) -> Result<Json<GuideResponse>, ApiError> {
    let response =
        TrainingService::guide(&req.catalog, req.muscle_group, &req.search, req.difficulty)?;
    Ok(Json(response))
}

//! Achievement service

use crate::error::ApiError;
use gym_tracker_shared::achievements::{achievements_remaining, evaluate_achievements};
use gym_tracker_shared::types::AchievementCheckResponse;
use gym_tracker_shared::validation::validate_exercise_snapshot;
use gym_tracker_shared::{calculate_level_and_xp, Achievement, LoggedExercise};
use tracing::{debug, info};
use uuid::Uuid;

pub struct AchievementService;

impl AchievementService {
    /// Achievements newly earned by the snapshot, and the resulting level
    pub fn evaluate(
        user_id: Uuid,
        workouts: &[LoggedExercise],
        held: &[Achievement],
    ) -> Result<AchievementCheckResponse, ApiError> {
        validate_exercise_snapshot(workouts)?;

        let unlocked = evaluate_achievements(workouts, held);
        let achievement_count = held.len() + unlocked.len();

        if unlocked.is_empty() {
            debug!(%user_id, "No new achievements");
        } else {
            info!(%user_id, unlocked = unlocked.len(), "Achievements unlocked");
        }

        Ok(AchievementCheckResponse {
            level: calculate_level_and_xp(workouts.len(), achievement_count),
            remaining: achievements_remaining(achievement_count),
            unlocked,
        })
    }
}

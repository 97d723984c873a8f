//! Training analysis service
//!
//! Provides business logic for:
//! - Muscle group distribution of a user's history
//! - Suggestions for what to train next
//! - The muscle guide those suggestions link to

use crate::error::ApiError;
use gym_tracker_shared::guide::catalog_muscle_groups;
use gym_tracker_shared::types::{GuideResponse, MuscleGroupStatsResponse, SuggestionsResponse};
use gym_tracker_shared::validation::{validate_catalog, validate_exercise_snapshot};
use gym_tracker_shared::{
    aggregate_by_muscle_group, filter_guide, suggest_next_training, CatalogExercise, Difficulty,
    LoggedExercise, MuscleGroup,
};
use tracing::debug;
use uuid::Uuid;

/// Training service for muscle group analytics
pub struct TrainingService;

impl TrainingService {
    /// Per-muscle-group counts and accumulated weight
    pub fn muscle_group_stats(
        user_id: Uuid,
        exercises: &[LoggedExercise],
    ) -> Result<MuscleGroupStatsResponse, ApiError> {
        validate_exercise_snapshot(exercises)?;

        let stats = aggregate_by_muscle_group(exercises);
        debug!(%user_id, groups = stats.len(), "Aggregated muscle group stats");

        Ok(MuscleGroupStatsResponse {
            stats,
            total_exercises: exercises.len(),
        })
    }

    /// Up to three muscle groups to train next
    pub fn suggestions(
        user_id: Uuid,
        exercises: &[LoggedExercise],
    ) -> Result<SuggestionsResponse, ApiError> {
        validate_exercise_snapshot(exercises)?;

        let stats = aggregate_by_muscle_group(exercises);
        let suggestions = suggest_next_training(&stats);
        debug!(
            %user_id,
            suggestions = suggestions.len(),
            "Generated training suggestions"
        );

        Ok(SuggestionsResponse { stats, suggestions })
    }

    /// Catalog exercises for the selected group, search and difficulty
    pub fn guide(
        catalog: &[CatalogExercise],
        group: Option<MuscleGroup>,
        search: &str,
        difficulty: Option<Difficulty>,
    ) -> Result<GuideResponse, ApiError> {
        validate_catalog(catalog)?;

        let exercises: Vec<CatalogExercise> = filter_guide(catalog, group, search, difficulty)
            .into_iter()
            .cloned()
            .collect();
        debug!(
            group = ?group,
            search,
            matches = exercises.len(),
            "Filtered exercise guide"
        );

        Ok(GuideResponse {
            muscle_groups: catalog_muscle_groups(catalog),
            exercises,
        })
    }
}

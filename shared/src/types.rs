//! API request and response types

use crate::achievements::AchievementUnlock;
use crate::aggregation::MuscleGroupStat;
use crate::comparison::WorkoutComparison;
use crate::guide::{deserialize_difficulty_filter, CatalogExercise, Difficulty};
use crate::models::{
    Achievement, ActualPerformance, LoggedExercise, MuscleGroup, PlannedWorkout, UserGoal,
};
use crate::planner::PlannedDay;
use crate::progress::LevelProgress;
use crate::suggestions::Suggestion;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Training Types
// ============================================================================

/// Snapshot of a user's logged exercises
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseSnapshotRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub exercises: Vec<LoggedExercise>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuscleGroupStatsResponse {
    pub stats: Vec<MuscleGroupStat>,
    pub total_exercises: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub stats: Vec<MuscleGroupStat>,
    pub suggestions: Vec<Suggestion>,
}

/// Muscle guide lookup over the exercise catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideRequest {
    #[serde(default)]
    pub catalog: Vec<CatalogExercise>,
    /// Nothing is listed while no group is selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_group: Option<MuscleGroup>,
    #[serde(default)]
    pub search: String,
    /// `Todos` or absent means any difficulty
    #[serde(
        default,
        deserialize_with = "deserialize_difficulty_filter",
        skip_serializing_if = "Option::is_none"
    )]
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideResponse {
    /// Groups present in the catalog, for the group picker
    pub muscle_groups: Vec<MuscleGroup>,
    pub exercises: Vec<CatalogExercise>,
}

// ============================================================================
// Progress Types
// ============================================================================

/// Snapshot used for streak, level and monthly metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRequest {
    pub user_id: Uuid,
    /// Reference date; the server's local date when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
    #[serde(default)]
    pub workouts: Vec<LoggedExercise>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardRequest {
    pub user_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
    #[serde(default)]
    pub workouts: Vec<LoggedExercise>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub goals: Vec<UserGoal>,
    #[serde(default)]
    pub planned: Vec<PlannedWorkout>,
}

// ============================================================================
// Planner Types
// ============================================================================

/// Compare one plan against what was actually performed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    pub planned: PlannedWorkout,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<ActualPerformance>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerWeekRequest {
    pub user_id: Uuid,
    /// Any day of the requested week; defaults to `today`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
    #[serde(default)]
    pub planned: Vec<PlannedWorkout>,
    #[serde(default)]
    pub logged: Vec<LoggedExercise>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerWeekResponse {
    pub week_start: NaiveDate,
    pub days: Vec<PlannedDay>,
    /// Comparisons for every plan in the week, in day order
    pub comparisons: Vec<WorkoutComparison>,
}

// ============================================================================
// Achievement Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementCheckRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub workouts: Vec<LoggedExercise>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementCheckResponse {
    /// Newly earned achievements, not yet held by the user
    pub unlocked: Vec<AchievementUnlock>,
    /// Level after granting the new achievements
    pub level: LevelProgress,
    pub remaining: usize,
}

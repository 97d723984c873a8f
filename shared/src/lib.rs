//! Gym Tracker Shared Library
//!
//! Workout analytics engine shared by the backend and WASM modules:
//! muscle-group aggregation, training suggestions, streak and level
//! progression, plan-vs-actual comparison, the exercise guide filter,
//! and the request/response types.

pub mod achievements;
pub mod aggregation;
pub mod comparison;
pub mod dashboard;
pub mod errors;
pub mod goals;
pub mod guide;
pub mod history;
pub mod models;
pub mod planner;
pub mod progress;
pub mod suggestions;
pub mod types;
pub mod validation;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use aggregation::{aggregate_by_muscle_group, MuscleGroupStat};
pub use comparison::{compare_planned, compare_workout, Completion, WorkoutComparison};
pub use errors::*;
pub use guide::{filter_guide, CatalogExercise, Difficulty};
pub use models::*;
pub use progress::{
    calculate_level_and_xp, calculate_monthly_stats, calculate_progress_metrics,
    calculate_streak, LevelProgress, MonthlyStats, UserProgressMetrics, WorkoutEstimates,
};
pub use suggestions::{suggest_next_training, Suggestion, SuggestionReason};
pub use validation::ValidationError;

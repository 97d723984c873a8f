//! Workout planner service
//!
//! Provides business logic for:
//! - Comparing a planned workout with what was performed
//! - Weekly plan overview with per-workout completion

use crate::error::ApiError;
use chrono::NaiveDate;
use gym_tracker_shared::planner::{plan_week, week_start};
use gym_tracker_shared::types::PlannerWeekResponse;
use gym_tracker_shared::validation::{
    validate_actual_performance, validate_exercise_snapshot, validate_plan_snapshot,
    validate_planned_workout,
};
use gym_tracker_shared::{
    compare_planned, compare_workout, ActualPerformance, AnalyticsError, LoggedExercise,
    PlannedWorkout, WorkoutComparison,
};
use tracing::debug;
use uuid::Uuid;

/// Planner service
pub struct PlannerService;

impl PlannerService {
    /// Compare one planned workout with an optional actual performance
    pub fn compare(
        planned: &PlannedWorkout,
        actual: Option<ActualPerformance>,
    ) -> Result<WorkoutComparison, ApiError> {
        validate_planned_workout(planned).map_err(AnalyticsError::from)?;
        if let Some(actual) = &actual {
            validate_actual_performance(actual).map_err(AnalyticsError::from)?;
        }

        let comparison = compare_workout(planned, actual);
        debug!(
            planned_id = %planned.id,
            completion = ?comparison.completion,
            "Compared planned workout"
        );

        Ok(comparison)
    }

    /// The week containing `selected`, with every plan compared against the log
    pub fn week(
        user_id: Uuid,
        selected: NaiveDate,
        planned: &[PlannedWorkout],
        logged: &[LoggedExercise],
    ) -> Result<PlannerWeekResponse, ApiError> {
        validate_plan_snapshot(planned)?;
        validate_exercise_snapshot(logged)?;

        let days = plan_week(selected, planned);
        let week_plans: Vec<PlannedWorkout> = days
            .iter()
            .flat_map(|day| day.workouts.iter().cloned())
            .collect();
        let comparisons = compare_planned(&week_plans, logged);

        debug!(
            %user_id,
            %selected,
            planned = week_plans.len(),
            "Built planner week"
        );

        Ok(PlannerWeekResponse {
            week_start: week_start(selected),
            days,
            comparisons,
        })
    }
}

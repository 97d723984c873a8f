//! Progress service
//!
//! Streaks, level and XP, monthly totals, and the dashboard summary.

use crate::error::ApiError;
use gym_tracker_shared::dashboard::{build_dashboard, Dashboard, DashboardSnapshot};
use gym_tracker_shared::validation::{
    validate_exercise_snapshot, validate_goal, validate_plan_snapshot,
};
use gym_tracker_shared::{
    calculate_progress_metrics, Achievement, AnalyticsContext, AnalyticsError, LoggedExercise,
    UserProgressMetrics, WorkoutEstimates,
};
use tracing::debug;

/// Progress service for user metrics
pub struct ProgressService;

impl ProgressService {
    /// Streak, level and this month's totals
    pub fn metrics(
        ctx: &AnalyticsContext,
        workouts: &[LoggedExercise],
        achievements: &[Achievement],
        estimates: &WorkoutEstimates,
    ) -> Result<UserProgressMetrics, ApiError> {
        validate_exercise_snapshot(workouts)?;

        let metrics = calculate_progress_metrics(ctx, workouts, achievements.len(), estimates);
        debug!(
            user_id = %ctx.user_id,
            today = %ctx.today,
            streak = metrics.streak_days,
            level = metrics.level,
            "Calculated progress metrics"
        );

        Ok(metrics)
    }

    /// Everything shown on the dashboard, in one pass over the snapshot
    pub fn dashboard(
        ctx: &AnalyticsContext,
        snapshot: DashboardSnapshot<'_>,
        estimates: &WorkoutEstimates,
    ) -> Result<Dashboard, ApiError> {
        validate_exercise_snapshot(snapshot.workouts)?;
        validate_plan_snapshot(snapshot.planned)?;
        for goal in snapshot.goals {
            validate_goal(goal).map_err(AnalyticsError::from)?;
        }

        let dashboard = build_dashboard(ctx, snapshot, estimates);
        debug!(
            user_id = %ctx.user_id,
            sessions = dashboard.recent_sessions.len(),
            active_goals = dashboard.active_goals.len(),
            "Built dashboard"
        );

        Ok(dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use gym_tracker_shared::{MuscleGroup, UserGoal};
    use uuid::Uuid;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn workout(date: NaiveDate) -> LoggedExercise {
        LoggedExercise {
            id: Uuid::new_v4(),
            exercise_id: None,
            name: "Squat".to_string(),
            muscle_group: MuscleGroup::Legs,
            date,
            sets: 5,
            reps: 5,
            weight_kg: 100.0,
            photo_url: None,
            notes: None,
        }
    }

    #[test]
    fn test_metrics_for_recent_history() {
        let ctx = AnalyticsContext::new(Uuid::new_v4(), today());
        let workouts = vec![
            workout(today()),
            workout(today() - Duration::days(1)),
            workout(today() - Duration::days(20)), // previous month
        ];

        let metrics =
            ProgressService::metrics(&ctx, &workouts, &[], &WorkoutEstimates::default()).unwrap();

        assert_eq!(metrics.streak_days, 2);
        assert_eq!(metrics.total_xp, 300);
        assert_eq!(metrics.total_workouts_this_month, 2);
        assert_eq!(metrics.total_time_this_month, 90);
        assert_eq!(metrics.calories_burned_estimate, 600);
    }

    #[test]
    fn test_dashboard_rejects_invalid_goal() {
        let ctx = AnalyticsContext::new(Uuid::new_v4(), today());
        let goals = vec![UserGoal {
            id: Uuid::new_v4(),
            title: "  ".to_string(),
            description: String::new(),
            target_value: 10.0,
            current_value: 0.0,
            unit: "kg".to_string(),
            deadline: today(),
            completed: false,
        }];
        let snapshot = DashboardSnapshot {
            workouts: &[],
            achievements: &[],
            goals: &goals,
            planned: &[],
        };

        let err = ProgressService::dashboard(&ctx, snapshot, &WorkoutEstimates::default())
            .unwrap_err();

        match err {
            ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("title")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

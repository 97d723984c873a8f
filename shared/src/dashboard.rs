//! Dashboard summary combining every progress view

use crate::achievements::achievements_remaining;
use crate::goals::{active_goals, goal_progress, GoalProgress};
use crate::history::{recent_sessions, WorkoutSession};
use crate::models::{Achievement, AnalyticsContext, LoggedExercise, PlannedWorkout, UserGoal};
use crate::planner::{next_workout, NextWorkout};
use crate::progress::{calculate_progress_metrics, UserProgressMetrics, WorkoutEstimates};
use serde::{Deserialize, Serialize};

/// How many achievements the dashboard lists
pub const RECENT_ACHIEVEMENT_LIMIT: usize = 3;

/// Everything a user's snapshot contributes to the dashboard
#[derive(Debug, Clone, Copy)]
pub struct DashboardSnapshot<'a> {
    pub workouts: &'a [LoggedExercise],
    pub achievements: &'a [Achievement],
    pub goals: &'a [UserGoal],
    pub planned: &'a [PlannedWorkout],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub metrics: UserProgressMetrics,
    pub recent_sessions: Vec<WorkoutSession>,
    pub next_workout: NextWorkout,
    pub next_goal: Option<GoalProgress>,
    pub active_goals: Vec<GoalProgress>,
    pub recent_achievements: Vec<Achievement>,
    pub achievements_remaining: usize,
}

pub fn build_dashboard(
    ctx: &AnalyticsContext,
    snapshot: DashboardSnapshot<'_>,
    estimates: &WorkoutEstimates,
) -> Dashboard {
    let metrics = calculate_progress_metrics(
        ctx,
        snapshot.workouts,
        snapshot.achievements.len(),
        estimates,
    );

    let active: Vec<GoalProgress> = active_goals(snapshot.goals)
        .into_iter()
        .map(goal_progress)
        .collect();

    let mut recent_achievements = snapshot.achievements.to_vec();
    recent_achievements.sort_by(|a, b| b.achieved_at.cmp(&a.achieved_at));
    recent_achievements.truncate(RECENT_ACHIEVEMENT_LIMIT);

    Dashboard {
        metrics,
        recent_sessions: recent_sessions(snapshot.workouts),
        next_workout: next_workout(ctx.today, snapshot.planned),
        next_goal: active.first().cloned(),
        active_goals: active,
        recent_achievements,
        achievements_remaining: achievements_remaining(snapshot.achievements.len()),
    }
}

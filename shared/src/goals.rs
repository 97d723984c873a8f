//! Goal progress

use crate::models::UserGoal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Progress toward a single goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub goal_id: Uuid,
    pub title: String,
    pub current_value: f64,
    pub target_value: f64,
    pub unit: String,
    /// Capped at 100; absent when the target is not positive
    pub progress_percent: Option<f64>,
}

/// Percentage of the target reached, capped at 100
pub fn goal_progress_percent(goal: &UserGoal) -> Option<f64> {
    if goal.target_value <= 0.0 || !goal.target_value.is_finite() {
        return None;
    }
    let percent = goal.current_value / goal.target_value * 100.0;
    percent.is_finite().then(|| percent.clamp(0.0, 100.0))
}

pub fn goal_progress(goal: &UserGoal) -> GoalProgress {
    GoalProgress {
        goal_id: goal.id,
        title: goal.title.clone(),
        current_value: goal.current_value,
        target_value: goal.target_value,
        unit: goal.unit.clone(),
        progress_percent: goal_progress_percent(goal),
    }
}

/// Incomplete goals ordered by deadline (stable for equal deadlines)
pub fn active_goals(goals: &[UserGoal]) -> Vec<&UserGoal> {
    let mut active: Vec<&UserGoal> = goals.iter().filter(|g| !g.completed).collect();
    active.sort_by_key(|g| g.deadline);
    active
}

/// The incomplete goal with the closest deadline
pub fn next_goal(goals: &[UserGoal]) -> Option<&UserGoal> {
    active_goals(goals).into_iter().next()
}

//! Progress metrics: streaks, levels and monthly totals

use crate::models::{AnalyticsContext, LoggedExercise};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A streak survives when the latest workout is at most this many days away from today
pub const STREAK_GRACE_DAYS: i64 = 2;

pub const XP_PER_WORKOUT: u64 = 100;
pub const XP_PER_ACHIEVEMENT: u64 = 500;
pub const XP_PER_LEVEL: u64 = 1000;

// ============================================================================
// Streak
// ============================================================================

/// Number of consecutive training days ending at the most recent workout
///
/// Dates may arrive in any order and may repeat; each calendar day is
/// counted once. Returns 0 when there are no workouts or when the most
/// recent one is more than [`STREAK_GRACE_DAYS`] away from `today`.
pub fn calculate_streak(today: NaiveDate, workout_dates: &[NaiveDate]) -> u32 {
    let mut dates = workout_dates.to_vec();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();

    let Some(&latest) = dates.first() else {
        return 0;
    };

    if (today - latest).num_days().abs() > STREAK_GRACE_DAYS {
        return 0;
    }

    let consecutive = dates
        .windows(2)
        .take_while(|pair| (pair[0] - pair[1]).num_days() <= 1)
        .count();

    (consecutive + 1) as u32
}

// ============================================================================
// Level and XP
// ============================================================================

/// Level reached from accumulated experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub total_xp: u64,
    pub level: u32,
    /// Experience earned inside the current level
    pub xp: u64,
    pub xp_to_next_level: u64,
}

/// Derive level and XP from workout and achievement counts
pub fn calculate_level_and_xp(workout_count: usize, achievement_count: usize) -> LevelProgress {
    let total_xp = workout_count as u64 * XP_PER_WORKOUT + achievement_count as u64 * XP_PER_ACHIEVEMENT;

    LevelProgress {
        total_xp,
        level: (total_xp / XP_PER_LEVEL) as u32 + 1,
        xp: total_xp % XP_PER_LEVEL,
        xp_to_next_level: XP_PER_LEVEL,
    }
}

// ============================================================================
// Monthly totals
// ============================================================================

/// Fixed per-workout estimates used for monthly time and calorie totals
///
/// These are flat estimates, not measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutEstimates {
    pub minutes_per_workout: u32,
    pub calories_per_workout: u32,
}

impl Default for WorkoutEstimates {
    fn default() -> Self {
        Self {
            minutes_per_workout: 45,
            calories_per_workout: 300,
        }
    }
}

/// Totals for the current calendar month
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlyStats {
    pub total_workouts: usize,
    /// Accumulated volume (weight × sets × reps)
    pub total_weight: f64,
    pub total_time_minutes: u64,
    pub calories_burned: u64,
}

/// First day of the month containing `date`
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Sum the workouts dated on or after the first day of `today`'s month
pub fn calculate_monthly_stats(
    today: NaiveDate,
    workouts: &[LoggedExercise],
    estimates: &WorkoutEstimates,
) -> MonthlyStats {
    let month_start = start_of_month(today);

    workouts
        .iter()
        .filter(|w| w.date >= month_start)
        .fold(MonthlyStats::default(), |mut acc, workout| {
            acc.total_workouts += 1;
            acc.total_weight += workout.volume();
            acc.total_time_minutes += u64::from(estimates.minutes_per_workout);
            acc.calories_burned += u64::from(estimates.calories_per_workout);
            acc
        })
}

// ============================================================================
// Combined metrics
// ============================================================================

/// Everything the dashboard shows about the user's progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProgressMetrics {
    pub streak_days: u32,
    pub level: u32,
    pub xp: u64,
    pub xp_to_next_level: u64,
    pub total_xp: u64,
    pub total_workouts_this_month: usize,
    pub total_weight_this_month: f64,
    pub total_time_this_month: u64,
    pub calories_burned_estimate: u64,
}

/// Compute progress metrics for the user in `ctx`
pub fn calculate_progress_metrics(
    ctx: &AnalyticsContext,
    workouts: &[LoggedExercise],
    achievement_count: usize,
    estimates: &WorkoutEstimates,
) -> UserProgressMetrics {
    let dates: Vec<NaiveDate> = workouts.iter().map(|w| w.date).collect();
    let streak_days = calculate_streak(ctx.today, &dates);
    let level = calculate_level_and_xp(workouts.len(), achievement_count);
    let monthly = calculate_monthly_stats(ctx.today, workouts, estimates);

    UserProgressMetrics {
        streak_days,
        level: level.level,
        xp: level.xp,
        xp_to_next_level: level.xp_to_next_level,
        total_xp: level.total_xp,
        total_workouts_this_month: monthly.total_workouts,
        total_weight_this_month: monthly.total_weight,
        total_time_this_month: monthly.total_time_minutes,
        calories_burned_estimate: monthly.calories_burned,
    }
}

//! Built-in achievements and unlock rules

use crate::models::{Achievement, LoggedExercise};
use serde::{Deserialize, Serialize};

/// Size of the achievement catalogue shown to users
pub const TOTAL_ACHIEVEMENTS: usize = 20;

/// Condition that unlocks an achievement
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnlockRule {
    /// At least this many logged workouts
    WorkoutCount(usize),
    /// Sum of logged weights (kg) reaches this value
    TotalWeightKg(f64),
}

impl UnlockRule {
    fn is_met(&self, workouts: &[LoggedExercise]) -> bool {
        match *self {
            UnlockRule::WorkoutCount(n) => workouts.len() >= n,
            UnlockRule::TotalWeightKg(kg) => {
                workouts.iter().map(|w| w.weight_kg).sum::<f64>() >= kg
            }
        }
    }
}

/// A built-in achievement
#[derive(Debug, Clone, Copy)]
pub struct AchievementDefinition {
    pub title: &'static str,
    pub description: &'static str,
    pub rule: UnlockRule,
}

pub const BUILT_IN_ACHIEVEMENTS: [AchievementDefinition; 3] = [
    AchievementDefinition {
        title: "First Workout",
        description: "You completed your first workout!",
        rule: UnlockRule::WorkoutCount(1),
    },
    AchievementDefinition {
        title: "Initial Dedication",
        description: "You completed 10 workouts!",
        rule: UnlockRule::WorkoutCount(10),
    },
    AchievementDefinition {
        title: "Emerging Strength",
        description: "You lifted more than 100 kg in total!",
        rule: UnlockRule::TotalWeightKg(100.0),
    },
];

/// An achievement that should be granted to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementUnlock {
    pub title: String,
    pub description: String,
}

/// Built-in achievements the user qualifies for but does not hold yet
///
/// Already unlocked achievements are matched by title, so evaluating the
/// same snapshot twice never grants anything twice.
pub fn evaluate_achievements(
    workouts: &[LoggedExercise],
    unlocked: &[Achievement],
) -> Vec<AchievementUnlock> {
    BUILT_IN_ACHIEVEMENTS
        .iter()
        .filter(|def| !unlocked.iter().any(|a| a.title.eq_ignore_ascii_case(def.title)))
        .filter(|def| def.rule.is_met(workouts))
        .map(|def| AchievementUnlock {
            title: def.title.to_string(),
            description: def.description.to_string(),
        })
        .collect()
}

/// How many catalogue achievements are still locked
pub fn achievements_remaining(unlocked_count: usize) -> usize {
    TOTAL_ACHIEVEMENTS.saturating_sub(unlocked_count)
}

//! Planned-vs-actual completion comparison

use crate::models::{ActualPerformance, LoggedExercise, PlannedWorkout};
use serde::{Deserialize, Serialize};

/// Outcome of comparing a planned workout with what was performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "percentage", rename_all = "snake_case")]
pub enum Completion {
    /// Nothing has been logged for the planned workout yet
    NotPerformed,
    /// Every planned target is zero, so no ratio can be formed
    Indeterminate,
    /// Average of the per-dimension ratios, in percent. Not clamped:
    /// values above 100 mean the plan was exceeded.
    Percentage(u32),
}

impl Completion {
    pub fn percentage(&self) -> Option<u32> {
        match self {
            Completion::Percentage(p) => Some(*p),
            _ => None,
        }
    }
}

/// A planned workout paired with its logged result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutComparison {
    pub planned: PlannedWorkout,
    pub actual: Option<ActualPerformance>,
    pub completion: Completion,
}

/// Compute how much of a planned workout was completed
///
/// A dimension whose planned target is zero (typically the weight of a
/// bodyweight exercise) is left out of the average.
pub fn compare_completion(
    planned: &PlannedWorkout,
    actual: Option<&ActualPerformance>,
) -> Completion {
    let Some(actual) = actual else {
        return Completion::NotPerformed;
    };

    let dimensions = [
        (f64::from(actual.sets), f64::from(planned.planned_sets)),
        (f64::from(actual.reps), f64::from(planned.planned_reps)),
        (actual.weight_kg, planned.planned_weight_kg),
    ];

    let ratios: Vec<f64> = dimensions
        .iter()
        .filter(|(_, target)| *target > 0.0)
        .map(|(done, target)| done / target * 100.0)
        .collect();

    if ratios.is_empty() {
        return Completion::Indeterminate;
    }

    let average = ratios.iter().sum::<f64>() / ratios.len() as f64;
    if !average.is_finite() || average < 0.0 {
        return Completion::Indeterminate;
    }

    Completion::Percentage(average.round() as u32)
}

/// Pair a planned workout with its result and compute completion
pub fn compare_workout(
    planned: &PlannedWorkout,
    actual: Option<ActualPerformance>,
) -> WorkoutComparison {
    WorkoutComparison {
        planned: planned.clone(),
        actual,
        completion: compare_completion(planned, actual.as_ref()),
    }
}

/// Find the logged exercise that fulfils a planned workout
///
/// Same date and same exercise: by catalog id when the log carries one,
/// otherwise by case-insensitive name. The first match wins.
pub fn find_actual<'a>(
    planned: &PlannedWorkout,
    logged: &'a [LoggedExercise],
) -> Option<&'a LoggedExercise> {
    logged.iter().find(|entry| {
        entry.date == planned.date
            && match entry.exercise_id {
                Some(id) => id == planned.exercise.id,
                None => entry
                    .name
                    .trim()
                    .eq_ignore_ascii_case(planned.exercise.name.trim()),
            }
    })
}

/// One comparison per planned workout, in input order
pub fn compare_planned(
    planned: &[PlannedWorkout],
    logged: &[LoggedExercise],
) -> Vec<WorkoutComparison> {
    planned
        .iter()
        .map(|p| compare_workout(p, find_actual(p, logged).map(LoggedExercise::performance)))
        .collect()
}

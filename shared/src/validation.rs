//! Input validation functions
//!
//! Snapshots are validated once when they enter the engine. The
//! calculators assume pre-validated input.

use crate::errors::AnalyticsError;
use crate::guide::CatalogExercise;
use crate::models::{ActualPerformance, LoggedExercise, PlannedWorkout, UserGoal};
use std::collections::HashSet;
use thiserror::Error;

pub const MAX_SETS: u32 = 100;
pub const MAX_REPS: u32 = 1000;
pub const MAX_WEIGHT_KG: f64 = 1000.0;
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_NOTES_LEN: usize = 1000;

/// Validate the number of sets of a logged exercise
pub fn validate_sets(sets: u32) -> Result<(), String> {
    if sets == 0 {
        return Err("must be at least 1".to_string());
    }
    validate_set_target(sets)
}

/// Validate a planned set target (zero allowed)
pub fn validate_set_target(sets: u32) -> Result<(), String> {
    if sets > MAX_SETS {
        return Err(format!("must be at most {}", MAX_SETS));
    }
    Ok(())
}

/// Validate the number of reps of a logged exercise
pub fn validate_reps(reps: u32) -> Result<(), String> {
    if reps == 0 {
        return Err("must be at least 1".to_string());
    }
    validate_rep_target(reps)
}

/// Validate a planned rep target (zero allowed)
pub fn validate_rep_target(reps: u32) -> Result<(), String> {
    if reps > MAX_REPS {
        return Err(format!("must be at most {}", MAX_REPS));
    }
    Ok(())
}

/// Validate a lifted weight (in kg); zero is a bodyweight exercise
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("must be a valid number".to_string());
    }
    if weight_kg < 0.0 {
        return Err("cannot be negative".to_string());
    }
    if weight_kg > MAX_WEIGHT_KG {
        return Err(format!("must be at most {} kg", MAX_WEIGHT_KG));
    }
    Ok(())
}

/// Validate an exercise or goal name
pub fn validate_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("cannot be empty".to_string());
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(format!("must be at most {} characters", MAX_NAME_LEN));
    }
    Ok(())
}

/// Validate free-text notes
pub fn validate_notes(notes: Option<&str>) -> Result<(), String> {
    match notes {
        Some(n) if n.chars().count() > MAX_NOTES_LEN => {
            Err(format!("must be at most {} characters", MAX_NOTES_LEN))
        }
        _ => Ok(()),
    }
}

fn validate_finite(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("must be a valid number".to_string());
    }
    Ok(())
}

fn check(field: &str, result: Result<(), String>) -> Result<(), ValidationError> {
    result.map_err(|message| ValidationError::new(field, &message))
}

/// Validate a logged exercise entry
pub fn validate_logged_exercise(exercise: &LoggedExercise) -> Result<(), ValidationError> {
    check("name", validate_name(&exercise.name))?;
    check("sets", validate_sets(exercise.sets))?;
    check("reps", validate_reps(exercise.reps))?;
    check("weight_kg", validate_weight_kg(exercise.weight_kg))?;
    check("notes", validate_notes(exercise.notes.as_deref()))?;
    Ok(())
}

/// Validate a planned workout; zero targets are accepted
pub fn validate_planned_workout(planned: &PlannedWorkout) -> Result<(), ValidationError> {
    check("exercise_name", validate_name(&planned.exercise.name))?;
    check("planned_sets", validate_set_target(planned.planned_sets))?;
    check("planned_reps", validate_rep_target(planned.planned_reps))?;
    check("planned_weight_kg", validate_weight_kg(planned.planned_weight_kg))?;
    check("notes", validate_notes(planned.notes.as_deref()))?;
    Ok(())
}

/// Validate what was actually performed
pub fn validate_actual_performance(actual: &ActualPerformance) -> Result<(), ValidationError> {
    check("sets", validate_set_target(actual.sets))?;
    check("reps", validate_rep_target(actual.reps))?;
    check("weight_kg", validate_weight_kg(actual.weight_kg))?;
    Ok(())
}

/// Validate a user goal
pub fn validate_goal(goal: &UserGoal) -> Result<(), ValidationError> {
    check("title", validate_name(&goal.title))?;
    check("target_value", validate_finite(goal.target_value))?;
    check("current_value", validate_finite(goal.current_value))?;
    Ok(())
}

/// Validate every logged exercise of a snapshot and reject duplicate ids
pub fn validate_exercise_snapshot(exercises: &[LoggedExercise]) -> Result<(), AnalyticsError> {
    let mut seen = HashSet::with_capacity(exercises.len());
    for exercise in exercises {
        validate_logged_exercise(exercise)?;
        if !seen.insert(exercise.id) {
            return Err(AnalyticsError::DuplicateId {
                kind: "exercise",
                id: exercise.id,
            });
        }
    }
    Ok(())
}

/// Validate every planned workout of a snapshot and reject duplicate ids
pub fn validate_plan_snapshot(planned: &[PlannedWorkout]) -> Result<(), AnalyticsError> {
    let mut seen = HashSet::with_capacity(planned.len());
    for workout in planned {
        validate_planned_workout(workout)?;
        if !seen.insert(workout.id) {
            return Err(AnalyticsError::DuplicateId {
                kind: "planned workout",
                id: workout.id,
            });
        }
    }
    Ok(())
}

/// Validate the exercise catalog of the muscle guide and reject duplicate ids
pub fn validate_catalog(catalog: &[CatalogExercise]) -> Result<(), AnalyticsError> {
    let mut seen = HashSet::with_capacity(catalog.len());
    for exercise in catalog {
        check("name", validate_name(&exercise.name))?;
        if !seen.insert(exercise.id) {
            return Err(AnalyticsError::DuplicateId {
                kind: "catalog exercise",
                id: exercise.id,
            });
        }
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "name" => "Exercise Name",
        "exercise_name" => "Exercise",
        "sets" => "Sets",
        "reps" => "Reps",
        "weight_kg" => "Weight",
        "planned_sets" => "Planned Sets",
        "planned_reps" => "Planned Reps",
        "planned_weight_kg" => "Planned Weight",
        "notes" => "Notes",
        "title" => "Goal Title",
        "target_value" => "Target",
        "current_value" => "Current Value",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{display_label}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExerciseRef, MuscleGroup};
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn exercise() -> LoggedExercise {
        LoggedExercise {
            id: Uuid::new_v4(),
            exercise_id: None,
            name: "Squat".to_string(),
            muscle_group: MuscleGroup::Legs,
            date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            sets: 5,
            reps: 5,
            weight_kg: 100.0,
            photo_url: None,
            notes: None,
        }
    }

    fn planned() -> PlannedWorkout {
        PlannedWorkout {
            id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            exercise: ExerciseRef {
                id: Uuid::new_v4(),
                name: "Push-up".to_string(),
                muscle_group: MuscleGroup::Chest,
            },
            planned_sets: 3,
            planned_reps: 12,
            planned_weight_kg: 0.0,
            notes: None,
            completed: false,
        }
    }

    #[test]
    fn test_validate_sets_and_reps() {
        assert!(validate_sets(1).is_ok());
        assert!(validate_sets(100).is_ok());
        assert!(validate_sets(0).is_err());
        assert!(validate_sets(101).is_err());
        assert!(validate_reps(12).is_ok());
        assert!(validate_reps(0).is_err());
        assert!(validate_rep_target(0).is_ok());
        assert!(validate_set_target(0).is_ok());
    }

    #[test]
    fn test_validate_weight_kg() {
        assert!(validate_weight_kg(0.0).is_ok());
        assert!(validate_weight_kg(82.5).is_ok());
        assert!(validate_weight_kg(-1.0).is_err());
        assert!(validate_weight_kg(1000.5).is_err());
        assert!(validate_weight_kg(f64::NAN).is_err());
        assert!(validate_weight_kg(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Deadlift").is_ok());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"a".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_logged_exercise_reports_field() {
        assert!(validate_logged_exercise(&exercise()).is_ok());

        let mut bad = exercise();
        bad.reps = 0;
        let err = validate_logged_exercise(&bad).unwrap_err();
        assert_eq!(err.field, "reps");
        assert_eq!(err.user_message(), "Reps: must be at least 1");
    }

    #[test]
    fn test_planned_workout_accepts_zero_targets() {
        let mut workout = planned();
        workout.planned_sets = 0;
        assert!(validate_planned_workout(&workout).is_ok());

        workout.planned_weight_kg = -5.0;
        let err = validate_planned_workout(&workout).unwrap_err();
        assert_eq!(err.display_label, "Planned Weight");
    }

    #[test]
    fn test_validate_goal() {
        let goal = UserGoal {
            id: Uuid::new_v4(),
            title: "Bench 100kg".to_string(),
            description: String::new(),
            target_value: 100.0,
            current_value: f64::NAN,
            unit: "kg".to_string(),
            deadline: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            completed: false,
        };
        assert_eq!(validate_goal(&goal).unwrap_err().field, "current_value");
    }

    #[test]
    fn test_snapshot_rejects_duplicate_ids() {
        let first = exercise();
        let mut second = exercise();
        second.id = first.id;

        let err = validate_exercise_snapshot(&[first, second]).unwrap_err();
        assert!(matches!(err, AnalyticsError::DuplicateId { kind: "exercise", .. }));
    }

    #[test]
    fn test_plan_snapshot_propagates_validation() {
        let mut workout = planned();
        workout.planned_reps = 5000;
        let err = validate_plan_snapshot(&[workout]).unwrap_err();
        assert_eq!(err.field(), Some("planned_reps"));
    }

    #[test]
    fn test_catalog_rejects_blank_names_and_duplicates() {
        use crate::guide::Difficulty;

        let entry = |name: &str| CatalogExercise {
            id: Uuid::new_v4(),
            name: name.to_string(),
            muscle_group: MuscleGroup::Back,
            difficulty: Difficulty::Beginner,
            description: String::new(),
            instructions: Vec::new(),
            muscles: Vec::new(),
            tips: Vec::new(),
            duration: None,
            equipment: Vec::new(),
            image_url: None,
        };

        assert!(validate_catalog(&[entry("Remo"), entry("Dominadas")]).is_ok());
        assert_eq!(validate_catalog(&[entry("  ")]).unwrap_err().field(), Some("name"));

        let first = entry("Remo");
        let copy = first.clone();
        let err = validate_catalog(&[first, copy]).unwrap_err();
        assert!(matches!(err, AnalyticsError::DuplicateId { kind: "catalog exercise", .. }));
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(get_field_display_label("weight_kg"), "Weight");
        assert_eq!(get_field_display_label("unknown_field"), "unknown_field");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_weight_range(weight in 0.0f64..=1000.0) {
            prop_assert!(validate_weight_kg(weight).is_ok());
        }

        #[test]
        fn prop_negative_weight_rejected(weight in -1000.0f64..-0.001) {
            prop_assert!(validate_weight_kg(weight).is_err());
        }

        #[test]
        fn prop_valid_sets_range(sets in 1u32..=100) {
            prop_assert!(validate_sets(sets).is_ok());
        }
    }
}

//! Fixtures shared by the unit tests of this crate

use crate::models::{ExerciseRef, LoggedExercise, MuscleGroup, PlannedWorkout};
use chrono::NaiveDate;
use fake::faker::lorem::en::Word;
use fake::Fake;
use uuid::Uuid;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn logged(
    group: MuscleGroup,
    date: NaiveDate,
    sets: u32,
    reps: u32,
    weight_kg: f64,
) -> LoggedExercise {
    LoggedExercise {
        id: Uuid::new_v4(),
        exercise_id: None,
        name: Word().fake(),
        muscle_group: group,
        date,
        sets,
        reps,
        weight_kg,
        photo_url: None,
        notes: None,
    }
}

/// One logged exercise per entry in `groups`, all on the same day
pub fn logged_groups(groups: &[MuscleGroup]) -> Vec<LoggedExercise> {
    groups
        .iter()
        .map(|g| logged(*g, day(2024, 6, 1), 3, 10, 20.0))
        .collect()
}

pub fn planned(date: NaiveDate, sets: u32, reps: u32, weight_kg: f64) -> PlannedWorkout {
    PlannedWorkout {
        id: Uuid::new_v4(),
        date,
        exercise: ExerciseRef {
            id: Uuid::new_v4(),
            name: "Bench press".to_string(),
            muscle_group: MuscleGroup::Chest,
        },
        planned_sets: sets,
        planned_reps: reps,
        planned_weight_kg: weight_kg,
        notes: None,
        completed: false,
    }
}

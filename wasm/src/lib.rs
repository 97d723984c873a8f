//! Gym Tracker WASM Module
//!
//! WebAssembly bindings so the browser can run the analytics engine
//! locally. Collections cross the boundary as JSON strings using the
//! same field names as the HTTP API.

use chrono::NaiveDate;
use gym_tracker_shared::guide::{catalog_muscle_groups, parse_difficulty_filter};
use gym_tracker_shared::types::GuideResponse;
use gym_tracker_shared::validation::{
    validate_actual_performance, validate_catalog, validate_exercise_snapshot,
    validate_planned_workout,
};
use gym_tracker_shared::{
    aggregate_by_muscle_group, calculate_level_and_xp, calculate_monthly_stats, calculate_streak,
    comparison::compare_completion, filter_guide, suggest_next_training, ActualPerformance,
    CatalogExercise, ExerciseRef, LoggedExercise, MuscleGroup, PlannedWorkout, WorkoutEstimates,
};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;
use wasm_bindgen::prelude::*;

fn parse<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {}: {}", what, e))
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{}': {}", value, e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

/// Deserialize a logged-exercise snapshot and reject invalid entries
fn parse_exercises(json: &str, what: &str) -> Result<Vec<LoggedExercise>, String> {
    let exercises: Vec<LoggedExercise> = parse(json, what)?;
    validate_exercise_snapshot(&exercises).map_err(|e| e.to_string())?;
    Ok(exercises)
}

fn stats_json(exercises_json: &str) -> Result<String, String> {
    let exercises = parse_exercises(exercises_json, "exercises")?;
    to_json(&aggregate_by_muscle_group(&exercises))
}

fn suggestions_json(exercises_json: &str) -> Result<String, String> {
    let exercises = parse_exercises(exercises_json, "exercises")?;
    let stats = aggregate_by_muscle_group(&exercises);
    to_json(&suggest_next_training(&stats))
}

fn streak(today: &str, dates_json: &str) -> Result<u32, String> {
    let today = parse_date(today)?;
    let dates: Vec<NaiveDate> = parse(dates_json, "dates")?;
    Ok(calculate_streak(today, &dates))
}

fn monthly_json(
    today: &str,
    workouts_json: &str,
    minutes_per_workout: Option<u32>,
    calories_per_workout: Option<u32>,
) -> Result<String, String> {
    let today = parse_date(today)?;
    let workouts = parse_exercises(workouts_json, "workouts")?;
    let defaults = WorkoutEstimates::default();
    let estimates = WorkoutEstimates {
        minutes_per_workout: minutes_per_workout.unwrap_or(defaults.minutes_per_workout),
        calories_per_workout: calories_per_workout.unwrap_or(defaults.calories_per_workout),
    };
    to_json(&calculate_monthly_stats(today, &workouts, &estimates))
}

fn guide_json(
    catalog_json: &str,
    muscle_group: Option<String>,
    search: &str,
    difficulty: &str,
) -> Result<String, String> {
    let catalog: Vec<CatalogExercise> = parse(catalog_json, "catalog")?;
    validate_catalog(&catalog).map_err(|e| e.to_string())?;
    let group = muscle_group
        .as_deref()
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::parse::<MuscleGroup>)
        .transpose()?;
    let difficulty = parse_difficulty_filter(difficulty)?;

    let exercises = filter_guide(&catalog, group, search, difficulty)
        .into_iter()
        .cloned()
        .collect();
    to_json(&GuideResponse {
        muscle_groups: catalog_muscle_groups(&catalog),
        exercises,
    })
}

fn completion(planned: &PlannedWorkout, actual: &ActualPerformance) -> Option<u32> {
    validate_planned_workout(planned).ok()?;
    validate_actual_performance(actual).ok()?;
    compare_completion(planned, Some(actual)).percentage()
}

/// Muscle group stats for a JSON array of logged exercises
#[wasm_bindgen]
pub fn muscle_group_stats(exercises_json: &str) -> Result<String, JsValue> {
    stats_json(exercises_json).map_err(|e| JsValue::from_str(&e))
}

/// Up to three training suggestions for a JSON array of logged exercises
#[wasm_bindgen]
pub fn training_suggestions(exercises_json: &str) -> Result<String, JsValue> {
    suggestions_json(exercises_json).map_err(|e| JsValue::from_str(&e))
}

/// Streak length for a JSON array of `YYYY-MM-DD` dates
#[wasm_bindgen]
pub fn workout_streak(today: &str, dates_json: &str) -> Result<u32, JsValue> {
    streak(today, dates_json).map_err(|e| JsValue::from_str(&e))
}

/// Level and XP as JSON
#[wasm_bindgen]
pub fn level_and_xp(workout_count: usize, achievement_count: usize) -> Result<String, JsValue> {
    to_json(&calculate_level_and_xp(workout_count, achievement_count))
        .map_err(|e| JsValue::from_str(&e))
}

/// This month's totals as JSON
///
/// Omitted per-workout estimates fall back to 45 minutes and 300 kcal.
#[wasm_bindgen]
pub fn monthly_stats(
    today: &str,
    workouts_json: &str,
    minutes_per_workout: Option<u32>,
    calories_per_workout: Option<u32>,
) -> Result<String, JsValue> {
    monthly_json(
        today,
        workouts_json,
        minutes_per_workout,
        calories_per_workout,
    )
    .map_err(|e| JsValue::from_str(&e))
}

/// Muscle guide entries for a JSON catalog
///
/// `difficulty` accepts `Todos` for any difficulty; nothing is listed
/// without a muscle group.
#[wasm_bindgen]
pub fn exercise_guide(
    catalog_json: &str,
    muscle_group: Option<String>,
    search: &str,
    difficulty: &str,
) -> Result<String, JsValue> {
    guide_json(catalog_json, muscle_group, search, difficulty).map_err(|e| JsValue::from_str(&e))
}

/// Completion percentage of a planned workout
///
/// Returns `undefined` when every planned target is zero or when a
/// target or actual value is out of range.
#[wasm_bindgen]
pub fn completion_percentage(
    planned_sets: u32,
    planned_reps: u32,
    planned_weight_kg: f64,
    actual_sets: u32,
    actual_reps: u32,
    actual_weight_kg: f64,
) -> Option<u32> {
    let planned = PlannedWorkout {
        id: Uuid::nil(),
        date: NaiveDate::MIN,
        exercise: ExerciseRef {
            id: Uuid::nil(),
            name: "Planned workout".to_string(),
            muscle_group: MuscleGroup::ALL[0],
        },
        planned_sets,
        planned_reps,
        planned_weight_kg,
        notes: None,
        completed: false,
    };
    let actual = ActualPerformance {
        sets: actual_sets,
        reps: actual_reps,
        weight_kg: actual_weight_kg,
    };

    completion(&planned, &actual)
}

//! Data models for the Gym Tracker application

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Primary muscle group targeted by an exercise
///
/// The set is closed and its declaration order is the canonical
/// enumeration order used for every deterministic tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MuscleGroup {
    #[serde(rename = "Pecho")]
    Chest,
    #[serde(rename = "Espalda")]
    Back,
    #[serde(rename = "Hombros")]
    Shoulders,
    #[serde(rename = "Bíceps", alias = "Biceps")]
    Biceps,
    #[serde(rename = "Tríceps", alias = "Triceps")]
    Triceps,
    #[serde(rename = "Piernas")]
    Legs,
    #[serde(rename = "Abdominales")]
    Abs,
    #[serde(rename = "Cardio")]
    Cardio,
}

impl MuscleGroup {
    /// Every muscle group, in enumeration order
    pub const ALL: [MuscleGroup; 8] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Shoulders,
        MuscleGroup::Biceps,
        MuscleGroup::Triceps,
        MuscleGroup::Legs,
        MuscleGroup::Abs,
        MuscleGroup::Cardio,
    ];

    /// Canonical label, as stored by the exercise catalog
    pub fn label(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Pecho",
            MuscleGroup::Back => "Espalda",
            MuscleGroup::Shoulders => "Hombros",
            MuscleGroup::Biceps => "Bíceps",
            MuscleGroup::Triceps => "Tríceps",
            MuscleGroup::Legs => "Piernas",
            MuscleGroup::Abs => "Abdominales",
            MuscleGroup::Cardio => "Cardio",
        }
    }

    /// English name used in generated descriptions
    pub fn display_name(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::Cardio => "Cardio",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MuscleGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let group = match normalized.as_str() {
            "pecho" | "chest" => MuscleGroup::Chest,
            "espalda" | "back" => MuscleGroup::Back,
            "hombros" | "shoulders" => MuscleGroup::Shoulders,
            "bíceps" | "biceps" => MuscleGroup::Biceps,
            "tríceps" | "triceps" => MuscleGroup::Triceps,
            "piernas" | "legs" => MuscleGroup::Legs,
            "abdominales" | "abs" => MuscleGroup::Abs,
            "cardio" => MuscleGroup::Cardio,
            _ => {
                let labels: Vec<&str> = MuscleGroup::ALL.iter().map(|g| g.label()).collect();
                return Err(format!(
                    "Unknown muscle group '{}'. Must be one of: {}",
                    s,
                    labels.join(", ")
                ));
            }
        };
        Ok(group)
    }
}

/// A single exercise entry logged by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedExercise {
    pub id: Uuid,
    /// Catalog exercise this entry refers to, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<Uuid>,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub date: NaiveDate,
    pub sets: u32,
    pub reps: u32,
    pub weight_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LoggedExercise {
    /// Training volume: weight × sets × reps
    pub fn volume(&self) -> f64 {
        self.weight_kg * f64::from(self.sets) * f64::from(self.reps)
    }

    /// What was actually performed, for planner comparisons
    pub fn performance(&self) -> ActualPerformance {
        ActualPerformance {
            sets: self.sets,
            reps: self.reps,
            weight_kg: self.weight_kg,
        }
    }
}

/// Catalog exercise referenced by a planned workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRef {
    pub id: Uuid,
    pub name: String,
    pub muscle_group: MuscleGroup,
}

/// A workout scheduled through the planner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedWorkout {
    pub id: Uuid,
    pub date: NaiveDate,
    pub exercise: ExerciseRef,
    pub planned_sets: u32,
    pub planned_reps: u32,
    pub planned_weight_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Sets, reps and weight actually performed for a planned workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActualPerformance {
    pub sets: u32,
    pub reps: u32,
    pub weight_kg: f64,
}

/// An achievement the user has already unlocked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub achieved_at: DateTime<Utc>,
}

/// A user-defined goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserGoal {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub target_value: f64,
    pub current_value: f64,
    pub unit: String,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub completed: bool,
}

/// Who the calculation is for and which calendar day counts as "today"
///
/// Passed explicitly into every calculator that depends on the session
/// or the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsContext {
    pub user_id: Uuid,
    pub today: NaiveDate,
}

impl AnalyticsContext {
    pub fn new(user_id: Uuid, today: NaiveDate) -> Self {
        Self { user_id, today }
    }
}

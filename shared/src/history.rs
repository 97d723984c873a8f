//! Recent workout sessions, grouped by day

use crate::models::{LoggedExercise, MuscleGroup};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How many of the latest logged exercises are considered
pub const RECENT_EXERCISE_WINDOW: usize = 15;

/// How many sessions are returned
pub const RECENT_SESSION_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionExercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight_kg: f64,
}

/// All exercises logged on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub date: NaiveDate,
    /// Muscle group of the first exercise of the day
    pub muscle_group: MuscleGroup,
    pub exercise_count: usize,
    pub exercises: Vec<SessionExercise>,
}

/// Most recent sessions, newest first
pub fn recent_sessions(exercises: &[LoggedExercise]) -> Vec<WorkoutSession> {
    let mut latest: Vec<&LoggedExercise> = exercises.iter().collect();
    latest.sort_by(|a, b| b.date.cmp(&a.date));
    latest.truncate(RECENT_EXERCISE_WINDOW);

    let mut sessions: Vec<WorkoutSession> = Vec::new();
    for exercise in latest {
        let entry = SessionExercise {
            name: exercise.name.clone(),
            sets: exercise.sets,
            reps: exercise.reps,
            weight_kg: exercise.weight_kg,
        };
        match sessions.last_mut() {
            Some(session) if session.date == exercise.date => {
                session.exercise_count += 1;
                session.exercises.push(entry);
            }
            _ => sessions.push(WorkoutSession {
                date: exercise.date,
                muscle_group: exercise.muscle_group,
                exercise_count: 1,
                exercises: vec![entry],
            }),
        }
    }

    sessions.truncate(RECENT_SESSION_LIMIT);
    sessions
}

//! Weekly planner helpers

use crate::models::{MuscleGroup, PlannedWorkout};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Planned workouts for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedDay {
    pub date: NaiveDate,
    pub workouts: Vec<PlannedWorkout>,
}

/// What the user should train next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextWorkout {
    pub date: NaiveDate,
    pub muscle_group: MuscleGroup,
    /// False when no plan exists and this is the default proposal
    pub planned: bool,
}

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_from_monday = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(days_from_monday)
}

/// The seven days of the week containing `selected`, with their plans
pub fn plan_week(selected: NaiveDate, planned: &[PlannedWorkout]) -> Vec<PlannedDay> {
    let start = week_start(selected);
    (0..7)
        .map(|offset| {
            let date = start + Duration::days(offset);
            PlannedDay {
                date,
                workouts: planned.iter().filter(|p| p.date == date).cloned().collect(),
            }
        })
        .collect()
}

/// Earliest planned workout dated today or later
///
/// Without one, proposes tomorrow with the first group of the enumeration.
pub fn next_workout(today: NaiveDate, planned: &[PlannedWorkout]) -> NextWorkout {
    planned
        .iter()
        .filter(|p| p.date >= today)
        .min_by_key(|p| p.date)
        .map(|p| NextWorkout {
            date: p.date,
            muscle_group: p.exercise.muscle_group,
            planned: true,
        })
        .unwrap_or(NextWorkout {
            date: today + Duration::days(1),
            muscle_group: MuscleGroup::ALL[0],
            planned: false,
        })
}

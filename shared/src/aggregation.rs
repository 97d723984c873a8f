//! Per-muscle-group aggregation of logged exercises

use crate::models::{LoggedExercise, MuscleGroup};
use serde::{Deserialize, Serialize};

/// How often a muscle group was trained and how much volume it received
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleGroupStat {
    pub muscle_group: MuscleGroup,
    pub count: usize,
    /// Accumulated volume (weight × sets × reps)
    pub total_weight: f64,
}

/// Group logged exercises by muscle group
///
/// Output follows the order in which each group first appears in the
/// input. Input is assumed to be validated.
pub fn aggregate_by_muscle_group(exercises: &[LoggedExercise]) -> Vec<MuscleGroupStat> {
    let mut stats: Vec<MuscleGroupStat> = Vec::with_capacity(MuscleGroup::ALL.len());

    for exercise in exercises {
        let volume = exercise.volume();
        match stats
            .iter_mut()
            .find(|s| s.muscle_group == exercise.muscle_group)
        {
            Some(stat) => {
                stat.count += 1;
                stat.total_weight += volume;
            }
            None => stats.push(MuscleGroupStat {
                muscle_group: exercise.muscle_group,
                count: 1,
                total_weight: volume,
            }),
        }
    }

    stats
}

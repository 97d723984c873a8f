//! Balance-based training suggestions
//!
//! Suggestions are generated in three passes over the per-group counts
//! produced by [`aggregate_by_muscle_group`](crate::aggregation::aggregate_by_muscle_group):
//!
//! 1. Groups of the closed enumeration that were never trained
//! 2. The two least-trained groups
//! 3. Complementary pairs whose counts drift apart by more than
//!    [`IMBALANCE_THRESHOLD`]
//!
//! The result is capped at [`MAX_SUGGESTIONS`], keeping generation order.

use crate::aggregation::MuscleGroupStat;
use crate::models::MuscleGroup;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum number of suggestions returned per analysis
pub const MAX_SUGGESTIONS: usize = 3;

/// Number of least-trained groups considered by the low-frequency pass
pub const LOW_FREQUENCY_CANDIDATES: usize = 2;

/// Count difference above which a complementary pair is imbalanced
pub const IMBALANCE_THRESHOLD: usize = 2;

/// Muscle groups that should be trained in similar proportion
pub const COMPLEMENTARY_PAIRS: [(MuscleGroup, MuscleGroup); 3] = [
    (MuscleGroup::Chest, MuscleGroup::Back),
    (MuscleGroup::Biceps, MuscleGroup::Triceps),
    (MuscleGroup::Shoulders, MuscleGroup::Triceps),
];

/// Why a muscle group is being suggested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionReason {
    Unworked,
    LowFrequency,
    Imbalance,
}

impl SuggestionReason {
    /// Short headline shown with the suggestion
    pub fn title(&self) -> &'static str {
        match self {
            SuggestionReason::Unworked => "Muscle group not trained",
            SuggestionReason::LowFrequency => "Muscle group rarely trained",
            SuggestionReason::Imbalance => "Muscle imbalance",
        }
    }
}

/// A recommended focus for the next training session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub muscle_group: MuscleGroup,
    pub reason: SuggestionReason,
    pub description: String,
}

/// Suggest up to [`MAX_SUGGESTIONS`] muscle groups for the next session
pub fn suggest_next_training(stats: &[MuscleGroupStat]) -> Vec<Suggestion> {
    let worked = worked_counts(stats);
    let mut suggestions = Vec::with_capacity(MAX_SUGGESTIONS);

    for group in MuscleGroup::ALL {
        if !worked.contains_key(&group) {
            suggestions.push(unworked(group));
        }
    }

    if suggestions.len() < MAX_SUGGESTIONS {
        // BTreeMap iterates in enumeration order and the sort is stable,
        // so equal counts keep that order.
        let mut by_count: Vec<(MuscleGroup, usize)> =
            worked.iter().map(|(g, c)| (*g, *c)).collect();
        by_count.sort_by_key(|(_, count)| *count);

        for (group, count) in by_count.into_iter().take(LOW_FREQUENCY_CANDIDATES) {
            suggestions.push(low_frequency(group, count));
        }
    }

    if suggestions.len() < MAX_SUGGESTIONS {
        for (a, b) in COMPLEMENTARY_PAIRS {
            let count_a = worked.get(&a).copied().unwrap_or(0);
            let count_b = worked.get(&b).copied().unwrap_or(0);
            if count_a.abs_diff(count_b) > IMBALANCE_THRESHOLD {
                let lesser = if count_a < count_b { a } else { b };
                suggestions.push(imbalance(lesser, a, b));
            }
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

fn worked_counts(stats: &[MuscleGroupStat]) -> BTreeMap<MuscleGroup, usize> {
    let mut counts = BTreeMap::new();
    for stat in stats {
        *counts.entry(stat.muscle_group).or_insert(0) += stat.count;
    }
    counts
}

fn unworked(group: MuscleGroup) -> Suggestion {
    Suggestion {
        muscle_group: group,
        reason: SuggestionReason::Unworked,
        description: format!(
            "You have not logged any exercises for {}. A balanced routine trains every muscle group for complete development.",
            group.display_name().to_lowercase()
        ),
    }
}

fn low_frequency(group: MuscleGroup, count: usize) -> Suggestion {
    let times = if count == 1 { "time" } else { "times" };
    Suggestion {
        muscle_group: group,
        reason: SuggestionReason::LowFrequency,
        description: format!(
            "You have trained {} only {} {}. Training it more often can improve your results.",
            group.display_name().to_lowercase(),
            count,
            times
        ),
    }
}

fn imbalance(lesser: MuscleGroup, a: MuscleGroup, b: MuscleGroup) -> Suggestion {
    Suggestion {
        muscle_group: lesser,
        reason: SuggestionReason::Imbalance,
        description: format!(
            "There is an imbalance between {} and {}. Evening out these groups helps prevent injuries and keeps good posture.",
            a.display_name().to_lowercase(),
            b.display_name().to_lowercase()
        ),
    }
}

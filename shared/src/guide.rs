//! Exercise guide
//!
//! Filters the exercise catalog for the muscle guide, which is where every
//! training suggestion sends the user. Nothing is listed until a muscle
//! group is selected.

use crate::models::MuscleGroup;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Label of the "no difficulty filter" option
pub const ALL_DIFFICULTIES: &str = "Todos";

/// How demanding a catalog exercise is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "Principiante")]
    Beginner,
    #[serde(rename = "Intermedio")]
    Intermediate,
    #[serde(rename = "Avanzado")]
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Principiante",
            Difficulty::Intermediate => "Intermedio",
            Difficulty::Advanced => "Avanzado",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "principiante" | "beginner" => Ok(Difficulty::Beginner),
            "intermedio" | "intermediate" => Ok(Difficulty::Intermediate),
            "avanzado" | "advanced" => Ok(Difficulty::Advanced),
            _ => Err(format!(
                "Unknown difficulty '{}'. Must be one of: Principiante, Intermedio, Avanzado, {}",
                s, ALL_DIFFICULTIES
            )),
        }
    }
}

/// Parse a difficulty filter, where `Todos` (or blank) means any difficulty
pub fn parse_difficulty_filter(value: &str) -> Result<Option<Difficulty>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_DIFFICULTIES) {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

/// Serde adapter for an optional difficulty filter that accepts `Todos`
pub fn deserialize_difficulty_filter<'de, D>(deserializer: D) -> Result<Option<Difficulty>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_difficulty_filter(&raw).map_err(de::Error::custom),
        None => Ok(None),
    }
}

/// An exercise of the catalog shown by the muscle guide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogExercise {
    pub id: Uuid,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub muscles: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Catalog entries for the selected group, in catalog order
///
/// `search` is matched case-insensitively anywhere in the name; an empty
/// search matches everything. Without a selected group the guide is empty.
pub fn filter_guide<'a>(
    catalog: &'a [CatalogExercise],
    group: Option<MuscleGroup>,
    search: &str,
    difficulty: Option<Difficulty>,
) -> Vec<&'a CatalogExercise> {
    let Some(group) = group else {
        return Vec::new();
    };
    let needle = search.to_lowercase();

    catalog
        .iter()
        .filter(|exercise| exercise.muscle_group == group)
        .filter(|exercise| exercise.name.to_lowercase().contains(&needle))
        .filter(|exercise| difficulty.map_or(true, |d| exercise.difficulty == d))
        .collect()
}

/// Distinct muscle groups present in the catalog, in enumeration order
pub fn catalog_muscle_groups(catalog: &[CatalogExercise]) -> Vec<MuscleGroup> {
    MuscleGroup::ALL
        .into_iter()
        .filter(|group| catalog.iter().any(|e| e.muscle_group == *group))
        .collect()
}

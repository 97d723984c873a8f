//! Error types for the Gym Tracker analytics engine

use crate::validation::ValidationError;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised while accepting a snapshot into the engine
///
/// The calculators themselves are infallible; everything here is
/// detected at entry time.
#[derive(Error, Debug, Clone)]
pub enum AnalyticsError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Duplicate {kind} id in snapshot: {id}")]
    DuplicateId { kind: &'static str, id: Uuid },
}

impl AnalyticsError {
    /// Field that caused the error, when one applies
    pub fn field(&self) -> Option<&str> {
        match self {
            AnalyticsError::Validation(err) => Some(err.field.as_str()),
            AnalyticsError::DuplicateId { .. } => Some("id"),
        }
    }
}

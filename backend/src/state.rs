//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.

use crate::config::AppConfig;
use chrono::{Local, NaiveDate};
use gym_tracker_shared::WorkoutEstimates;
use std::sync::Arc;

/// Shared application state
///
/// The engine is stateless, so this only carries configuration and the
/// clock. Cloning is an Arc increment.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Overrides the local calendar date when set
    fixed_today: Option<NaiveDate>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            fixed_today: None,
        }
    }

    /// State whose "today" never moves, for deterministic tests
    pub fn with_fixed_today(config: AppConfig, today: NaiveDate) -> Self {
        Self {
            config: Arc::new(config),
            fixed_today: Some(today),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn estimates(&self) -> WorkoutEstimates {
        self.config.analytics.estimates()
    }

    /// The request's reference date, falling back to the local calendar date
    pub fn resolve_today(&self, requested: Option<NaiveDate>) -> NaiveDate {
        requested
            .or(self.fixed_today)
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

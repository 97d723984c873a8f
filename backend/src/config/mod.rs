//! Configuration management for the Gym Tracker backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: GT__)

use anyhow::Result;
use gym_tracker_shared::WorkoutEstimates;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub body_limit_bytes: usize,
}

/// Analytics tuning
///
/// The per-workout duration and calorie figures are estimates, not
/// measurements, so deployments can adjust them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    pub minutes_per_workout: u32,
    pub calories_per_workout: u32,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        let estimates = WorkoutEstimates::default();
        Self {
            minutes_per_workout: estimates.minutes_per_workout,
            calories_per_workout: estimates.calories_per_workout,
        }
    }
}

impl AnalyticsConfig {
    pub fn estimates(&self) -> WorkoutEstimates {
        WorkoutEstimates {
            minutes_per_workout: self.minutes_per_workout,
            calories_per_workout: self.calories_per_workout,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                request_timeout_secs: 30,
                body_limit_bytes: 2 * 1024 * 1024, // 2 MiB
            },
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with GT__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., GT__SERVER__PORT=9000 sets server.port
            .add_source(config::Environment::with_prefix("GT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.request_timeout_secs, 30);
        assert_eq!(config.analytics.minutes_per_workout, 45);
        assert_eq!(config.analytics.calories_per_workout, 300);
    }

    #[test]
    fn test_estimates_follow_config() {
        let config = AnalyticsConfig {
            minutes_per_workout: 60,
            calories_per_workout: 450,
        };
        let estimates = config.estimates();
        assert_eq!(estimates.minutes_per_workout, 60);
        assert_eq!(estimates.calories_per_workout, 450);
    }

    #[test]
    fn test_analytics_section_is_optional() {
        let json = r#"{"server":{"host":"0.0.0.0","port":9000,"request_timeout_secs":5,"body_limit_bytes":1024}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.analytics.minutes_per_workout, 45);
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }
}

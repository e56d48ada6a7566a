// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Constants Module
//!
//! Calculation coefficients, recognized activity labels and user-facing messages.
//! Environment lookups used by the command line tool live in [`env_config`].

use std::env;

/// Coefficients used by the distance, speed and calorie formulas
pub mod metrics {
    /// Average step length in meters
    pub const STEP_LENGTH_METERS: f64 = 0.65;

    /// Unit conversions
    pub const METERS_PER_KILOMETER: f64 = 1000.0;
    pub const MINUTES_PER_HOUR: f64 = 60.0;
    pub const SECONDS_PER_HOUR: f64 = 3600.0;

    /// Running: mean speed multiplier
    pub const RUNNING_SPEED_MULTIPLIER: f64 = 18.0;
    /// Running: calories subtracted per kilogram of body weight
    pub const RUNNING_SPEED_SHIFT: f64 = 20.0;

    /// Walking: body weight multiplier
    pub const WALKING_WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Walking: squared speed over height multiplier
    pub const WALKING_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Activity labels recognized in training records (case-sensitive)
pub mod labels {
    pub const WALKING_RU: &str = "Ходьба";
    pub const RUNNING_RU: &str = "Бег";
    pub const WALKING: &str = "Walking";
    pub const RUNNING: &str = "Running";
}

/// Record layout
pub mod record {
    pub const FIELD_SEPARATOR: char = ',';
    pub const TRAINING_FIELDS: usize = 3;
    pub const DAY_STEPS_FIELDS: usize = 2;
}

/// User-facing messages
pub mod messages {
    pub const UNKNOWN_TRAINING_TYPE: &str = "Unknown training type";
    pub const STEPS_NOT_POSITIVE: &str = "step count must be greater than zero";
    pub const DURATION_NOT_POSITIVE: &str = "duration must be greater than zero";
}

/// Default configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "fitness_config.toml";

/// Environment-based configuration for the command line tool
pub mod env_config {
    use super::env;

    /// Get the fitness config file path from environment
    pub fn config_path() -> Option<String> {
        env::var("FITNESS_CONFIG").ok()
    }

    /// Get default user weight (kg) from environment
    pub fn default_weight_kg() -> Option<f64> {
        env::var("FITNESS_WEIGHT_KG").ok().and_then(|v| v.parse().ok())
    }

    /// Get default user height (cm) from environment
    pub fn default_height_cm() -> Option<f64> {
        env::var("FITNESS_HEIGHT_CM").ok().and_then(|v| v.parse().ok())
    }

    /// Get log level from environment or default
    pub fn log_level() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string())
    }
}

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Data Models
//!
//! Core data structures flowing through the record pipeline:
//! raw string → record → computed report → rendered text.
//!
//! ## Core Models
//!
//! - [`ActivityKind`]: Closed set of activities a training record may describe
//! - [`UserProfile`]: Caller-supplied biometrics used for calorie estimates
//! - [`TrainingRecord`] / [`DayStepsRecord`]: Validated input records
//! - [`TrainingReport`] / [`DayStepsReport`]: Computed, renderable summaries

use crate::constants::messages;
use crate::errors::RecordError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Enumeration of activity kinds a training record can name
///
/// Labels that do not map to a known activity become [`ActivityKind::Unknown`].
/// That is a normal outcome rather than a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Walking activity
    Walking,
    /// Running activity
    Running,
    /// Any label that is not configured
    Unknown,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Walking => write!(f, "walking"),
            Self::Running => write!(f, "running"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// User biometrics supplied per call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
}

impl UserProfile {
    pub fn new(weight_kg: f64, height_cm: f64) -> Self {
        Self { weight_kg, height_cm }
    }

    /// Reject profiles that would make calorie estimates meaningless
    pub fn validate(&self) -> Result<(), RecordError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if positive(self.weight_kg) && positive(self.height_cm) {
            Ok(())
        } else {
            Err(RecordError::InvalidProfile {
                weight: self.weight_kg,
                height: self.height_cm,
            })
        }
    }
}

/// A validated `steps,activity,duration` record
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingRecord {
    pub steps: u64,
    /// Activity label exactly as written in the record
    pub label: String,
    pub kind: ActivityKind,
    pub duration: Duration,
}

/// A validated `steps,duration` record, always a walk
#[derive(Debug, Clone, PartialEq)]
pub struct DayStepsRecord {
    pub steps: u64,
    pub duration: Duration,
}

/// Summary of a walking or running session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReport {
    pub activity: String,
    pub kind: ActivityKind,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}\nDuration: {:.2} h.\nDistance: {:.2} km.\nSpeed: {:.2} km/h\nCalories burned: {:.2}",
            self.activity, self.duration_hours, self.distance_km, self.mean_speed_kmh, self.calories
        )
    }
}

/// Result of a successfully parsed training record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TrainingOutcome {
    Report(TrainingReport),
    /// The label did not name a known activity
    UnknownActivity { activity: String },
}

impl fmt::Display for TrainingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Report(report) => fmt::Display::fmt(report, f),
            Self::UnknownActivity { .. } => f.write_str(messages::UNKNOWN_TRAINING_TYPE),
        }
    }
}

/// Summary of a day's worth of steps
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayStepsReport {
    pub steps: u64,
    pub distance_km: f64,
    pub calories: f64,
}

impl fmt::Display for DayStepsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Steps: {}.\nDistance: {:.2} km.\nCalories burned: {:.2} kcal.",
            self.steps, self.distance_km, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_validation() {
        assert!(UserProfile::new(70.0, 175.0).validate().is_ok());
        assert!(UserProfile::new(0.0, 175.0).validate().is_err());
        assert!(UserProfile::new(70.0, -1.0).validate().is_err());
        assert!(UserProfile::new(f64::NAN, 175.0).validate().is_err());
        assert!(UserProfile::new(70.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_training_report_template() {
        let report = TrainingReport {
            activity: "Бег".to_string(),
            kind: ActivityKind::Running,
            duration_hours: 0.5,
            distance_km: 3.9,
            mean_speed_kmh: 7.8,
            calories: 1234.5,
        };

        assert_eq!(
            report.to_string(),
            "Training type: Бег\nDuration: 0.50 h.\nDistance: 3.90 km.\nSpeed: 7.80 km/h\nCalories burned: 1234.50"
        );
    }

    #[test]
    fn test_day_steps_template_has_no_trailing_newline() {
        let report = DayStepsReport { steps: 1000, distance_km: 0.65, calories: 147.0042 };
        let text = report.to_string();

        assert_eq!(text, "Steps: 1000.\nDistance: 0.65 km.\nCalories burned: 147.00 kcal.");
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_unknown_outcome_renders_fixed_message() {
        let outcome = TrainingOutcome::UnknownActivity { activity: "Skiing".to_string() };
        assert_eq!(outcome.to_string(), "Unknown training type");
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = TrainingOutcome::UnknownActivity { activity: "Skiing".to_string() };
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["outcome"], "unknown_activity");
        assert_eq!(json["activity"], "Skiing");
    }
}

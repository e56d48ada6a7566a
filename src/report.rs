// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Reports
//!
//! Runs the full pipeline for a single record: validate the profile, parse the
//! record, compute metrics and render the summary.
//!
//! [`ReportFormatter`] exposes two flavours of each entry point. The typed ones
//! (`training_report`, `day_steps_report`) return a `Result`; the string ones
//! (`format_training_report`, `format_day_steps_report`) always return text, using
//! the error description when the record is rejected.

use crate::config::FitnessConfig;
use crate::errors::RecordError;
use crate::metrics;
use crate::models::{
    ActivityKind, DayStepsReport, TrainingOutcome, TrainingReport, UserProfile,
};
use crate::parser::{parse_day_steps_record, parse_training_record};
use tracing::{debug, warn};

/// Builds reports using a configured set of activity labels
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    config: FitnessConfig,
}

impl ReportFormatter {
    pub fn new(config: FitnessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FitnessConfig {
        &self.config
    }

    /// Compute the report for a `steps,activity,duration` record
    pub fn training_report(
        &self,
        data: &str,
        weight: f64,
        height: f64,
    ) -> Result<TrainingOutcome, RecordError> {
        let profile = UserProfile::new(weight, height);
        profile.validate()?;

        let record = parse_training_record(data, &self.config)?;
        debug!(
            steps = record.steps,
            kind = %record.kind,
            duration_secs = record.duration.as_secs_f64(),
            "Parsed training record"
        );

        let calories = match record.kind {
            ActivityKind::Walking => metrics::walking_calories(
                record.steps,
                profile.weight_kg,
                profile.height_cm,
                record.duration,
            ),
            ActivityKind::Running => {
                metrics::running_calories(record.steps, profile.weight_kg, record.duration)
            }
            ActivityKind::Unknown => {
                debug!(activity = %record.label, "Unrecognized activity label");
                return Ok(TrainingOutcome::UnknownActivity { activity: record.label });
            }
        };

        Ok(TrainingOutcome::Report(TrainingReport {
            kind: record.kind,
            duration_hours: metrics::hours(record.duration),
            distance_km: metrics::distance_km(record.steps),
            mean_speed_kmh: metrics::mean_speed_kmh(record.steps, record.duration),
            calories,
            activity: record.label,
        }))
    }

    /// Compute the report for a `steps,duration` record
    pub fn day_steps_report(
        &self,
        data: &str,
        weight: f64,
        height: f64,
    ) -> Result<DayStepsReport, RecordError> {
        let profile = UserProfile::new(weight, height);
        profile.validate()?;

        let record = parse_day_steps_record(data)?;
        debug!(
            steps = record.steps,
            duration_secs = record.duration.as_secs_f64(),
            "Parsed day steps record"
        );

        Ok(DayStepsReport {
            steps: record.steps,
            distance_km: metrics::distance_km(record.steps),
            calories: metrics::walking_calories(
                record.steps,
                profile.weight_kg,
                profile.height_cm,
                record.duration,
            ),
        })
    }

    /// Render a training record, or the reason it was rejected
    pub fn format_training_report(&self, data: &str, weight: f64, height: f64) -> String {
        match self.training_report(data, weight, height) {
            Ok(outcome) => outcome.to_string(),
            Err(e) => {
                warn!(record = data, error = %e, "Rejected training record");
                e.to_string()
            }
        }
    }

    /// Render a day steps record, or the reason it was rejected
    pub fn format_day_steps_report(&self, data: &str, weight: f64, height: f64) -> String {
        match self.day_steps_report(data, weight, height) {
            Ok(report) => report.to_string(),
            Err(e) => {
                warn!(record = data, error = %e, "Rejected day steps record");
                e.to_string()
            }
        }
    }
}

/// Render a training record with the built-in activity labels
pub fn format_training_report(data: &str, weight: f64, height: f64) -> String {
    ReportFormatter::default().format_training_report(data, weight, height)
}

/// Render a day steps record
pub fn format_day_steps_report(data: &str, weight: f64, height: f64) -> String {
    ReportFormatter::default().format_day_steps_report(data, weight, height)
}

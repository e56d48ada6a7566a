// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Record Parser
//!
//! Turns raw comma-separated records into validated [`TrainingRecord`] and
//! [`DayStepsRecord`] values.
//!
//! Both record kinds share one policy: the step count must be a positive decimal
//! integer and the duration a positive duration literal. Fields are taken as
//! written; surrounding whitespace is not trimmed.

use crate::config::FitnessConfig;
use crate::constants::{messages, record};
use crate::duration::parse_duration;
use crate::errors::RecordError;
use crate::models::{DayStepsRecord, TrainingRecord};
use std::time::Duration;

/// Parse a `steps,activity,duration` record
pub fn parse_training_record(
    data: &str,
    config: &FitnessConfig,
) -> Result<TrainingRecord, RecordError> {
    let fields = split_fields(data, record::TRAINING_FIELDS)?;

    let steps = parse_steps(fields[0])?;
    let label = fields[1].to_string();
    let duration = parse_positive_duration(fields[2])?;
    let kind = config.activity_kind(&label);

    Ok(TrainingRecord { steps, label, kind, duration })
}

/// Parse a `steps,duration` record
pub fn parse_day_steps_record(data: &str) -> Result<DayStepsRecord, RecordError> {
    let fields = split_fields(data, record::DAY_STEPS_FIELDS)?;

    let steps = parse_steps(fields[0])?;
    let duration = parse_positive_duration(fields[1])?;

    Ok(DayStepsRecord { steps, duration })
}

fn split_fields(data: &str, expected: usize) -> Result<Vec<&str>, RecordError> {
    if data.is_empty() {
        return Err(RecordError::NoData);
    }

    let fields: Vec<&str> = data.split(record::FIELD_SEPARATOR).collect();
    if fields.len() != expected {
        return Err(RecordError::MalformedRecord { expected, found: fields.len() });
    }

    Ok(fields)
}

fn parse_steps(field: &str) -> Result<u64, RecordError> {
    let invalid = |reason: String| RecordError::InvalidSteps {
        value: field.to_string(),
        reason,
    };

    let steps: i64 = field.parse().map_err(|e: std::num::ParseIntError| invalid(e.to_string()))?;
    if steps <= 0 {
        return Err(invalid(messages::STEPS_NOT_POSITIVE.to_string()));
    }

    // positive i64 always fits
    Ok(steps as u64)
}

fn parse_positive_duration(field: &str) -> Result<Duration, RecordError> {
    let invalid = |reason: String| RecordError::InvalidDuration {
        value: field.to_string(),
        reason,
    };

    let duration = parse_duration(field).map_err(|e| invalid(e.to_string()))?;
    if duration.is_zero() {
        return Err(invalid(messages::DURATION_NOT_POSITIVE.to_string()));
    }

    Ok(duration)
}

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types for record parsing and duration literals

/// Errors that can occur while turning a raw record into a report
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("No data: the record is empty")]
    NoData,

    #[error("Malformed record: expected {expected} comma-separated fields, found {found}")]
    MalformedRecord { expected: usize, found: usize },

    #[error("Invalid step count {value:?}: {reason}")]
    InvalidSteps { value: String, reason: String },

    #[error("Invalid duration {value:?}: {reason}")]
    InvalidDuration { value: String, reason: String },

    #[error("Invalid user profile: weight ({weight}) and height ({height}) must be positive")]
    InvalidProfile { weight: f64, height: f64 },
}

/// Errors produced by the duration literal parser
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    #[error("empty duration literal")]
    Empty,

    #[error("negative durations are not allowed")]
    Negative,

    #[error("expected a number at {0:?}")]
    InvalidNumber(String),

    #[error("missing unit after {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {0:?}")]
    UnknownUnit(String),

    #[error("duration is too large")]
    Overflow,
}

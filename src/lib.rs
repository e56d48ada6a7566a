// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Fitness Tracker
//!
//! Distance, speed and calorie summaries for single activity records.
//!
//! A record is one comma-separated line. Training records carry
//! `steps,activity,duration` and name either a walk or a run; day steps records
//! carry `steps,duration` and are always treated as a walk. Each call is
//! independent: nothing is stored between calls and no state is shared.
//!
//! ## Architecture
//!
//! - **Metrics**: Pure distance, speed and calorie formulas
//! - **Duration**: Compact duration literals (`45m`, `1h30m`, `1.5h`)
//! - **Parser**: Record splitting and validation
//! - **Report**: Pipeline from raw record to rendered summary
//! - **Config**: Activity label mapping loaded from TOML
//!
//! ## Example Usage
//!
//! ```rust
//! use fitness_tracker::{format_day_steps_report, format_training_report};
//!
//! let summary = format_training_report("1000,Ходьба,1h", 70.0, 175.0);
//! assert!(summary.ends_with("Calories burned: 147.00"));
//!
//! let summary = format_day_steps_report("1000,1h", 70.0, 175.0);
//! assert_eq!(summary, "Steps: 1000.\nDistance: 0.65 km.\nCalories burned: 147.00 kcal.");
//!
//! assert_eq!(format_training_report("1000,Skiing,1h", 70.0, 175.0), "Unknown training type");
//! ```

/// Calculation coefficients, labels and messages
pub mod constants;

/// Error types for records and duration literals
pub mod errors;

/// Records, profiles and reports
pub mod models;

/// Distance, speed and calorie formulas
pub mod metrics;

/// Compact duration literal parsing
pub mod duration;

/// Record splitting and validation
pub mod parser;

/// Report computation and rendering
pub mod report;

/// Activity label configuration
pub mod config;

/// Tracing subscriber setup for binaries
pub mod logging;

pub use errors::RecordError;
pub use models::{ActivityKind, DayStepsReport, TrainingOutcome, TrainingReport, UserProfile};
pub use report::{format_day_steps_report, format_training_report, ReportFormatter};

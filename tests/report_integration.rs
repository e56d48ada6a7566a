// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! End-to-end tests for the string report entry points

use fitness_tracker::metrics::walking_calories;
use fitness_tracker::{
    format_day_steps_report, format_training_report, RecordError, ReportFormatter,
    TrainingOutcome,
};
use std::time::Duration;

const WEIGHT: f64 = 70.0;
const HEIGHT: f64 = 175.0;

#[test]
fn test_day_steps_report_for_one_hour_walk() {
    let text = format_day_steps_report("1000,1h", WEIGHT, HEIGHT);
    let expected_calories = walking_calories(1000, WEIGHT, HEIGHT, Duration::from_secs(3600));

    assert!(text.contains("1000"));
    assert!(text.contains("0.65"));
    assert!(text.contains(&format!("{:.2}", expected_calories)));
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn test_training_and_day_steps_agree_on_walking_calories() {
    let formatter = ReportFormatter::default();

    let day = formatter.day_steps_report("1000,1h", WEIGHT, HEIGHT).unwrap();
    let training = formatter.training_report("1000,Ходьба,1h", WEIGHT, HEIGHT).unwrap();

    let TrainingOutcome::Report(training) = training else {
        panic!("walking record should produce a report");
    };
    assert_eq!(day.calories, training.calories);
    assert_eq!(day.distance_km, training.distance_km);
}

#[test]
fn test_training_report_layout() {
    let text = format_training_report("6000,Бег,45m", WEIGHT, HEIGHT);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Training type: Бег");
    assert_eq!(lines[1], "Duration: 0.75 h.");
    assert_eq!(lines[2], "Distance: 3.90 km.");
    assert_eq!(lines[3], "Speed: 5.20 km/h");
    assert!(lines[4].starts_with("Calories burned: "));
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_unknown_activity_is_not_an_error() {
    let formatter = ReportFormatter::default();

    assert_eq!(format_training_report("1000,Skiing,1h", WEIGHT, HEIGHT), "Unknown training type");
    assert!(matches!(
        formatter.training_report("1000,Skiing,1h", WEIGHT, HEIGHT),
        Ok(TrainingOutcome::UnknownActivity { activity }) if activity == "Skiing"
    ));
}

#[test]
fn test_malformed_inputs_map_to_their_error_kind() {
    let formatter = ReportFormatter::default();

    assert_eq!(formatter.day_steps_report("", WEIGHT, HEIGHT), Err(RecordError::NoData));
    assert!(matches!(
        formatter.day_steps_report("abc,1h", WEIGHT, HEIGHT),
        Err(RecordError::InvalidSteps { .. })
    ));
    assert!(matches!(
        formatter.day_steps_report("1000,notaduration", WEIGHT, HEIGHT),
        Err(RecordError::InvalidDuration { .. })
    ));
    assert!(matches!(
        formatter.training_report("1000,1h", WEIGHT, HEIGHT),
        Err(RecordError::MalformedRecord { expected: 3, found: 2 })
    ));
    assert!(matches!(
        formatter.day_steps_report("1000,94522879700260684295381835.9h", WEIGHT, HEIGHT),
        Err(RecordError::InvalidDuration { .. })
    ));
}

#[test]
fn test_error_text_is_returned_not_empty() {
    for text in [
        format_day_steps_report("", WEIGHT, HEIGHT),
        format_day_steps_report("abc,1h", WEIGHT, HEIGHT),
        format_day_steps_report("1000,notaduration", WEIGHT, HEIGHT),
        format_day_steps_report("1000,1h", 0.0, HEIGHT),
        format_training_report("1,2,3,4", WEIGHT, HEIGHT),
    ] {
        assert!(!text.is_empty());
    }

    assert_eq!(format_day_steps_report("", WEIGHT, HEIGHT), "No data: the record is empty");
}

#[test]
fn test_zero_boundary() {
    let formatter = ReportFormatter::default();

    // zero is rejected, one is the smallest accepted value
    assert!(matches!(
        formatter.day_steps_report("0,1h", WEIGHT, HEIGHT),
        Err(RecordError::InvalidSteps { .. })
    ));
    assert!(matches!(
        formatter.day_steps_report("1000,0s", WEIGHT, HEIGHT),
        Err(RecordError::InvalidDuration { .. })
    ));
    assert!(formatter.day_steps_report("1,1h", WEIGHT, HEIGHT).is_ok());
    assert!(formatter.day_steps_report("1000,1s", WEIGHT, HEIGHT).is_ok());
}

#[test]
fn test_non_positive_profile() {
    for (weight, height) in [(0.0, HEIGHT), (WEIGHT, 0.0), (-70.0, HEIGHT), (WEIGHT, -175.0)] {
        assert!(format_day_steps_report("1000,1h", weight, height).starts_with("Invalid user profile"));
        assert!(format_training_report("1000,Бег,1h", weight, height).starts_with("Invalid user profile"));
    }
}

#[test]
fn test_concurrent_calls_are_independent() {
    let handles: Vec<_> = (1..=8u64)
        .map(|i| {
            std::thread::spawn(move || {
                format_day_steps_report(&format!("{},1h", i * 1000), WEIGHT, HEIGHT)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let text = handle.join().unwrap();
        assert!(text.starts_with(&format!("Steps: {}.", (i as u64 + 1) * 1000)));
    }
}

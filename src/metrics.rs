// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Distance, speed and calorie calculations
//!
//! Every function here is pure. Inputs that cannot produce a meaningful figure
//! (no steps, zero duration, non-positive weight or height) yield `0.0` instead of
//! an error; callers reject such inputs before reaching this layer.

use crate::constants::metrics::*;
use std::time::Duration;

/// Duration expressed in fractional hours
pub fn hours(duration: Duration) -> f64 {
    duration.as_secs_f64() / SECONDS_PER_HOUR
}

/// Distance covered in kilometers
pub fn distance_km(steps: u64) -> f64 {
    if steps == 0 {
        return 0.0;
    }

    steps as f64 * STEP_LENGTH_METERS / METERS_PER_KILOMETER
}

/// Mean speed in km/h
pub fn mean_speed_kmh(steps: u64, duration: Duration) -> f64 {
    if steps == 0 || duration.is_zero() {
        return 0.0;
    }

    distance_km(steps) / hours(duration)
}

/// Calories spent running
///
/// Goes negative for very slow runs (mean speed below ~1.1 km/h); the value is
/// reported as computed.
pub fn running_calories(steps: u64, weight_kg: f64, duration: Duration) -> f64 {
    if steps == 0 || weight_kg <= 0.0 || duration.is_zero() {
        return 0.0;
    }

    let speed = mean_speed_kmh(steps, duration);
    (RUNNING_SPEED_MULTIPLIER * speed - RUNNING_SPEED_SHIFT) * weight_kg
}

/// Calories spent walking
pub fn walking_calories(steps: u64, weight_kg: f64, height_cm: f64, duration: Duration) -> f64 {
    if steps == 0 || weight_kg <= 0.0 || height_cm <= 0.0 || duration.is_zero() {
        return 0.0;
    }

    let speed = mean_speed_kmh(steps, duration);
    (WALKING_WEIGHT_MULTIPLIER * weight_kg
        + (speed * speed / height_cm) * WALKING_SPEED_HEIGHT_MULTIPLIER)
        * hours(duration)
        * MINUTES_PER_HOUR
}

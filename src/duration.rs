// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Duration Literals
//!
//! Parser for compact duration literals such as `45m`, `1h30m` or `1.5h`.
//!
//! A literal is an optional sign followed by one or more `<number><unit>` groups.
//! Numbers may carry a decimal fraction. Supported units are `h`, `m`, `s`, `ms`,
//! `us` (or `µs`) and `ns`. The bare literal `0` is accepted without a unit.
//! Negative non-zero literals are rejected since an activity cannot last less than
//! nothing.

use crate::errors::DurationError;
use std::time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;
const NANOS_PER_MINUTE: u128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MINUTE;

/// Fraction digits beyond this are below nanosecond resolution for every unit
const MAX_FRACTION_DIGITS: u32 = 18;

/// Parse a compact duration literal
///
/// ```rust
/// use fitness_tracker::duration::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5400));
/// assert_eq!(parse_duration("1.5h").unwrap(), Duration::from_secs(5400));
/// ```
pub fn parse_duration(literal: &str) -> Result<Duration, DurationError> {
    if literal.is_empty() {
        return Err(DurationError::Empty);
    }

    let (negative, mut rest) = match literal.as_bytes()[0] {
        b'-' => (true, &literal[1..]),
        b'+' => (false, &literal[1..]),
        _ => (false, literal),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(DurationError::InvalidNumber(literal.to_string()));
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, fraction, after_number) = split_number(rest)?;

        let unit_end = after_number
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(after_number.len());
        let unit = &after_number[..unit_end];
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(literal.to_string()));
        }
        let unit_nanos = unit_in_nanos(unit)?;

        let mut nanos = whole
            .checked_mul(unit_nanos)
            .ok_or(DurationError::Overflow)?;
        if let Some((numerator, digits)) = fraction {
            nanos = nanos
                .checked_add(numerator * unit_nanos / 10u128.pow(digits))
                .ok_or(DurationError::Overflow)?;
        }

        total = total.checked_add(nanos).ok_or(DurationError::Overflow)?;
        if total > u128::from(u64::MAX) {
            return Err(DurationError::Overflow);
        }

        rest = &after_number[unit_end..];
    }

    if negative && total > 0 {
        return Err(DurationError::Negative);
    }

    // bounded by the u64::MAX check above
    Ok(Duration::from_nanos(total as u64))
}

/// Split the leading `<digits>[.<digits>]` off `input`
///
/// Returns the whole part, the optional fraction as `(numerator, digit count)` and
/// the remaining input.
fn split_number(input: &str) -> Result<(u128, Option<(u128, u32)>, &str), DurationError> {
    let whole_end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    let whole_digits = &input[..whole_end];
    let mut rest = &input[whole_end..];

    let mut fraction = None;
    let mut fraction_digits = "";
    if let Some(after_dot) = rest.strip_prefix('.') {
        let fraction_end = after_dot
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after_dot.len());
        fraction_digits = &after_dot[..fraction_end];
        rest = &after_dot[fraction_end..];

        let kept = &fraction_digits[..fraction_digits.len().min(MAX_FRACTION_DIGITS as usize)];
        if !kept.is_empty() {
            fraction = Some((accumulate_digits(kept)?, kept.len() as u32));
        }
    }

    if whole_digits.is_empty() && fraction_digits.is_empty() {
        return Err(DurationError::InvalidNumber(input.to_string()));
    }

    let whole = if whole_digits.is_empty() {
        0
    } else {
        accumulate_digits(whole_digits)?
    };

    Ok((whole, fraction, rest))
}

fn accumulate_digits(digits: &str) -> Result<u128, DurationError> {
    digits.bytes().try_fold(0u128, |acc, b| {
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(u128::from(b - b'0')))
            .ok_or(DurationError::Overflow)
    })
}

fn unit_in_nanos(unit: &str) -> Result<u128, DurationError> {
    match unit {
        "ns" => Ok(1),
        "us" | "µs" | "μs" => Ok(NANOS_PER_MICRO),
        "ms" => Ok(NANOS_PER_MILLI),
        "s" => Ok(NANOS_PER_SECOND),
        "m" => Ok(NANOS_PER_MINUTE),
        "h" => Ok(NANOS_PER_HOUR),
        other => Err(DurationError::UnknownUnit(other.to_string())),
    }
}

//! Structural validation of relative dates.
//!
//! Pure and infallible: every violation yields `false`, never a panic or an
//! error, so content can be lint-checked before resolution is attempted.

use crate::config::CourseConfig;
use crate::relative::{parse_time, weekday_from_name, ClassDay, RelativeDate};

/// Check a relative date for structural validity against a course config.
///
/// Returns `false` when the week is not positive, a numeric day falls
/// outside `1..=classDays.len()`, a string day is not a canonical weekday
/// name, or a present `time` does not match strict `HH:MM:SS` with in-range
/// components. An absent `time` is valid (the default class time applies).
pub fn validate_relative(relative: &RelativeDate, config: &CourseConfig) -> bool {
    if relative.week < 1 {
        return false;
    }

    match &relative.day {
        ClassDay::Index(index) => {
            if *index < 1 || *index as usize > config.class_days.len() {
                return false;
            }
        }
        ClassDay::Name(name) => {
            if weekday_from_name(name).is_none() {
                return false;
            }
        }
    }

    match &relative.time {
        Some(time) => parse_time(time).is_some(),
        None => true,
    }
}

//! Relative date value types and the weekday/time parsing helpers shared by
//! the resolver and the validator.
//!
//! A [`RelativeDate`] places an event on the course timeline as a
//! (week, day, time) triple: 1-based course week, class-day index or literal
//! weekday name, and an optional `HH:MM:SS` time-of-day that falls back to
//! the configured default class time.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// The seven canonical weekday names, as authored in content files and in
/// `classDays`. Matching is exact (capitalized full names).
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// The `day` component of a relative date.
///
/// Either a 1-based index into the configured `classDays` (the common case
/// for lectures and homework), or a literal weekday name for events held
/// outside regular class days, such as exams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassDay {
    /// 1-based index into `classDays`: `1` is the first class meeting of the
    /// week.
    Index(u32),
    /// A canonical weekday name. Need not be a member of `classDays`.
    Name(String),
}

/// A point on the course timeline, independent of absolute calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeDate {
    /// 1-based course week. Course weeks exclude skipped calendar weeks.
    pub week: u32,
    /// Class-day index or weekday name within that week.
    pub day: ClassDay,
    /// Optional `HH:MM:SS` time-of-day; the configured default class time
    /// applies when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Look up a canonical weekday name. Returns `None` for anything that is not
/// exactly one of [`WEEKDAY_NAMES`].
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "Monday" => Some(Weekday::Mon),
        "Tuesday" => Some(Weekday::Tue),
        "Wednesday" => Some(Weekday::Wed),
        "Thursday" => Some(Weekday::Thu),
        "Friday" => Some(Weekday::Fri),
        "Saturday" => Some(Weekday::Sat),
        "Sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// The canonical name for a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// Parse a strict `HH:MM:SS` time-of-day string.
///
/// Exactly eight characters, zero-padded components, hour 00-23,
/// minute/second 00-59. Returns `None` on any violation; chrono's lenient
/// `%H:%M:%S` parsing (which accepts `9:5:0`) is deliberately not used here.
pub fn parse_time(time: &str) -> Option<NaiveTime> {
    let bytes = time.as_bytes();
    if bytes.len() != 8 || bytes[2] != b':' || bytes[5] != b':' {
        return None;
    }

    let two_digits = |hi: u8, lo: u8| -> Option<u32> {
        if hi.is_ascii_digit() && lo.is_ascii_digit() {
            Some(u32::from(hi - b'0') * 10 + u32::from(lo - b'0'))
        } else {
            None
        }
    };

    let hour = two_digits(bytes[0], bytes[1])?;
    let minute = two_digits(bytes[3], bytes[4])?;
    let second = two_digits(bytes[6], bytes[7])?;

    NaiveTime::from_hms_opt(hour, minute, second)
}

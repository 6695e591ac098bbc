//! Date resolution -- converts course-relative dates into absolute instants,
//! and back again for one-time content migration.
//!
//! All week arithmetic is wall-clock calendar arithmetic in the course
//! timezone, so DST transitions never shift the intended local time. The
//! local date and time-of-day are composed once and mapped through
//! `chrono-tz` in a single step rather than mutated component-by-component,
//! which would silently shift the instant across a DST boundary.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::config::CourseConfig;
use crate::error::{Result, ScheduleError};
use crate::relative::{parse_time, weekday_from_name, weekday_name, ClassDay, RelativeDate};

/// Resolve a relative date into an absolute instant.
///
/// Walks calendar weeks forward from the semester start, counting only
/// non-skipped weeks toward the course-week number, then offsets to the
/// target weekday within that week and composes the time-of-day in the
/// course timezone.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidDayIndex`] when a numeric `day` falls
/// outside `1..=classDays.len()`, [`ScheduleError::InvalidDayName`] when a
/// string `day` is not a canonical weekday name,
/// [`ScheduleError::InvalidTime`] for a malformed time-of-day, and
/// [`ScheduleError::NonexistentLocalTime`] when the composed local time
/// falls in a DST gap.
pub fn resolve_date(relative: &RelativeDate, config: &CourseConfig) -> Result<DateTime<Utc>> {
    let mut week_start = config.semester_start_date.date();
    let mut course_week = 1u32;

    // Advance one calendar week per iteration; skipped weeks do not count
    // toward the course-week number. The semester start week is week 1
    // unconditionally.
    while course_week < relative.week {
        let next = week_start + Duration::weeks(1);
        if !config.is_skipped(next) {
            course_week += 1;
        }
        week_start = next;
    }

    let target = match &relative.day {
        ClassDay::Index(index) => config.class_weekday(*index)?,
        ClassDay::Name(name) => {
            weekday_from_name(name).ok_or_else(|| ScheduleError::InvalidDayName(name.clone()))?
        }
    };

    // Closed-form weekday alignment within [week_start, week_start + 6d].
    let offset = (target.num_days_from_monday() + 7
        - week_start.weekday().num_days_from_monday())
        % 7;
    let date = week_start + Duration::days(i64::from(offset));

    let time = match &relative.time {
        Some(raw) => {
            parse_time(raw).ok_or_else(|| ScheduleError::InvalidTime(raw.clone()))?
        }
        None => config.default_time()?,
    };

    Ok(local_to_instant(date.and_time(time), config)?.with_timezone(&Utc))
}

/// Derive the relative date an absolute instant falls on -- the inverse of
/// [`resolve_date`], used by the one-time content migration.
///
/// The weekday becomes a [`ClassDay::Index`] when it is a configured class
/// day and a [`ClassDay::Name`] otherwise (off-day events such as exams).
/// The local time is always recorded explicitly as `HH:MM:SS`.
///
/// # Errors
///
/// Returns [`ScheduleError::BeforeSemesterStart`] for instants before course
/// week 1 and [`ScheduleError::DateInSkippedWeek`] for instants inside a
/// skipped calendar week, onto which no course week maps.
pub fn derive_relative(local: DateTime<Tz>, config: &CourseConfig) -> Result<RelativeDate> {
    let date = local.date_naive();
    let start = config.semester_start_date.date();

    let mut week_start = start;
    let mut week = 1u32;
    while week_start.iso_week() != date.iso_week() {
        if week_start > date {
            return Err(ScheduleError::BeforeSemesterStart(local.to_rfc3339()));
        }
        let next = week_start + Duration::weeks(1);
        if !config.is_skipped(next) {
            week += 1;
        }
        week_start = next;
    }

    // The start week is week 1 unconditionally (mirroring the forward walk),
    // so a skip entry covering it is ignored here too.
    if config.is_skipped(date) && date.iso_week() != start.iso_week() {
        return Err(ScheduleError::DateInSkippedWeek(local.to_rfc3339()));
    }

    let name = weekday_name(local.weekday());
    let day = match config.class_days.iter().position(|entry| entry == name) {
        Some(position) => ClassDay::Index(position as u32 + 1),
        None => ClassDay::Name(name.to_string()),
    };

    Ok(RelativeDate {
        week,
        day,
        time: Some(local.format("%H:%M:%S").to_string()),
    })
}

/// Parse a stored absolute datetime string into the course timezone.
///
/// Accepts RFC 3339 (offset-aware, e.g. `2024-08-27T19:00:00.000Z`,
/// converted into the course zone) or a bare local datetime
/// (`2024-08-27T14:00:00`, with optional fractional seconds) interpreted in
/// the course zone.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidDateTime`] for unparseable input and
/// [`ScheduleError::NonexistentLocalTime`] for a bare local datetime in a
/// DST gap.
pub fn parse_absolute(raw: &str, config: &CourseConfig) -> Result<DateTime<Tz>> {
    if let Ok(aware) = DateTime::parse_from_rfc3339(raw) {
        return Ok(aware.with_timezone(&config.time_zone));
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|_| ScheduleError::InvalidDateTime(raw.to_string()))?;
    local_to_instant(naive, config)
}

/// Map a local wall-clock datetime into the course timezone.
///
/// An ambiguous local time (DST fall-back fold) resolves to the earlier
/// instant; a nonexistent one (spring-forward gap) is an error.
fn local_to_instant(naive: NaiveDateTime, config: &CourseConfig) -> Result<DateTime<Tz>> {
    match config.time_zone.from_local_datetime(&naive) {
        LocalResult::Single(instant) => Ok(instant),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(ScheduleError::NonexistentLocalTime {
            datetime: naive.to_string(),
            time_zone: config.time_zone.to_string(),
        }),
    }
}

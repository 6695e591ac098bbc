//! Course configuration -- the semester-level description every resolution
//! runs against.
//!
//! Loaded once from a YAML file (camelCase keys, matching the authored
//! config) and treated as read-only for the process lifetime. The resolver,
//! validator, and enrichment all take it as an explicit `&CourseConfig`
//! argument; there is no ambient global.

use std::path::Path;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::{Result, ScheduleError};
use crate::relative::{parse_time, weekday_from_name};

/// A calendar week excluded from course-week counting, e.g. a break.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SkippedWeek {
    /// Any datetime inside the skipped week, conventionally the Monday that
    /// starts it. Matching is by ISO week, so mid-week values work too.
    pub calendar_week_start_date: NaiveDateTime,
    /// Human-readable reason ("Thanksgiving Break"). Not used by the
    /// resolver.
    pub reason: String,
}

/// Static description of one course offering.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CourseConfig {
    /// Local datetime anchoring course week 1, conventionally a Monday at
    /// midnight.
    pub semester_start_date: NaiveDateTime,
    /// Weekday names on which class meets; index `i` (1-based) names the
    /// `i`-th class meeting of a course week.
    pub class_days: Vec<String>,
    /// `HH:MM:SS` time-of-day used when a relative date omits `time`.
    pub default_class_time: String,
    /// IANA timezone all absolute instants are computed in.
    pub time_zone: Tz,
    /// Calendar weeks excluded from course-week counting.
    #[serde(default)]
    pub skipped_weeks: Vec<SkippedWeek>,
    /// Course metadata, opaque to the resolver.
    pub course_name: String,
    pub semester: String,
}

impl CourseConfig {
    /// Load and validate a course configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::ConfigRead`] / [`ScheduleError::ConfigParse`]
    /// for I/O and YAML failures, and the structural errors documented on
    /// [`CourseConfig::validate`] for a config that parsed but is unusable.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: CourseConfig = serde_yaml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the structural invariants a parsed config must satisfy:
    /// `classDays` non-empty, every entry a canonical weekday name, no
    /// duplicates, and `defaultClassTime` a strict `HH:MM:SS` string.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::EmptyClassDays`],
    /// [`ScheduleError::InvalidDayName`],
    /// [`ScheduleError::DuplicateClassDay`], or
    /// [`ScheduleError::InvalidTime`].
    pub fn validate(&self) -> Result<()> {
        if self.class_days.is_empty() {
            return Err(ScheduleError::EmptyClassDays);
        }
        let mut seen: Vec<Weekday> = Vec::with_capacity(self.class_days.len());
        for name in &self.class_days {
            let weekday = weekday_from_name(name)
                .ok_or_else(|| ScheduleError::InvalidDayName(name.clone()))?;
            if seen.contains(&weekday) {
                return Err(ScheduleError::DuplicateClassDay(name.clone()));
            }
            seen.push(weekday);
        }
        parse_time(&self.default_class_time)
            .ok_or_else(|| ScheduleError::InvalidTime(self.default_class_time.clone()))?;
        Ok(())
    }

    /// The weekday of the `index`-th (1-based) class meeting of a week.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidDayIndex`] when `index` is outside
    /// `1..=classDays.len()`, and [`ScheduleError::InvalidDayName`] when the
    /// configured entry is not a canonical weekday name (only reachable on a
    /// config that bypassed [`CourseConfig::validate`]).
    pub fn class_weekday(&self, index: u32) -> Result<Weekday> {
        if index < 1 || index as usize > self.class_days.len() {
            return Err(ScheduleError::InvalidDayIndex {
                index,
                max: self.class_days.len(),
            });
        }
        let name = &self.class_days[index as usize - 1];
        weekday_from_name(name).ok_or_else(|| ScheduleError::InvalidDayName(name.clone()))
    }

    /// The configured default class time.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidTime`] for a malformed
    /// `defaultClassTime` (only reachable on an unvalidated config).
    pub fn default_time(&self) -> Result<NaiveTime> {
        parse_time(&self.default_class_time)
            .ok_or_else(|| ScheduleError::InvalidTime(self.default_class_time.clone()))
    }

    /// Whether `date` falls in a skipped calendar week. A week matches a
    /// skip entry when their ISO weeks coincide.
    pub fn is_skipped(&self, date: NaiveDate) -> bool {
        self.skipped_weeks
            .iter()
            .any(|skip| skip.calendar_week_start_date.date().iso_week() == date.iso_week())
    }
}

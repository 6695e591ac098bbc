//! Error types for course-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A numeric `day` fell outside `1..=classDays.len()`.
    #[error("Invalid day index {index}: valid days are 1-{max}")]
    InvalidDayIndex { index: u32, max: usize },

    /// A string `day` is not one of the seven canonical weekday names.
    #[error("Invalid day name: {0}")]
    InvalidDayName(String),

    /// A time-of-day string does not match strict `HH:MM:SS`.
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    /// The composed local datetime falls in a DST gap and does not exist
    /// in the course timezone.
    #[error("Local time {datetime} does not exist in {time_zone}")]
    NonexistentLocalTime { datetime: String, time_zone: String },

    /// An absolute datetime string could not be parsed.
    #[error("Invalid datetime: {0}")]
    InvalidDateTime(String),

    /// Inverse derivation was asked about an instant before week 1.
    #[error("Date {0} falls before the semester start")]
    BeforeSemesterStart(String),

    /// Inverse derivation was asked about an instant inside a skipped week;
    /// no course week maps onto it.
    #[error("Date {0} falls in a skipped week")]
    DateInSkippedWeek(String),

    /// `classDays` was empty in the course configuration.
    #[error("classDays must not be empty")]
    EmptyClassDays,

    /// `classDays` listed the same weekday twice.
    #[error("Duplicate weekday in classDays: {0}")]
    DuplicateClassDay(String),

    /// Reading the configuration file failed.
    #[error("Failed to read config: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// The configuration file was not valid YAML for [`CourseConfig`].
    ///
    /// [`CourseConfig`]: crate::config::CourseConfig
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;

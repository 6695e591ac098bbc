//! Tests for course configuration loading and validation.

use chrono::NaiveDate;
use course_engine::{CourseConfig, ScheduleError};

const FIXTURE: &str = r#"semesterStartDate: "2024-08-26T00:00:00"
classDays:
  - Tuesday
  - Thursday
defaultClassTime: "14:00:00"
timeZone: America/Chicago
skippedWeeks:
  - calendarWeekStartDate: "2024-11-25T00:00:00"
    reason: Thanksgiving Break
courseName: CS 484
semester: Fall 2024
"#;

fn parsed() -> CourseConfig {
    serde_yaml::from_str(FIXTURE).expect("fixture config must parse")
}

#[test]
fn parses_the_authored_camel_case_config() {
    let config = parsed();

    assert_eq!(
        config.semester_start_date.date(),
        NaiveDate::from_ymd_opt(2024, 8, 26).unwrap()
    );
    assert_eq!(config.class_days, vec!["Tuesday", "Thursday"]);
    assert_eq!(config.default_class_time, "14:00:00");
    assert_eq!(config.time_zone, chrono_tz::America::Chicago);
    assert_eq!(config.skipped_weeks.len(), 1);
    assert_eq!(config.skipped_weeks[0].reason, "Thanksgiving Break");
    assert_eq!(config.course_name, "CS 484");
}

#[test]
fn load_reads_and_validates_a_file() {
    let path = std::env::temp_dir().join("course-engine-config-test.yaml");
    std::fs::write(&path, FIXTURE).expect("fixture file must be writable");

    let config = CourseConfig::load(&path).expect("fixture config must load");
    assert_eq!(config.semester, "Fall 2024");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn unknown_timezone_fails_to_parse() {
    let raw = FIXTURE.replace("America/Chicago", "Mars/Olympus_Mons");
    let result: Result<CourseConfig, _> = serde_yaml::from_str(&raw);
    assert!(result.is_err());
}

#[test]
fn unknown_field_fails_to_parse() {
    let raw = format!("{FIXTURE}semesterEndDate: \"2024-12-13T00:00:00\"\n");
    let result: Result<CourseConfig, _> = serde_yaml::from_str(&raw);
    assert!(result.is_err());
}

#[test]
fn missing_skipped_weeks_defaults_to_empty() {
    let raw: String = FIXTURE
        .lines()
        .take_while(|line| !line.starts_with("skippedWeeks"))
        .chain(["courseName: CS 484", "semester: Fall 2024"])
        .map(|line| format!("{line}\n"))
        .collect();
    let config: CourseConfig = serde_yaml::from_str(&raw).expect("config must parse");
    assert!(config.skipped_weeks.is_empty());
}

#[test]
fn empty_class_days_is_rejected() {
    let mut config = parsed();
    config.class_days.clear();
    assert!(matches!(
        config.validate(),
        Err(ScheduleError::EmptyClassDays)
    ));
}

#[test]
fn non_canonical_class_day_is_rejected() {
    let mut config = parsed();
    config.class_days = vec!["Tues".to_string()];
    assert!(matches!(
        config.validate(),
        Err(ScheduleError::InvalidDayName(_))
    ));
}

#[test]
fn duplicate_class_day_is_rejected() {
    let mut config = parsed();
    config.class_days = vec!["Tuesday".to_string(), "Tuesday".to_string()];
    assert!(matches!(
        config.validate(),
        Err(ScheduleError::DuplicateClassDay(_))
    ));
}

#[test]
fn malformed_default_class_time_is_rejected() {
    let mut config = parsed();
    config.default_class_time = "2pm".to_string();
    assert!(matches!(
        config.validate(),
        Err(ScheduleError::InvalidTime(_))
    ));
}

#[test]
fn skip_matching_is_by_iso_week() {
    let config = parsed();

    // Every day of Thanksgiving week matches, not just the Monday.
    for day in 25..=29 {
        let date = NaiveDate::from_ymd_opt(2024, 11, day).unwrap();
        assert!(config.is_skipped(date), "2024-11-{day} should be skipped");
    }

    // The Mondays on either side do not.
    assert!(!config.is_skipped(NaiveDate::from_ymd_opt(2024, 11, 18).unwrap()));
    assert!(!config.is_skipped(NaiveDate::from_ymd_opt(2024, 12, 2).unwrap()));
}

#[test]
fn class_weekday_bounds() {
    let config = parsed();

    assert_eq!(config.class_weekday(1).unwrap(), chrono::Weekday::Tue);
    assert_eq!(config.class_weekday(2).unwrap(), chrono::Weekday::Thu);
    assert!(matches!(
        config.class_weekday(0),
        Err(ScheduleError::InvalidDayIndex { index: 0, max: 2 })
    ));
    assert!(matches!(
        config.class_weekday(3),
        Err(ScheduleError::InvalidDayIndex { index: 3, max: 2 })
    ));
}

//! Property-based tests for resolution, derivation, and validation.
//!
//! These verify invariants that should hold for *any* structurally valid
//! relative date against the fixture course config, not just the concrete
//! examples in `resolver_tests.rs`.

use chrono::{Datelike, NaiveDate, TimeZone, Utc};
use course_engine::{
    derive_relative, resolve_date, validate_relative, ClassDay, CourseConfig, RelativeDate,
    ScheduleError, SkippedWeek,
};
use proptest::prelude::*;

fn config() -> CourseConfig {
    CourseConfig {
        semester_start_date: NaiveDate::from_ymd_opt(2024, 8, 26)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
        class_days: vec!["Tuesday".to_string(), "Thursday".to_string()],
        default_class_time: "14:00:00".to_string(),
        time_zone: chrono_tz::America::Chicago,
        skipped_weeks: vec![SkippedWeek {
            calendar_week_start_date: NaiveDate::from_ymd_opt(2024, 11, 25)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            reason: "Thanksgiving Break".to_string(),
        }],
        course_name: "CS 484".to_string(),
        semester: "Fall 2024".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_week() -> impl Strategy<Value = u32> {
    1u32..=30
}

fn arb_time() -> impl Strategy<Value = String> {
    (0u32..=23, 0u32..=59, 0u32..=59)
        .prop_map(|(h, m, s)| format!("{:02}:{:02}:{:02}", h, m, s))
}

fn arb_weekday_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Monday".to_string()),
        Just("Tuesday".to_string()),
        Just("Wednesday".to_string()),
        Just("Thursday".to_string()),
        Just("Friday".to_string()),
        Just("Saturday".to_string()),
        Just("Sunday".to_string()),
    ]
}

fn prop_config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: resolve then derive round-trips for class-day dates
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(prop_config())]

    #[test]
    fn resolve_then_derive_round_trips(
        week in arb_week(),
        day in 1u32..=2,
        time in arb_time(),
    ) {
        let config = config();
        let relative = RelativeDate {
            week,
            day: ClassDay::Index(day),
            time: Some(time),
        };

        // DST-gap times are legitimately unresolvable; everything else must
        // round-trip exactly.
        if let Ok(instant) = resolve_date(&relative, &config) {
            let local = instant.with_timezone(&config.time_zone);
            let derived = derive_relative(local, &config).expect("resolved dates must derive");
            prop_assert_eq!(derived, relative);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: the resolved weekday is the requested one
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(prop_config())]

    #[test]
    fn resolved_weekday_matches_request(
        week in arb_week(),
        name in arb_weekday_name(),
        time in arb_time(),
    ) {
        let config = config();
        let relative = RelativeDate {
            week,
            day: ClassDay::Name(name.clone()),
            time: Some(time),
        };

        if let Ok(instant) = resolve_date(&relative, &config) {
            let local = instant.with_timezone(&config.time_zone);
            let expected = course_engine::relative::weekday_from_name(&name).unwrap();
            prop_assert_eq!(
                local.weekday(),
                expected,
                "resolved {:?} for requested {}",
                local,
                name
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: no course week maps onto a skipped calendar week
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(prop_config())]

    #[test]
    fn skipped_week_hosts_no_course_week(
        week in arb_week(),
        day in 1u32..=2,
    ) {
        let config = config();
        let relative = RelativeDate {
            week,
            day: ClassDay::Index(day),
            time: None,
        };

        let instant = resolve_date(&relative, &config).expect("class-day dates must resolve");
        let local = instant.with_timezone(&config.time_zone);
        let skipped = NaiveDate::from_ymd_opt(2024, 11, 25).unwrap();
        prop_assert_ne!(local.date_naive().iso_week(), skipped.iso_week());
    }
}

// ---------------------------------------------------------------------------
// Property 4: course weeks are monotonic in calendar time
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(prop_config())]

    #[test]
    fn later_course_weeks_resolve_later(
        week in 1u32..=29,
        day in 1u32..=2,
    ) {
        let config = config();
        let earlier = resolve_date(
            &RelativeDate { week, day: ClassDay::Index(day), time: None },
            &config,
        )
        .expect("class-day dates must resolve");
        let later = resolve_date(
            &RelativeDate { week: week + 1, day: ClassDay::Index(day), time: None },
            &config,
        )
        .expect("class-day dates must resolve");

        prop_assert!(later > earlier);
    }
}

// ---------------------------------------------------------------------------
// Property 5: derive then resolve reproduces the instant
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(prop_config())]

    #[test]
    fn derive_then_resolve_reproduces_instant(
        day_offset in 0i64..=200,
        hour in 0u32..=23,
        minute in 0u32..=59,
    ) {
        let config = config();
        let date = NaiveDate::from_ymd_opt(2024, 8, 26).unwrap() + chrono::Duration::days(day_offset);
        let naive = date.and_hms_opt(hour, minute, 0).unwrap();

        // Only unambiguous local times are interesting here; gaps and folds
        // are exercised separately.
        let chrono::LocalResult::Single(local) =
            config.time_zone.from_local_datetime(&naive)
        else {
            return Ok(());
        };

        if let Ok(relative) = derive_relative(local, &config) {
            let resolved = resolve_date(&relative, &config).expect("derived dates must resolve");
            prop_assert_eq!(resolved, local.with_timezone(&Utc));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: validator agrees with the resolver's day errors
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(prop_config())]

    #[test]
    fn validator_agrees_with_resolver(
        week in arb_week(),
        day_index in 0u32..=5,
        time in arb_time(),
    ) {
        let config = config();
        let relative = RelativeDate {
            week,
            day: ClassDay::Index(day_index),
            time: Some(time),
        };

        match resolve_date(&relative, &config) {
            Ok(_) => prop_assert!(validate_relative(&relative, &config)),
            Err(ScheduleError::InvalidDayIndex { .. } | ScheduleError::InvalidDayName(_)) => {
                prop_assert!(!validate_relative(&relative, &config));
            }
            // DST-gap failures are orthogonal to structural validity.
            Err(_) => {}
        }
    }
}

mod common;
use animtrack::errors::AppError;
use animtrack::utils::date::week_bounds;
use animtrack::utils::time::parse_duration_minutes;
use chrono::{NaiveDate, Weekday};
use common::d;

#[test]
fn test_parse_duration_forms() {
    assert_eq!(parse_duration_minutes("480").expect("minutes"), 480);
    assert_eq!(parse_duration_minutes("8h").expect("hours"), 480);
    assert_eq!(parse_duration_minutes("7h30").expect("h+m"), 450);
    assert_eq!(parse_duration_minutes("7:30").expect("h:m"), 450);
    assert!(parse_duration_minutes("7h75").is_err());
    assert!(parse_duration_minutes("-5").is_err());
}

#[test]
fn test_parse_duration_rejects_overflow() {
    let huge = format!("{}h", i64::MAX / 10);
    assert!(matches!(
        parse_duration_minutes(&huge),
        Err(AppError::InvalidMinutes(_))
    ));
}

#[test]
fn test_week_bounds() {
    assert_eq!(
        week_bounds(d("2025-03-12"), Weekday::Mon),
        (d("2025-03-10"), d("2025-03-16"))
    );
    assert_eq!(
        week_bounds(d("2025-03-12"), Weekday::Sun),
        (d("2025-03-09"), d("2025-03-15"))
    );
}

#[test]
fn test_week_bounds_clamped_at_calendar_limits() {
    let (_, end) = week_bounds(NaiveDate::MAX, Weekday::Mon);
    assert_eq!(end, NaiveDate::MAX);

    let (start, _) = week_bounds(NaiveDate::MIN, Weekday::Mon);
    assert_eq!(start, NaiveDate::MIN);
}

mod common;
use animtrack::core::school_year::{
    SchoolYear, current_school_year, generate_school_years, is_vacation_day, school_year_of,
};
use animtrack::core::split_vacation_range;
use animtrack::core::splitter::split_with_label;
use animtrack::errors::AppError;
use animtrack::models::vacation::{SplitSubRange, VacationRange};
use chrono::NaiveDate;
use common::d;

#[test]
fn test_toussaint_split_into_three_weeks() {
    let range = VacationRange::new("Toussaint", d("2024-10-19"), d("2024-11-04"));
    let parts = split_vacation_range(&range, true).expect("split");

    assert_eq!(
        parts,
        vec![
            SplitSubRange {
                label: "Toussaint - Week 1".into(),
                start: d("2024-10-19"),
                end: d("2024-10-25"),
            },
            SplitSubRange {
                label: "Toussaint - Week 2".into(),
                start: d("2024-10-26"),
                end: d("2024-11-01"),
            },
            SplitSubRange {
                label: "Toussaint - Week 3".into(),
                start: d("2024-11-02"),
                end: d("2024-11-04"),
            },
        ]
    );
    assert_eq!(parts.iter().map(|p| p.days()).collect::<Vec<_>>(), [7, 7, 3]);
}

#[test]
fn test_split_covers_every_day_once() {
    let start = d("2025-02-01");
    for n in 1..=30i64 {
        let end = start + chrono::Duration::days(n - 1);
        let parts = split_vacation_range(&VacationRange::new("X", start, end), true).expect("split");

        assert_eq!(parts.len() as i64, (n + 6) / 7, "weeks for {n} days");
        assert_eq!(parts.iter().map(|p| p.days()).sum::<i64>(), n);
        assert_eq!(parts.first().map(|p| p.start), Some(start));
        assert_eq!(parts.last().map(|p| p.end), Some(end));
        for pair in parts.windows(2) {
            assert_eq!(pair[0].end.succ_opt(), Some(pair[1].start));
        }
    }
}

#[test]
fn test_exact_week_multiple_has_no_empty_tail() {
    let range = VacationRange::new("Hiver", d("2025-02-10"), d("2025-02-23"));
    let parts = split_vacation_range(&range, true).expect("split");
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[1].end, d("2025-02-23"));
}

#[test]
fn test_no_split_returns_range_unchanged() {
    let range = VacationRange::new("Noël", d("2024-12-21"), d("2025-01-06"));
    let parts = split_vacation_range(&range, false).expect("split");
    assert_eq!(parts, vec![SplitSubRange::from(&range)]);
}

#[test]
fn test_single_day_range() {
    let range = VacationRange::new("Pont", d("2025-05-30"), d("2025-05-30"));
    let parts = split_vacation_range(&range, true).expect("split");
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].label, "Pont - Week 1");
}

#[test]
fn test_split_at_calendar_end() {
    let last = VacationRange::new("X", NaiveDate::MAX, NaiveDate::MAX);
    let parts = split_vacation_range(&last, true).expect("split");
    assert_eq!(parts, vec![SplitSubRange {
        label: "X - Week 1".into(),
        start: NaiveDate::MAX,
        end: NaiveDate::MAX,
    }]);

    let start = NaiveDate::MAX - chrono::Duration::days(9);
    let tail = VacationRange::new("Y", start, NaiveDate::MAX);
    let parts = split_vacation_range(&tail, true).expect("split");
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[1].end, NaiveDate::MAX);
    assert_eq!(parts.iter().map(|p| p.days()).sum::<i64>(), 10);
}

#[test]
fn test_reversed_range_is_rejected() {
    let range = VacationRange::new("Bad", d("2025-03-10"), d("2025-03-01"));
    assert!(matches!(
        split_vacation_range(&range, true),
        Err(AppError::InvalidRange(_))
    ));
    assert!(split_vacation_range(&range, false).is_err());
}

#[test]
fn test_custom_week_label() {
    let range = VacationRange::new("Été", d("2025-07-06"), d("2025-07-20"));
    let parts = split_with_label(&range, true, "Semaine").expect("split");
    assert_eq!(parts[2].label, "Été - Semaine 3");
}

#[test]
fn test_school_year_bounds_and_vacations() {
    let sy = SchoolYear::starting_in(2024).expect("school year");
    assert_eq!(sy.name, "2024-2025");
    assert_eq!((sy.start, sy.end), (d("2024-09-01"), d("2025-07-31")));

    let labels: Vec<_> = sy.vacations.iter().map(|v| v.label.as_str()).collect();
    assert_eq!(labels, ["Toussaint", "Noël", "Hiver", "Printemps", "Été"]);

    let toussaint = sy.find_vacation("toussaint").expect("toussaint");
    assert_eq!((toussaint.start, toussaint.end), (d("2024-10-19"), d("2024-11-04")));
    assert!(sy.find_vacation("Carnaval").is_none());
}

#[test]
fn test_school_year_lookup() {
    assert_eq!(school_year_of(d("2024-09-01")), 2024);
    assert_eq!(school_year_of(d("2025-07-31")), 2024);
    assert_eq!(school_year_of(d("2025-08-15")), 2024);

    let years = generate_school_years(2023, 3);
    assert_eq!(years.len(), 3);
    assert_eq!(
        current_school_year(&years, d("2025-01-15")).map(|y| y.name.as_str()),
        Some("2024-2025")
    );
    assert!(current_school_year(&years, d("2025-08-15")).is_none());
}

#[test]
fn test_vacation_day() {
    let sy = SchoolYear::starting_in(2024).expect("school year");
    assert!(is_vacation_day(d("2024-12-25"), &sy.vacations));
    assert!(!is_vacation_day(d("2024-12-20"), &sy.vacations));
}

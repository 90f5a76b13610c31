mod common;
use animtrack::core::calculator::aggregator::{aggregate_day, aggregate_range, interval_minutes};
use animtrack::core::{normalize, rollup_days, rollup_period};
use animtrack::models::aggregate::{ClockState, DailyAggregate};
use animtrack::models::event_kind::EventKind::{self, *};
use animtrack::models::schedule::DaySchedule;
use animtrack::utils::formatting::{format_difference, format_minutes};
use common::{d, dt, ev};

const DAY: &str = "2025-03-10";

fn day(events: &[(EventKind, &str)]) -> DailyAggregate {
    let evs: Vec<_> = events.iter().map(|(k, t)| ev("alice", *k, DAY, t)).collect();
    aggregate_day("alice", d(DAY), &evs)
}

#[test]
fn test_normalize_sorts_and_is_idempotent() {
    let evs = vec![
        ev("alice", Departure, DAY, "17:00"),
        ev("alice", Arrival, DAY, "09:00"),
        ev("alice", BreakStart, DAY, "12:00"),
    ];

    let once = normalize(&evs);
    let times: Vec<_> = once.iter().map(|e| e.time_str()).collect();
    assert_eq!(times, ["09:00", "12:00", "17:00"]);
    assert_eq!(normalize(&once), once);
}

#[test]
fn test_normalize_keeps_ties_in_input_order() {
    let evs = vec![
        ev("alice", BreakStart, DAY, "12:00"),
        ev("alice", Arrival, DAY, "09:00"),
        ev("alice", BreakEnd, DAY, "12:00"),
    ];

    let kinds: Vec<_> = normalize(&evs).iter().map(|e| e.kind).collect();
    assert_eq!(kinds, [Arrival, BreakStart, BreakEnd]);
}

#[test]
fn test_full_day_without_break() {
    let agg = day(&[(Arrival, "09:00"), (Departure, "17:00")]);
    assert_eq!(agg.worked_minutes, 480);
    assert!(!agg.is_open_ended);
    assert_eq!(agg.state, ClockState::Idle);
    assert_eq!(agg.first_arrival, Some(dt(DAY, "09:00")));
}

#[test]
fn test_single_break_is_subtracted() {
    let agg = day(&[
        (Arrival, "09:00"),
        (BreakStart, "12:00"),
        (BreakEnd, "12:45"),
        (Departure, "17:00"),
    ]);
    assert_eq!(agg.worked_minutes, 180 + 255);
    assert_eq!(agg.intervals.len(), 2);
}

#[test]
fn test_multiple_breaks() {
    let agg = day(&[
        (Arrival, "08:00"),
        (BreakStart, "10:00"),
        (BreakEnd, "10:15"),
        (BreakStart, "12:00"),
        (BreakEnd, "12:30"),
        (Departure, "16:00"),
    ]);
    assert_eq!(agg.worked_minutes, 435);
    assert!(!agg.is_open_ended);
}

#[test]
fn test_arrival_alone_is_open_ended() {
    let agg = day(&[(Arrival, "09:00")]);
    assert_eq!(agg.worked_minutes, 0);
    assert!(agg.is_open_ended);
    assert_eq!(agg.state, ClockState::Working);
}

#[test]
fn test_day_ending_on_break_keeps_closed_interval() {
    let agg = day(&[(Arrival, "09:00"), (BreakStart, "11:30")]);
    assert_eq!(agg.worked_minutes, 150);
    assert!(agg.is_open_ended);
    assert_eq!(agg.state, ClockState::OnBreak);
}

#[test]
fn test_unmatched_transitions_are_ignored() {
    // departure before any arrival, second arrival while working,
    // break_end while working, departure while on break
    let agg = day(&[
        (Departure, "08:00"),
        (Arrival, "09:00"),
        (Arrival, "09:30"),
        (BreakEnd, "10:00"),
        (BreakStart, "12:00"),
        (Departure, "12:10"),
        (BreakEnd, "13:00"),
        (Departure, "17:00"),
    ]);
    assert_eq!(agg.worked_minutes, 180 + 240);
    assert!(!agg.is_open_ended);
}

#[test]
fn test_unknown_kind_does_not_abort_the_day() {
    let agg = day(&[(Arrival, "09:00"), (Unknown, "10:00"), (Departure, "17:00")]);
    assert_eq!(agg.worked_minutes, 480);
}

#[test]
fn test_unsorted_input_gives_same_result() {
    let agg = day(&[
        (Departure, "17:00"),
        (BreakEnd, "12:30"),
        (Arrival, "09:00"),
        (BreakStart, "12:00"),
    ]);
    assert_eq!(agg.worked_minutes, 450);
}

#[test]
fn test_other_subjects_and_days_are_skipped() {
    let evs = vec![
        ev("alice", Arrival, DAY, "09:00"),
        ev("bob", Departure, DAY, "10:00"),
        ev("alice", Departure, "2025-03-11", "10:00"),
        ev("alice", Departure, DAY, "11:00"),
    ];
    let agg = aggregate_day("alice", d(DAY), &evs);
    assert_eq!(agg.worked_minutes, 120);
}

#[test]
fn test_interval_minutes_truncates_and_never_goes_negative() {
    assert_eq!(interval_minutes(dt(DAY, "09:00"), dt(DAY, "09:00")), 0);
    assert_eq!(interval_minutes(dt(DAY, "10:00"), dt(DAY, "09:00")), 0);

    let start = dt(DAY, "09:00");
    let end = start + chrono::Duration::seconds(119);
    assert_eq!(interval_minutes(start, end), 1);
}

#[test]
fn test_conservation_over_well_formed_days() {
    for (t0, t1, t2, t3) in [
        ("07:05", "09:59", "10:20", "15:47"),
        ("09:00", "09:01", "09:02", "09:03"),
        ("00:00", "12:00", "12:00", "23:59"),
    ] {
        let agg = day(&[(Arrival, t0), (BreakStart, t1), (BreakEnd, t2), (Departure, t3)]);
        let expected =
            (dt(DAY, t1) - dt(DAY, t0)).num_minutes() + (dt(DAY, t3) - dt(DAY, t2)).num_minutes();
        assert_eq!(agg.worked_minutes, expected);
    }
}

#[test]
fn test_aggregate_range_fills_empty_days() {
    let evs = vec![
        ev("alice", Arrival, "2025-03-10", "09:00"),
        ev("alice", Departure, "2025-03-10", "17:00"),
        ev("alice", Arrival, "2025-03-12", "08:00"),
    ];
    let days = aggregate_range("alice", &evs, d("2025-03-10"), d("2025-03-12"));

    assert_eq!(days.len(), 3);
    assert_eq!(days[0].worked_minutes, 480);
    assert_eq!(days[1], DailyAggregate::empty("alice", d("2025-03-11")));
    assert!(days[2].is_open_ended);
}

#[test]
fn test_rollup_zero_fills_missing_sides() {
    let aggregates = vec![
        aggregate_day(
            "alice",
            d("2025-03-10"),
            &[
                ev("alice", Arrival, "2025-03-10", "09:00"),
                ev("alice", Departure, "2025-03-10", "18:00"),
            ],
        ),
        aggregate_day(
            "alice",
            d("2025-03-12"),
            &[
                ev("alice", Arrival, "2025-03-12", "09:00"),
                ev("alice", Departure, "2025-03-12", "11:00"),
            ],
        ),
    ];
    let schedules = vec![
        DaySchedule::new("alice", d("2025-03-10"), 480),
        DaySchedule::new("alice", d("2025-03-11"), 420),
    ];

    let lines = rollup_days(&aggregates, &schedules, d("2025-03-10"), d("2025-03-12"));
    assert_eq!(lines[0].difference_minutes, 60);
    assert_eq!((lines[1].planned_minutes, lines[1].actual_minutes), (420, 0));
    assert_eq!((lines[2].planned_minutes, lines[2].actual_minutes), (0, 120));

    let r = rollup_period(&aggregates, &schedules, d("2025-03-10"), d("2025-03-12"));
    assert_eq!(r.planned_minutes, 900);
    assert_eq!(r.actual_minutes, 660);
    assert_eq!(r.difference_minutes, -240);
}

#[test]
fn test_rollup_ignores_records_outside_range_and_duplicates() {
    let schedules = vec![
        DaySchedule::new("alice", d("2025-03-09"), 999),
        DaySchedule::new("alice", d("2025-03-10"), 480),
        DaySchedule::new("alice", d("2025-03-10"), 60),
    ];

    let r = rollup_period(&[], &schedules, d("2025-03-10"), d("2025-03-10"));
    assert_eq!(r.planned_minutes, 480);
    assert_eq!(r.actual_minutes, 0);
    assert_eq!(r.difference_minutes, -480);
}

#[test]
fn test_format_minutes() {
    assert_eq!(format_minutes(0), "0h00");
    assert_eq!(format_minutes(480), "8h00");
    assert_eq!(format_minutes(435), "7h15");
    assert_eq!(format_minutes(-45), "-0h45");
    assert_eq!(format_minutes(-125), "-2h05");
    assert_eq!(format_minutes(6000), "100h00");
    assert_eq!(format_difference(30), "+0h30");
    assert_eq!(format_difference(-30), "-0h30");
}

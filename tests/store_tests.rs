mod common;
use animtrack::core::checks::TimesheetIssue;
use animtrack::core::clock::ClockLogic;
use animtrack::core::logic::Core;
use animtrack::core::periods::PeriodLogic;
use animtrack::core::presence::{Presence, count_present};
use animtrack::core::schedule::ScheduleLogic;
use animtrack::db::pool::DbPool;
use animtrack::db::queries::{load_event, load_periods};
use animtrack::db::store::TimesheetStore;
use animtrack::errors::AppError;
use animtrack::models::event_kind::EventKind::*;
use animtrack::models::schedule::DaySchedule;
use animtrack::models::vacation::VacationRange;
use common::{d, dt, ev};

fn pool() -> DbPool {
    DbPool::in_memory().expect("in-memory db")
}

#[test]
fn test_events_round_trip_through_store() {
    let mut pool = pool();
    let id = pool
        .record_event(&ev("alice", BreakStart, "2025-03-10", "12:00"))
        .expect("insert");

    let stored = load_event(&pool.conn, id).expect("load").expect("present");
    assert_eq!(stored.id, id);
    assert_eq!(stored.kind, BreakStart);
    assert_eq!(stored.occurred_at, dt("2025-03-10", "12:00"));
    assert_eq!(stored.source, "cli");
}

#[test]
fn test_events_are_filtered_by_subject_and_date() {
    let mut pool = pool();
    for e in [
        ev("alice", Arrival, "2025-03-09", "09:00"),
        ev("alice", Arrival, "2025-03-10", "09:00"),
        ev("bob", Arrival, "2025-03-10", "09:00"),
        ev("alice", Arrival, "2025-03-11", "09:00"),
    ] {
        pool.record_event(&e).expect("insert");
    }

    let evs = pool
        .events_for("alice", d("2025-03-10"), d("2025-03-11"))
        .expect("load");
    assert_eq!(evs.len(), 2);
    assert!(evs.iter().all(|e| e.subject_id == "alice"));

    let all = pool.events_between(d("2025-03-10"), d("2025-03-10")).expect("load");
    assert_eq!(all.len(), 2);
}

#[test]
fn test_unknown_stored_kind_is_read_and_ignored() {
    let mut pool = pool();
    pool.record_event(&ev("alice", Arrival, "2025-03-10", "09:00")).expect("insert");
    pool.conn
        .execute(
            "INSERT INTO time_events (subject_id, kind, date, occurred_at, source, created_at)
             VALUES ('alice', 'lunch', '2025-03-10', '2025-03-10 12:00:00', 'import', '')",
            [],
        )
        .expect("raw insert");
    pool.record_event(&ev("alice", Departure, "2025-03-10", "17:00")).expect("insert");

    let agg = Core::build_daily_summary(&pool, "alice", d("2025-03-10")).expect("summary");
    assert_eq!(agg.worked_minutes, 480);
}

#[test]
fn test_unreadable_timestamp_is_skipped() {
    let mut pool = pool();
    pool.record_event(&ev("alice", Arrival, "2025-03-10", "09:00")).expect("insert");
    pool.conn
        .execute(
            "INSERT INTO time_events (subject_id, kind, date, occurred_at, source, created_at)
             VALUES ('alice', 'break_start', '2025-03-10', 'garbage', 'import', '')",
            [],
        )
        .expect("raw insert");
    pool.record_event(&ev("alice", Departure, "2025-03-10", "17:00")).expect("insert");

    let agg = Core::build_daily_summary(&pool, "alice", d("2025-03-10")).expect("summary");
    assert_eq!(agg.worked_minutes, 480);
    assert!(!agg.is_open_ended);

    let evs = pool
        .events_for("alice", d("2025-03-10"), d("2025-03-10"))
        .expect("load");
    assert_eq!(evs.len(), 2);
    assert!(load_event(&pool.conn, 2).expect("load").is_none());
}

#[test]
fn test_schedule_upsert_replaces_planned_minutes() {
    let mut pool = pool();
    pool.save_schedule(&DaySchedule::new("alice", d("2025-03-10"), 480)).expect("save");
    pool.save_schedule(&DaySchedule::new("alice", d("2025-03-10"), 240)).expect("save");

    let s = pool
        .schedules_for("alice", d("2025-03-10"), d("2025-03-10"))
        .expect("load");
    assert_eq!(s.len(), 1);
    assert_eq!(s[0].planned_minutes, 240);
}

#[test]
fn test_negative_plan_is_rejected() {
    let mut pool = pool();
    let res = ScheduleLogic::set(&mut pool, "alice", &[d("2025-03-10")], -10);
    assert!(matches!(res, Err(AppError::InvalidMinutes(_))));
}

#[test]
fn test_period_summary_from_store() {
    let mut pool = pool();
    ScheduleLogic::set(&mut pool, "alice", &[d("2025-03-10"), d("2025-03-11")], 480).expect("plan");
    ClockLogic::record(&mut pool, "alice", Arrival, dt("2025-03-10", "09:00")).expect("clock");
    ClockLogic::record(&mut pool, "alice", Departure, dt("2025-03-10", "18:00")).expect("clock");

    let summary =
        Core::build_period_summary(&pool, "alice", d("2025-03-10"), d("2025-03-11")).expect("summary");
    assert_eq!(summary.days.len(), 2);
    assert_eq!(summary.rollup.planned_minutes, 960);
    assert_eq!(summary.rollup.actual_minutes, 540);
    assert_eq!(summary.rollup.difference_minutes, -420);
}

#[test]
fn test_check_reports_missing_and_incomplete_days() {
    let mut pool = pool();
    ScheduleLogic::set(
        &mut pool,
        "alice",
        &[d("2025-03-10"), d("2025-03-11"), d("2025-03-12")],
        480,
    )
    .expect("plan");
    ClockLogic::record(&mut pool, "alice", Arrival, dt("2025-03-10", "09:00")).expect("clock");
    ClockLogic::record(&mut pool, "alice", Departure, dt("2025-03-10", "17:00")).expect("clock");
    ClockLogic::record(&mut pool, "alice", Arrival, dt("2025-03-12", "09:00")).expect("clock");

    let issues =
        Core::check_timesheets(&pool, "alice", d("2025-03-10"), d("2025-03-13")).expect("check");
    let found: Vec<_> = issues.iter().map(|i| (i.date, i.issue)).collect();
    assert_eq!(
        found,
        [
            (d("2025-03-11"), TimesheetIssue::Missing),
            (d("2025-03-12"), TimesheetIssue::Incomplete),
        ]
    );
}

#[test]
fn test_presence_by_subject() {
    let mut pool = pool();
    for e in [
        ev("carol", Arrival, "2025-03-10", "08:00"),
        ev("carol", Departure, "2025-03-10", "12:00"),
        ev("alice", Arrival, "2025-03-10", "09:00"),
        ev("bob", Arrival, "2025-03-10", "09:15"),
        ev("bob", BreakStart, "2025-03-10", "10:15"),
    ] {
        pool.record_event(&e).expect("insert");
    }

    let lines = Core::presence(&pool, d("2025-03-10")).expect("presence");
    let states: Vec<_> = lines
        .iter()
        .map(|l| (l.subject_id.as_str(), l.presence))
        .collect();
    assert_eq!(
        states,
        [
            ("alice", Presence::Present),
            ("bob", Presence::OnBreak),
            ("carol", Presence::Absent),
        ]
    );
    assert_eq!(count_present(&lines), 2);
    assert_eq!(lines[1].worked_minutes, 60);
}

#[test]
fn test_delete_event() {
    let mut pool = pool();
    let id = ClockLogic::record(&mut pool, "alice", Arrival, dt("2025-03-10", "09:00")).expect("clock");

    let removed = ClockLogic::delete(&mut pool, id).expect("delete");
    assert_eq!(removed.kind, Arrival);
    assert!(load_event(&pool.conn, id).expect("load").is_none());
    assert!(matches!(
        ClockLogic::delete(&mut pool, id),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_saved_periods_carry_school_year() {
    let mut pool = pool();
    let range = VacationRange::new("Toussaint", d("2024-10-19"), d("2024-11-04"));
    let parts = PeriodLogic::create(Some(&mut pool), &range, true, "Week").expect("create");
    assert_eq!(parts.len(), 3);

    let stored = load_periods(&pool.conn).expect("load");
    assert_eq!(stored.len(), 3);
    assert_eq!(stored[0].name, "Toussaint - Week 1");
    assert!(stored.iter().all(|p| p.school_year == "2024-2025"));
}

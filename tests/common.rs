#![allow(dead_code)]
use animtrack::models::event_kind::EventKind;
use animtrack::models::time_event::TimeEvent;
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn atr() -> Command {
    cargo_bin_cmd!("animtrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_animtrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    atr()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn clock(db_path: &str, subject: &str, kind: &str, date: &str, at: &str) {
    atr()
        .args([
            "--db", db_path, "clock", kind, "--subject", subject, "--date", date, "--at", at,
        ])
        .assert()
        .success();
}

/// Init the DB and record a regular day (09:00-17:00, 12:00-12:30 break)
/// for alice on 2025-03-10.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    clock(db_path, "alice", "arrival", "2025-03-10", "09:00");
    clock(db_path, "alice", "break_start", "2025-03-10", "12:00");
    clock(db_path, "alice", "break_end", "2025-03-10", "12:30");
    clock(db_path, "alice", "departure", "2025-03-10", "17:00");
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn dt(date: &str, time: &str) -> NaiveDateTime {
    d(date).and_time(NaiveTime::parse_from_str(time, "%H:%M").expect("valid time"))
}

pub fn ev(subject: &str, kind: EventKind, date: &str, time: &str) -> TimeEvent {
    TimeEvent::new(subject, kind, dt(date, time))
}

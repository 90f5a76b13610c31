use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// State of a subject's clock while walking one day of events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockState {
    #[default]
    Idle,
    Working,
    OnBreak,
}

impl ClockState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ClockState::Idle)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClockState::Idle => "idle",
            ClockState::Working => "working",
            ClockState::OnBreak => "on break",
        }
    }
}

/// A completed working interval (arrival/break_end → break_start/departure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub minutes: i64,
}

/// Worked time of one subject on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub subject_id: String,
    pub worked_minutes: i64,
    /// The day ended while still working or on break (no closing departure).
    pub is_open_ended: bool,
    pub state: ClockState,
    pub first_arrival: Option<NaiveDateTime>,
    pub intervals: Vec<WorkInterval>,
}

impl DailyAggregate {
    pub fn empty(subject_id: &str, date: NaiveDate) -> Self {
        Self {
            date,
            subject_id: subject_id.to_string(),
            worked_minutes: 0,
            is_open_ended: false,
            state: ClockState::Idle,
            first_arrival: None,
            intervals: Vec::new(),
        }
    }
}

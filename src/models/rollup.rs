use chrono::NaiveDate;
use serde::Serialize;

/// Planned vs actual totals over an inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodRollup {
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
    pub planned_minutes: i64,
    pub actual_minutes: i64,
    pub difference_minutes: i64, // actual - planned
}

/// One row of a period view (monthly schedule grid, weekly summary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayLine {
    pub date: NaiveDate,
    pub planned_minutes: i64,
    pub actual_minutes: i64,
    pub difference_minutes: i64,
    pub is_open_ended: bool,
}

/// Rollup plus the day lines it was summed from.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodSummary {
    pub subject_id: String,
    pub rollup: PeriodRollup,
    pub days: Vec<DayLine>,
}

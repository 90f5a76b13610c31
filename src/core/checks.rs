//! Timesheet completeness checks over a date range.

use crate::models::rollup::DayLine;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimesheetIssue {
    /// Work was planned but nothing was recorded.
    Missing,
    /// Recording started but the day never reached a departure.
    Incomplete,
}

impl TimesheetIssue {
    pub fn label(&self) -> &'static str {
        match self {
            TimesheetIssue::Missing => "missing",
            TimesheetIssue::Incomplete => "incomplete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayIssue {
    pub date: NaiveDate,
    pub issue: TimesheetIssue,
    pub planned_minutes: i64,
}

/// Scan period lines for days needing attention.
///
/// `recorded` tells whether any event exists for a date; a day with planned
/// minutes and no event at all is missing, an open-ended day is incomplete.
pub fn find_issues<F>(days: &[DayLine], recorded: F) -> Vec<DayIssue>
where
    F: Fn(NaiveDate) -> bool,
{
    days.iter()
        .filter_map(|d| {
            let issue = if d.is_open_ended {
                TimesheetIssue::Incomplete
            } else if d.planned_minutes > 0 && !recorded(d.date) {
                TimesheetIssue::Missing
            } else {
                return None;
            };

            Some(DayIssue {
                date: d.date,
                issue,
                planned_minutes: d.planned_minutes,
            })
        })
        .collect()
}

use crate::models::rollup::DayLine;
use crate::models::time_event::TimeEvent;
use crate::utils::formatting::format_minutes;
use serde::Serialize;

/// Flat row for event exports.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: i64,
    pub subject_id: String,
    pub date: String,
    pub time: String,
    pub kind: String,
    pub source: String,
}

impl From<&TimeEvent> for EventExport {
    fn from(ev: &TimeEvent) -> Self {
        Self {
            id: ev.id,
            subject_id: ev.subject_id.clone(),
            date: ev.date_str(),
            time: ev.occurred_at.format("%H:%M:%S").to_string(),
            kind: ev.kind.to_db_str().to_string(),
            source: ev.source.clone(),
        }
    }
}

/// Flat row for per-day summary exports. Minutes are kept both raw and
/// rendered so spreadsheets can sum the raw columns.
#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub subject_id: String,
    pub date: String,
    pub planned_minutes: i64,
    pub actual_minutes: i64,
    pub difference_minutes: i64,
    pub planned: String,
    pub actual: String,
    pub difference: String,
    pub open_ended: bool,
}

impl DayExport {
    pub fn from_line(subject_id: &str, d: &DayLine) -> Self {
        Self {
            subject_id: subject_id.to_string(),
            date: d.date.format("%Y-%m-%d").to_string(),
            planned_minutes: d.planned_minutes,
            actual_minutes: d.actual_minutes,
            difference_minutes: d.difference_minutes,
            planned: format_minutes(d.planned_minutes),
            actual: format_minutes(d.actual_minutes),
            difference: format_minutes(d.difference_minutes),
            open_ended: d.is_open_ended,
        }
    }
}

use std::collections::BTreeSet;

use crate::core::calculator::aggregator::aggregate_day;
use crate::models::aggregate::ClockState;
use crate::models::time_event::TimeEvent;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Present,
    OnBreak,
    Absent,
}

impl Presence {
    pub fn label(&self) -> &'static str {
        match self {
            Presence::Present => "present",
            Presence::OnBreak => "on break",
            Presence::Absent => "absent",
        }
    }
}

impl From<ClockState> for Presence {
    fn from(s: ClockState) -> Self {
        match s {
            ClockState::Working => Presence::Present,
            ClockState::OnBreak => Presence::OnBreak,
            ClockState::Idle => Presence::Absent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresenceLine {
    pub subject_id: String,
    pub presence: Presence,
    pub arrived_at: Option<NaiveDateTime>,
    pub worked_minutes: i64,
}

/// Presence of every subject that clocked anything on `date`,
/// ordered by subject id.
pub fn presence_on(date: NaiveDate, events: &[TimeEvent]) -> Vec<PresenceLine> {
    let subjects: BTreeSet<&str> = events
        .iter()
        .filter(|e| e.date() == date)
        .map(|e| e.subject_id.as_str())
        .collect();

    subjects
        .into_iter()
        .map(|subject| {
            let agg = aggregate_day(subject, date, events);
            PresenceLine {
                subject_id: subject.to_string(),
                presence: Presence::from(agg.state),
                arrived_at: agg.first_arrival,
                worked_minutes: agg.worked_minutes,
            }
        })
        .collect()
}

pub fn count_present(lines: &[PresenceLine]) -> usize {
    lines
        .iter()
        .filter(|l| l.presence != Presence::Absent)
        .count()
}

//! Turns one subject's clock events for a day into worked minutes.
//!
//! The walk is a fold over the time-ordered events with three states:
//!
//! ```text
//!   Idle --arrival--> Working --break_start--> OnBreak
//!                     Working <--break_end---- OnBreak
//!   Idle <--departure-- Working
//! ```
//!
//! Every other (state, event) combination is ignored, and so are unknown
//! event kinds. A day that ends in `Working` or `OnBreak` is flagged
//! open-ended and only counts its completed intervals.

use std::collections::BTreeMap;

use crate::core::calculator::normalizer::normalize;
use crate::models::aggregate::{ClockState, DailyAggregate, WorkInterval};
use crate::models::event_kind::EventKind;
use crate::models::time_event::TimeEvent;
use crate::utils::date::days_in_range;
use chrono::{NaiveDate, NaiveDateTime};

/// Accumulator of the day fold.
#[derive(Debug, Clone, Default)]
pub struct DayReducer {
    pub state: ClockState,
    pub current_start: Option<NaiveDateTime>,
    pub first_arrival: Option<NaiveDateTime>,
    pub intervals: Vec<WorkInterval>,
}

impl DayReducer {
    /// Apply one event and return the next accumulator.
    pub fn step(mut self, ev: &TimeEvent) -> Self {
        let at = ev.occurred_at;

        match (self.state, ev.kind) {
            (ClockState::Idle, EventKind::Arrival) => {
                self.state = ClockState::Working;
                self.current_start = Some(at);
                self.first_arrival.get_or_insert(at);
            }
            (ClockState::Working, EventKind::BreakStart) => {
                self.close_interval(at);
                self.state = ClockState::OnBreak;
            }
            (ClockState::OnBreak, EventKind::BreakEnd) => {
                self.state = ClockState::Working;
                self.current_start = Some(at);
            }
            (ClockState::Working, EventKind::Departure) => {
                self.close_interval(at);
                self.state = ClockState::Idle;
            }
            // Unmatched transitions contribute nothing.
            _ => {}
        }

        self
    }

    fn close_interval(&mut self, end: NaiveDateTime) {
        if let Some(start) = self.current_start.take() {
            self.intervals.push(WorkInterval {
                start,
                end,
                minutes: interval_minutes(start, end),
            });
        }
    }

    pub fn worked_minutes(&self) -> i64 {
        self.intervals.iter().map(|i| i.minutes).sum()
    }

    /// Seal the fold into a DailyAggregate.
    pub fn finish(self, subject_id: &str, date: NaiveDate) -> DailyAggregate {
        DailyAggregate {
            date,
            subject_id: subject_id.to_string(),
            worked_minutes: self.worked_minutes(),
            is_open_ended: self.state.is_open(),
            state: self.state,
            first_arrival: self.first_arrival,
            intervals: self.intervals,
        }
    }
}

/// Whole minutes between two instants, truncated; zero when `end <= start`.
pub fn interval_minutes(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    if end <= start {
        return 0;
    }
    (end - start).num_minutes()
}

/// Run the reducer over events that are already time-ordered.
pub fn reduce(events: &[TimeEvent]) -> DayReducer {
    events.iter().fold(DayReducer::default(), DayReducer::step)
}

/// Aggregate one subject's day.
///
/// Events of other subjects or other calendar dates are skipped, the rest
/// are sorted before the walk.
pub fn aggregate_day(subject_id: &str, date: NaiveDate, events: &[TimeEvent]) -> DailyAggregate {
    let day_events: Vec<TimeEvent> = events
        .iter()
        .filter(|e| e.subject_id == subject_id && e.date() == date)
        .cloned()
        .collect();

    reduce(&normalize(&day_events)).finish(subject_id, date)
}

/// One aggregate per calendar date of `[start, end]`, empty days included.
pub fn aggregate_range(
    subject_id: &str,
    events: &[TimeEvent],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DailyAggregate> {
    let mut by_day: BTreeMap<NaiveDate, Vec<TimeEvent>> = BTreeMap::new();
    for ev in events.iter().filter(|e| e.subject_id == subject_id) {
        by_day.entry(ev.date()).or_default().push(ev.clone());
    }

    days_in_range(start, end)
        .into_iter()
        .map(|d| match by_day.get(&d) {
            Some(day_events) => reduce(&normalize(day_events)).finish(subject_id, d),
            None => DailyAggregate::empty(subject_id, d),
        })
        .collect()
}

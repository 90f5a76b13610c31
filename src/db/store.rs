//! Boundary between the calculator and wherever events and schedules live.
//!
//! The calculator only needs filtered reads and simple writes on two
//! collections. `DbPool` implements them on SQLite; another backend
//! (a remote document store, a fixture) only has to implement this trait.

use crate::db::queries;
use crate::errors::AppResult;
use crate::models::schedule::DaySchedule;
use crate::models::time_event::TimeEvent;
use chrono::NaiveDate;

use super::pool::DbPool;

pub trait TimesheetStore {
    /// Events of `subject_id` dated within `[start, end]`.
    fn events_for(&self, subject_id: &str, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<TimeEvent>>;

    /// Events of every subject dated within `[start, end]`.
    fn events_between(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<TimeEvent>>;

    /// Schedules of `subject_id` dated within `[start, end]`.
    fn schedules_for(&self, subject_id: &str, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<DaySchedule>>;

    /// Store a new event, returning its id.
    fn record_event(&mut self, ev: &TimeEvent) -> AppResult<i64>;

    /// Create or replace a day's planned minutes.
    fn save_schedule(&mut self, s: &DaySchedule) -> AppResult<()>;
}

impl TimesheetStore for DbPool {
    fn events_for(&self, subject_id: &str, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<TimeEvent>> {
        queries::load_subject_events(&self.conn, subject_id, &start, &end)
    }

    fn events_between(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<TimeEvent>> {
        queries::load_events_between(&self.conn, &start, &end)
    }

    fn schedules_for(&self, subject_id: &str, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<DaySchedule>> {
        queries::load_schedules(&self.conn, subject_id, &start, &end)
    }

    fn record_event(&mut self, ev: &TimeEvent) -> AppResult<i64> {
        queries::insert_event(&self.conn, ev)
    }

    fn save_schedule(&mut self, s: &DaySchedule) -> AppResult<()> {
        queries::upsert_schedule(&self.conn, s)
    }
}

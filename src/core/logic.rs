use crate::core::calculator::{aggregator, rollup};
use crate::core::checks::{DayIssue, find_issues};
use crate::core::presence::{PresenceLine, presence_on};
use crate::db::store::TimesheetStore;
use crate::errors::AppResult;
use crate::models::aggregate::DailyAggregate;
use crate::models::rollup::PeriodSummary;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Fetch-then-compute entry points shared by the commands.
pub struct Core;

impl Core {
    pub fn build_daily_summary<S: TimesheetStore>(
        store: &S,
        subject_id: &str,
        date: NaiveDate,
    ) -> AppResult<DailyAggregate> {
        let events = store.events_for(subject_id, date, date)?;
        Ok(aggregator::aggregate_day(subject_id, date, &events))
    }

    pub fn build_daily_range<S: TimesheetStore>(
        store: &S,
        subject_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DailyAggregate>> {
        let events = store.events_for(subject_id, start, end)?;
        Ok(aggregator::aggregate_range(subject_id, &events, start, end))
    }

    /// Planned vs actual for `[start, end]`, with one line per day.
    pub fn build_period_summary<S: TimesheetStore>(
        store: &S,
        subject_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<PeriodSummary> {
        let aggregates = Self::build_daily_range(store, subject_id, start, end)?;
        let schedules = store.schedules_for(subject_id, start, end)?;

        let days = rollup::rollup_days(&aggregates, &schedules, start, end);
        let rollup = rollup::sum_lines(&days, start, end);

        Ok(PeriodSummary {
            subject_id: subject_id.to_string(),
            rollup,
            days,
        })
    }

    pub fn presence<S: TimesheetStore>(store: &S, date: NaiveDate) -> AppResult<Vec<PresenceLine>> {
        let events = store.events_between(date, date)?;
        Ok(presence_on(date, &events))
    }

    /// Missing and incomplete days of a subject in `[start, end]`.
    pub fn check_timesheets<S: TimesheetStore>(
        store: &S,
        subject_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DayIssue>> {
        let events = store.events_for(subject_id, start, end)?;
        let recorded: BTreeSet<NaiveDate> = events.iter().map(|e| e.date()).collect();

        let aggregates = aggregator::aggregate_range(subject_id, &events, start, end);
        let schedules = store.schedules_for(subject_id, start, end)?;
        let days = rollup::rollup_days(&aggregates, &schedules, start, end);

        Ok(find_issues(&days, |d| recorded.contains(&d)))
    }
}

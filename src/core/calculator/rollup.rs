use std::collections::BTreeMap;

use crate::models::aggregate::DailyAggregate;
use crate::models::rollup::{DayLine, PeriodRollup};
use crate::models::schedule::DaySchedule;
use crate::utils::date::days_in_range;
use chrono::NaiveDate;

/// Index records by date, keeping the first one seen for each date.
fn first_by_date<T, F>(items: &[T], date_of: F) -> BTreeMap<NaiveDate, &T>
where
    F: Fn(&T) -> NaiveDate,
{
    let mut map = BTreeMap::new();
    for it in items {
        map.entry(date_of(it)).or_insert(it);
    }
    map
}

/// Planned vs actual for each date of `[range_start, range_end]`.
///
/// A date with no schedule counts 0 planned minutes, a date with no
/// aggregate counts 0 actual minutes.
pub fn rollup_days(
    aggregates: &[DailyAggregate],
    schedules: &[DaySchedule],
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Vec<DayLine> {
    let actual = first_by_date(aggregates, |a| a.date);
    let planned = first_by_date(schedules, |s| s.date);

    days_in_range(range_start, range_end)
        .into_iter()
        .map(|date| {
            let agg = actual.get(&date);
            let planned_minutes = planned.get(&date).map_or(0, |s| s.planned_minutes);
            let actual_minutes = agg.map_or(0, |a| a.worked_minutes);

            DayLine {
                date,
                planned_minutes,
                actual_minutes,
                difference_minutes: actual_minutes - planned_minutes,
                is_open_ended: agg.is_some_and(|a| a.is_open_ended),
            }
        })
        .collect()
}

/// Sum the day lines of a range into a single rollup.
pub fn rollup_period(
    aggregates: &[DailyAggregate],
    schedules: &[DaySchedule],
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> PeriodRollup {
    let days = rollup_days(aggregates, schedules, range_start, range_end);
    sum_lines(&days, range_start, range_end)
}

pub fn sum_lines(days: &[DayLine], range_start: NaiveDate, range_end: NaiveDate) -> PeriodRollup {
    let planned_minutes: i64 = days.iter().map(|d| d.planned_minutes).sum();
    let actual_minutes: i64 = days.iter().map(|d| d.actual_minutes).sum();

    PeriodRollup {
        range_start,
        range_end,
        planned_minutes,
        actual_minutes,
        difference_minutes: actual_minutes - planned_minutes,
    }
}

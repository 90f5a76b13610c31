//! Splits a vacation range into weekly periods.

use crate::errors::{AppError, AppResult};
use crate::models::vacation::{SplitSubRange, VacationRange};
use chrono::Days;

pub const WEEK_DAYS: u64 = 7;
pub const DEFAULT_WEEK_LABEL: &str = "Week";

/// Split `range` into weeks labelled "{label} - Week {n}".
///
/// With `split_into_weeks == false` the range comes back unchanged as a
/// single entry.
pub fn split_vacation_range(
    range: &VacationRange,
    split_into_weeks: bool,
) -> AppResult<Vec<SplitSubRange>> {
    split_with_label(range, split_into_weeks, DEFAULT_WEEK_LABEL)
}

/// Same as [`split_vacation_range`] with a custom word for "Week".
pub fn split_with_label(
    range: &VacationRange,
    split_into_weeks: bool,
    week_label: &str,
) -> AppResult<Vec<SplitSubRange>> {
    if range.end < range.start {
        return Err(AppError::InvalidRange(format!(
            "{}: end {} is before start {}",
            range.label, range.end, range.start
        )));
    }

    if !split_into_weeks {
        return Ok(vec![SplitSubRange::from(range)]);
    }

    // Both ends belong to the range, which may end at NaiveDate::MAX.
    let mut out = Vec::new();
    let mut next = Some(range.start);
    let mut week = 1;

    while let Some(start) = next
        && start <= range.end
    {
        let end = start
            .checked_add_days(Days::new(WEEK_DAYS - 1))
            .map_or(range.end, |e| e.min(range.end));

        out.push(SplitSubRange {
            label: format!("{} - {} {}", range.label, week_label, week),
            start,
            end,
        });

        next = end.checked_add_days(Days::new(1));
        week += 1;
    }

    Ok(out)
}

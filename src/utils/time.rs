//! Time utilities: parsing clock times, planned durations, timestamps.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Accepts `HH:MM` or `HH:MM:SS`.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a stored timestamp; also accepts the `T` separator and minute precision.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    [TIMESTAMP_FORMAT, "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
}

pub fn at(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

/// Parse a planned duration: `480`, `8h`, `7h30`, `7:30`.
pub fn parse_duration_minutes(s: &str) -> AppResult<i64> {
    let raw = s.trim().to_lowercase();
    let err = || AppError::InvalidMinutes(s.to_string());

    let (h, m) = if let Some((h, m)) = raw.split_once('h') {
        (h, if m.is_empty() { "0" } else { m })
    } else if let Some((h, m)) = raw.split_once(':') {
        (h, m)
    } else {
        let total: i64 = raw.parse().map_err(|_| err())?;
        return if total < 0 { Err(err()) } else { Ok(total) };
    };

    let hours: i64 = h.trim().parse().map_err(|_| err())?;
    let minutes: i64 = m.trim().parse().map_err(|_| err())?;

    if hours < 0 || !(0..60).contains(&minutes) {
        return Err(err());
    }
    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(err)
}

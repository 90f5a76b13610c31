use crate::errors::{AppError, AppResult};
use crate::models::event_kind::EventKind;
use crate::models::period::Period;
use crate::models::schedule::DaySchedule;
use crate::models::time_event::TimeEvent;
use crate::ui::messages::warning;
use crate::utils::time::{format_timestamp, parse_timestamp};
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn date_str(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_date_col(row: &Row, col: &str) -> Result<NaiveDate> {
    let raw: String = row.get(col)?;
    let idx = row.as_ref().column_index(col)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| conversion_error(idx, AppError::InvalidDate(raw)))
}

// ---------------------------------------------------------------------------
// time_events
// ---------------------------------------------------------------------------

const EVENT_COLUMNS: &str = "id, subject_id, kind, occurred_at, source, created_at";

/// Map one `time_events` row.
///
/// A row whose timestamp cannot be read is skipped with a warning (`None`)
/// so the rest of the day can still be summarized. Unknown kinds are kept:
/// the aggregator ignores them.
pub fn map_event_row(row: &Row) -> Result<Option<TimeEvent>> {
    let id: i64 = row.get("id")?;
    let ts_raw: String = row.get("occurred_at")?;

    let Some(occurred_at) = parse_timestamp(&ts_raw) else {
        warning(format!(
            "Skipping event {}: unreadable timestamp '{}'",
            id, ts_raw
        ));
        return Ok(None);
    };

    let kind_str: String = row.get("kind")?;

    Ok(Some(TimeEvent {
        id,
        subject_id: row.get("subject_id")?,
        kind: EventKind::from_db_str(&kind_str),
        occurred_at,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    }))
}

/// Insert an event and return its new id.
pub fn insert_event(conn: &Connection, ev: &TimeEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO time_events (subject_id, kind, date, occurred_at, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            ev.subject_id,
            ev.kind.to_db_str(),
            ev.date_str(),
            format_timestamp(&ev.occurred_at),
            ev.source,
            ev.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_event(conn: &Connection, id: i64) -> AppResult<Option<TimeEvent>> {
    let sql = format!("SELECT {EVENT_COLUMNS} FROM time_events WHERE id = ?1");
    let ev = conn.query_row(&sql, [id], map_event_row).optional()?;
    Ok(ev.flatten())
}

/// Delete an event; returns false when no row had that id.
pub fn delete_event(conn: &Connection, id: i64) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM time_events WHERE id = ?1", [id])?;
    Ok(n > 0)
}

fn collect_events(conn: &Connection, sql: &str, args: &[&dyn rusqlite::ToSql]) -> AppResult<Vec<TimeEvent>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(args, map_event_row)?;

    let mut out = Vec::new();
    for r in rows {
        if let Some(ev) = r? {
            out.push(ev);
        }
    }
    Ok(out)
}

/// Events of one subject with a date in `[start, end]`, in time order.
pub fn load_subject_events(
    conn: &Connection,
    subject_id: &str,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<TimeEvent>> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM time_events
         WHERE subject_id = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY occurred_at ASC, id ASC"
    );
    collect_events(conn, &sql, &[&subject_id, &date_str(start), &date_str(end)])
}

/// Events of every subject with a date in `[start, end]`.
pub fn load_events_between(conn: &Connection, start: &NaiveDate, end: &NaiveDate) -> AppResult<Vec<TimeEvent>> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM time_events
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC, subject_id ASC, occurred_at ASC, id ASC"
    );
    collect_events(conn, &sql, &[&date_str(start), &date_str(end)])
}

pub fn load_all_events(conn: &Connection) -> AppResult<Vec<TimeEvent>> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM time_events
         ORDER BY date ASC, subject_id ASC, occurred_at ASC, id ASC"
    );
    collect_events(conn, &sql, &[])
}

// ---------------------------------------------------------------------------
// day_schedules
// ---------------------------------------------------------------------------

fn map_schedule_row(row: &Row) -> Result<DaySchedule> {
    Ok(DaySchedule {
        subject_id: row.get("subject_id")?,
        date: parse_date_col(row, "date")?,
        planned_minutes: row.get("planned_minutes")?,
    })
}

/// Create or replace the planned minutes of a subject's day.
pub fn upsert_schedule(conn: &Connection, s: &DaySchedule) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO day_schedules (subject_id, date, planned_minutes, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?4)
         ON CONFLICT(subject_id, date)
         DO UPDATE SET planned_minutes = excluded.planned_minutes,
                       updated_at = excluded.updated_at",
        params![s.subject_id, date_str(&s.date), s.planned_minutes, now],
    )?;
    Ok(())
}

pub fn load_schedules(
    conn: &Connection,
    subject_id: &str,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<DaySchedule>> {
    let mut stmt = conn.prepare_cached(
        "SELECT subject_id, date, planned_minutes FROM day_schedules
         WHERE subject_id = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY date ASC",
    )?;
    let rows = stmt.query_map(params![subject_id, date_str(start), date_str(end)], map_schedule_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// periods
// ---------------------------------------------------------------------------

fn map_period_row(row: &Row) -> Result<Period> {
    Ok(Period {
        id: row.get("id")?,
        name: row.get("name")?,
        start: parse_date_col(row, "start_date")?,
        end: parse_date_col(row, "end_date")?,
        school_year: row.get("school_year")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_period(
    conn: &Connection,
    name: &str,
    start: &NaiveDate,
    end: &NaiveDate,
    school_year: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO periods (name, start_date, end_date, school_year, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![name, date_str(start), date_str(end), school_year, Local::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_periods(conn: &Connection) -> AppResult<Vec<Period>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, start_date, end_date, school_year, created_at
         FROM periods ORDER BY start_date ASC, id ASC",
    )?;
    let rows = stmt.query_map([], map_period_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

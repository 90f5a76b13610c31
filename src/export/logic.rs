use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_events, load_events_between};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{DayExport, EventExport};
use crate::models::time_event::TimeEvent;
use crate::ui::messages::warning;
use crate::utils::date::parse_range;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

/// What an export writes out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportKind {
    /// Raw clock events.
    Events,
    /// One planned/actual row per subject and day.
    Days,
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export events or day summaries.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or a range expression (`YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD`, `A:B`). Day summaries need a bounded range.
    /// - `subject`: restrict to one subject
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        kind: ExportKind,
        file: &str,
        range: Option<&str>,
        subject: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let mut events = match bounds {
            Some((start, end)) => load_events_between(&pool.conn, &start, &end)?,
            None => load_all_events(&pool.conn)?,
        };
        if let Some(s) = subject {
            events.retain(|e| e.subject_id == s);
        }

        if events.is_empty() {
            warning("No events found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match kind {
            ExportKind::Events => {
                let rows: Vec<EventExport> = events.iter().map(EventExport::from).collect();
                write_rows(format, &rows, path)?;
                Ok(rows.len())
            }
            ExportKind::Days => {
                let (start, end) = bounds.unwrap_or_else(|| event_bounds(&events));
                let rows = day_rows(pool, &events, start, end)?;
                write_rows(format, &rows, path)?;
                Ok(rows.len())
            }
        }
    }
}

fn write_rows<T: Serialize>(format: ExportFormat, rows: &[T], path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}

/// First and last event dates (events must not be empty).
fn event_bounds(events: &[TimeEvent]) -> (NaiveDate, NaiveDate) {
    let first = events.iter().map(|e| e.date()).min();
    let last = events.iter().map(|e| e.date()).max();
    match (first, last) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            let today = crate::utils::date::today();
            (today, today)
        }
    }
}

fn day_rows(
    pool: &DbPool,
    events: &[TimeEvent],
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<DayExport>> {
    let subjects: BTreeSet<&str> = events.iter().map(|e| e.subject_id.as_str()).collect();

    let mut rows = Vec::new();
    for subject in subjects {
        let summary = Core::build_period_summary(pool, subject, start, end)?;
        rows.extend(summary.days.iter().map(|d| DayExport::from_line(subject, d)));
    }
    Ok(rows)
}

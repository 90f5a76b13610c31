use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

/// One schema step. Applied steps are recorded in the `log` table as
/// `migration_applied` rows whose target is the version.
struct Migration {
    version: &'static str,
    message: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250110_0001_create_time_events",
        message: "Created time_events table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS time_events (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            subject_id   TEXT NOT NULL,
            kind         TEXT NOT NULL,
            date         TEXT NOT NULL,
            occurred_at  TEXT NOT NULL,
            source       TEXT NOT NULL DEFAULT 'cli',
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_time_events_subject_date ON time_events(subject_id, date);
        CREATE INDEX IF NOT EXISTS idx_time_events_date ON time_events(date);
        "#,
    },
    Migration {
        version: "20250110_0002_create_day_schedules",
        message: "Created day_schedules table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS day_schedules (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            subject_id       TEXT NOT NULL,
            date             TEXT NOT NULL,
            planned_minutes  INTEGER NOT NULL CHECK(planned_minutes >= 0),
            created_at       TEXT NOT NULL,
            updated_at       TEXT NOT NULL,
            UNIQUE(subject_id, date)
        );
        "#,
    },
    Migration {
        version: "20250302_0003_create_periods",
        message: "Created periods table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS periods (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL,
            start_date   TEXT NOT NULL,
            end_date     TEXT NOT NULL CHECK(end_date >= start_date),
            school_year  TEXT NOT NULL DEFAULT '',
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_periods_start ON periods(start_date);
        "#,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let batch = format!("BEGIN;\n{}\nCOMMIT;", m.sql);

    if let Err(e) = conn.execute_batch(&batch) {
        // leave no half-applied step behind
        let _ = conn.execute_batch("ROLLBACK;");
        return Err(AppError::Migration(format!("{}: {}", m.version, e)));
    }

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![Local::now().to_rfc3339(), m.version, m.message],
    )?;

    success(format!("Migration applied: {} → {}", m.version, m.message));
    Ok(())
}

/// Versions not yet recorded in the log table.
pub fn pending_versions(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;
    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations, oldest first.
///
/// Called by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m)?;
        }
    }

    Ok(())
}

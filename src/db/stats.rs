use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;
use std::path::Path;

fn count(pool: &DbPool, sql: &str) -> AppResult<i64> {
    Ok(pool.conn.query_row(sql, [], |row| row.get(0))?)
}

pub fn print_db_info(pool: &DbPool, db_path: &Path) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path.display(), RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTALS
    //
    let events = count(pool, "SELECT COUNT(*) FROM time_events")?;
    let subjects = count(pool, "SELECT COUNT(DISTINCT subject_id) FROM time_events")?;
    let schedules = count(pool, "SELECT COUNT(*) FROM day_schedules")?;
    let periods = count(pool, "SELECT COUNT(*) FROM periods")?;

    println!("{}• Clock events:{} {}{}{}", CYAN, RESET, GREEN, events, RESET);
    println!("{}• Subjects:{} {}", CYAN, RESET, subjects);
    println!("{}• Planned days:{} {}", CYAN, RESET, schedules);
    println!("{}• Periods:{} {}", CYAN, RESET, periods);

    //
    // 3) DATE RANGE
    //
    let bounds: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row("SELECT MIN(date), MAX(date) FROM time_events", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?;

    let (first, last) = bounds.unwrap_or((None, None));
    let dash = format!("{GREY}--{RESET}");

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(|| dash.clone()));
    println!("    to:   {}", last.unwrap_or(dash));

    println!();
    Ok(())
}

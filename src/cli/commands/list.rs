use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::queries::load_events_between;
use crate::errors::AppResult;
use crate::models::aggregate::DailyAggregate;
use crate::models::time_event::TimeEvent;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREY, RESET, YELLOW, colorize_minutes};
use crate::utils::date::{month_bounds, parse_range, today};
use crate::utils::formatting::format_minutes;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        subject,
        period,
        now,
        events,
        details,
    } = cmd
    {
        let (start, end) = resolve_period(period.as_deref(), *now)?;
        let pool = open_pool(cfg)?;

        if *events {
            let mut evs = load_events_between(&pool.conn, &start, &end)?;
            if let Some(s) = subject {
                evs.retain(|e| &e.subject_id == s);
            }
            print_events(&evs);
            return Ok(());
        }

        let subject = cfg.subject_or_default(subject.as_ref())?;
        let days = Core::build_daily_range(&pool, &subject, start, end)?;
        let recorded: Vec<&DailyAggregate> = days
            .iter()
            .filter(|d| d.first_arrival.is_some() || d.is_open_ended)
            .collect();

        if recorded.is_empty() {
            info(format!("No worked time for {} between {} and {}.", subject, start, end));
            return Ok(());
        }

        header(format!("{}  {} → {}", subject, start, end));
        print_days(&recorded);

        if *details {
            for d in &recorded {
                print_intervals(d);
            }
        }
    }
    Ok(())
}

/// Current month unless a period or `--today` is given.
fn resolve_period(period: Option<&str>, now: bool) -> AppResult<(NaiveDate, NaiveDate)> {
    if now {
        let t = today();
        return Ok((t, t));
    }
    match period {
        Some(p) => parse_range(p),
        None => Ok(month_bounds(today())),
    }
}

fn print_events(events: &[TimeEvent]) {
    if events.is_empty() {
        info("No events for the selected period.");
        return;
    }

    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("DATE"),
        Column::left("TIME"),
        Column::left("SUBJECT"),
        Column::left("KIND"),
        Column::left("SOURCE"),
    ]);
    for ev in events {
        table.add_row(vec![
            ev.id.to_string(),
            ev.date_str(),
            ev.time_str(),
            ev.subject_id.clone(),
            ev.kind.to_string(),
            ev.source.clone(),
        ]);
    }
    print!("{}", table.render());
}

fn print_days(days: &[&DailyAggregate]) {
    let mut table = Table::new(vec![
        Column::left("DATE"),
        Column::left("ARRIVAL"),
        Column::right("WORKED"),
        Column::left("STATE"),
    ]);

    for d in days {
        let arrival = d
            .first_arrival
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string());
        let state = if d.is_open_ended {
            format!("{YELLOW}{} (open){RESET}", d.state.label())
        } else {
            format!("{GREY}closed{RESET}")
        };

        table.add_row(vec![
            d.date.to_string(),
            arrival,
            colorize_minutes(&format_minutes(d.worked_minutes), d.worked_minutes),
            state,
        ]);
    }

    print!("{}", table.render());
}

fn print_intervals(d: &DailyAggregate) {
    if d.intervals.is_empty() {
        return;
    }
    println!("\n{}:", d.date);
    for iv in &d.intervals {
        println!(
            "  {} → {}  {}",
            iv.start.format("%H:%M"),
            iv.end.format("%H:%M"),
            format_minutes(iv.minutes)
        );
    }
}

use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::rollup::PeriodSummary;
use crate::ui::messages::header;
use crate::utils::colors::{YELLOW, RESET, colorize_difference, colorize_minutes};
use crate::utils::date::{parse_date_arg, parse_range, today, week_bounds};
use crate::utils::formatting::{format_difference, format_minutes, separator};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

/// Planned vs actual over a week, a month or any range.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        subject,
        week,
        month,
        range,
        days,
    } = cmd
    {
        let subject = cfg.subject_or_default(subject.as_ref())?;
        let (start, end) = resolve_window(cfg, week.as_deref(), month.as_deref(), range.as_deref())?;

        let pool = open_pool(cfg)?;
        let summary = Core::build_period_summary(&pool, &subject, start, end)?;

        header(format!("{}  {} → {}", subject, start, end));
        if *days {
            print_days(&summary);
        }
        print_totals(&summary, cfg);
    }
    Ok(())
}

fn resolve_window(
    cfg: &Config,
    week: Option<&str>,
    month: Option<&str>,
    range: Option<&str>,
) -> AppResult<(NaiveDate, NaiveDate)> {
    match (week, month, range) {
        (Some(w), None, None) => Ok(week_bounds(parse_date_arg(w)?, cfg.week_start_day()?)),
        (None, Some(m), None) => {
            if m.len() != 7 {
                return Err(AppError::InvalidRange(format!("{m}: expected YYYY-MM")));
            }
            parse_range(m)
        }
        (None, None, Some(r)) => parse_range(r),
        (None, None, None) => Ok(week_bounds(today(), cfg.week_start_day()?)),
        _ => Err(AppError::InvalidRange(
            "use only one of --week, --month, --range".into(),
        )),
    }
}

fn print_days(summary: &PeriodSummary) {
    let mut table = Table::new(vec![
        Column::left("DATE"),
        Column::left("DAY"),
        Column::right("PLANNED"),
        Column::right("ACTUAL"),
        Column::right("DIFF"),
        Column::left(""),
    ]);

    for d in &summary.days {
        table.add_row(vec![
            d.date.to_string(),
            d.date.format("%a").to_string(),
            colorize_minutes(&format_minutes(d.planned_minutes), d.planned_minutes),
            colorize_minutes(&format_minutes(d.actual_minutes), d.actual_minutes),
            colorize_difference(&format_difference(d.difference_minutes), d.difference_minutes),
            if d.is_open_ended {
                format!("{YELLOW}open{RESET}")
            } else {
                String::new()
            },
        ]);
    }

    print!("{}", table.render());
}

fn print_totals(summary: &PeriodSummary, cfg: &Config) {
    let r = &summary.rollup;
    println!("{}", separator(&cfg.separator_char, 32));
    println!("Planned    : {}", format_minutes(r.planned_minutes));
    println!("Actual     : {}", format_minutes(r.actual_minutes));
    println!(
        "Difference : {}",
        colorize_difference(&format_difference(r.difference_minutes), r.difference_minutes)
    );

    let open = summary.days.iter().filter(|d| d.is_open_ended).count();
    if open > 0 {
        println!("{YELLOW}{} open-ended day(s) counted up to their last closed interval.{RESET}", open);
    }
}

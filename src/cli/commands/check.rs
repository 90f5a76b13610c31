use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checks::TimesheetIssue;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::colors::{RED, RESET, YELLOW};
use crate::utils::date::{month_bounds, parse_range, today};
use crate::utils::formatting::format_minutes;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { subject, range } = cmd {
        let subject = cfg.subject_or_default(subject.as_ref())?;
        let (start, end) = match range {
            Some(r) => parse_range(r)?,
            None => month_bounds(today()),
        };

        let pool = open_pool(cfg)?;
        let issues = Core::check_timesheets(&pool, &subject, start, end)?;

        if issues.is_empty() {
            success(format!("Timesheets of {} are complete ({} → {}).", subject, start, end));
            return Ok(());
        }

        warning(format!("{} day(s) need attention for {}:", issues.len(), subject));

        let mut table = Table::new(vec![
            Column::left("DATE"),
            Column::left("ISSUE"),
            Column::right("PLANNED"),
        ]);
        for i in &issues {
            let color = match i.issue {
                TimesheetIssue::Missing => RED,
                TimesheetIssue::Incomplete => YELLOW,
            };
            table.add_row(vec![
                i.date.to_string(),
                format!("{}{}{}", color, i.issue.label(), RESET),
                format_minutes(i.planned_minutes),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}

use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::periods::PeriodLogic;
use crate::core::school_year::{SchoolYear, school_year_of};
use crate::errors::{AppError, AppResult};
use crate::models::vacation::VacationRange;
use crate::utils::date::{parse_date_arg, today};
use crate::utils::table::{Column, Table};

/// Turn a date range (or a school vacation) into one or more periods.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Split {
        label,
        start,
        end,
        vacation,
        year,
        weeks,
        save,
    } = cmd
    {
        let range = match vacation {
            Some(name) => vacation_range(name, *year, label.as_deref())?,
            None => explicit_range(label.as_deref(), start.as_deref(), end.as_deref())?,
        };

        let parts = if *save {
            let mut pool = open_pool(cfg)?;
            PeriodLogic::create(Some(&mut pool), &range, *weeks, &cfg.week_label)?
        } else {
            PeriodLogic::create(None, &range, *weeks, &cfg.week_label)?
        };

        let mut table = Table::new(vec![
            Column::left("PERIOD"),
            Column::left("START"),
            Column::left("END"),
            Column::right("DAYS"),
        ]);
        for p in &parts {
            table.add_row(vec![
                p.label.clone(),
                p.start.to_string(),
                p.end.to_string(),
                p.days().to_string(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}

fn vacation_range(name: &str, year: Option<i32>, label: Option<&str>) -> AppResult<VacationRange> {
    let year = year.unwrap_or_else(|| school_year_of(today()));
    let school_year = SchoolYear::starting_in(year)
        .ok_or_else(|| AppError::InvalidRange(format!("school year {year}")))?;

    let vac = school_year
        .find_vacation(name)
        .ok_or_else(|| AppError::NotFound(format!("vacation '{}' in {}", name, school_year.name)))?;

    Ok(match label {
        Some(l) => VacationRange::new(l, vac.start, vac.end),
        None => vac.clone(),
    })
}

fn explicit_range(
    label: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
) -> AppResult<VacationRange> {
    let (Some(label), Some(start), Some(end)) = (label, start, end) else {
        return Err(AppError::Other(
            "--label, --start and --end are required without --vacation".into(),
        ));
    };
    Ok(VacationRange::new(label, parse_date_arg(start)?, parse_date_arg(end)?))
}

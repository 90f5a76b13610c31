use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::presence::{Presence, count_present};
use crate::core::school_year::{SchoolYear, is_vacation_day, school_year_of};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREEN, GREY, RESET, YELLOW};
use crate::utils::date::{parse_date_arg, today};
use crate::utils::formatting::format_minutes;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

/// Who is in, on break or gone for a given day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { date } = cmd {
        let day = match date {
            Some(d) => parse_date_arg(d)?,
            None => today(),
        };

        if let Some(sy) = vacation_school_year(day) {
            info(format!("{} is a school vacation day ({}).", day, sy.name));
        }

        let pool = open_pool(cfg)?;
        let lines = Core::presence(&pool, day)?;

        if lines.is_empty() {
            info(format!("Nobody clocked in on {}.", day));
            return Ok(());
        }

        header(format!("Presence {}", day));

        let mut table = Table::new(vec![
            Column::left("SUBJECT"),
            Column::left("STATUS"),
            Column::left("ARRIVAL"),
            Column::right("WORKED"),
        ]);
        for l in &lines {
            let color = match l.presence {
                Presence::Present => GREEN,
                Presence::OnBreak => YELLOW,
                Presence::Absent => GREY,
            };
            table.add_row(vec![
                l.subject_id.clone(),
                format!("{}{}{}", color, l.presence.label(), RESET),
                l.arrived_at
                    .map(|t| t.format("%H:%M").to_string())
                    .unwrap_or_else(|| "--:--".into()),
                format_minutes(l.worked_minutes),
            ]);
        }
        print!("{}", table.render());
        println!("\n{} of {} on site.", count_present(&lines), lines.len());
    }
    Ok(())
}

/// School year whose vacations cover `day`. Summer vacation runs into the
/// first days of September, so the previous year is checked too.
fn vacation_school_year(day: NaiveDate) -> Option<SchoolYear> {
    let year = school_year_of(day);
    [year, year - 1]
        .into_iter()
        .filter_map(SchoolYear::starting_in)
        .find(|sy| is_vacation_day(day, &sy.vacations))
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::school_year::{current_school_year, generate_school_years, school_year_of};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date::today;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Vacations { year, count } = cmd {
        let first = year.unwrap_or_else(|| school_year_of(today()));

        let years = generate_school_years(first, *count);
        let current = current_school_year(&years, today()).map(|y| y.name.clone());

        for sy in &years {
            let marker = if current.as_deref() == Some(sy.name.as_str()) {
                " (current)"
            } else {
                ""
            };
            header(format!("School year {}{} ({} → {})", sy.name, marker, sy.start, sy.end));

            let mut table = Table::new(vec![
                Column::left("VACATION"),
                Column::left("START"),
                Column::left("END"),
            ]);
            for v in &sy.vacations {
                table.add_row(vec![v.label.clone(), v.start.to_string(), v.end.to_string()]);
            }
            print!("{}", table.render());
        }
    }
    Ok(())
}

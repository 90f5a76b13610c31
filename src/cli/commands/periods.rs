use crate::cli::commands::open_pool;
use crate::config::Config;
use crate::db::queries::load_periods;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = open_pool(cfg)?;
    let periods = load_periods(&pool.conn)?;

    if periods.is_empty() {
        info("No periods stored.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("NAME"),
        Column::left("START"),
        Column::left("END"),
        Column::left("SCHOOL YEAR"),
    ]);
    for p in &periods {
        table.add_row(vec![
            p.id.to_string(),
            p.name.clone(),
            p.start.to_string(),
            p.end.to_string(),
            p.school_year.clone(),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}

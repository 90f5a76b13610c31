use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::ScheduleLogic;
use crate::errors::AppResult;
use crate::utils::date::{days_in_range, parse_range};
use crate::utils::time::parse_duration_minutes;

/// Set planned time on one date or every date of a range.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan {
        dates,
        subject,
        duration,
    } = cmd
    {
        let subject = cfg.subject_or_default(subject.as_ref())?;
        let (start, end) = parse_range(dates)?;

        let minutes = match duration {
            Some(d) => parse_duration_minutes(d)?,
            None => cfg.default_planned_minutes,
        };

        let mut pool = open_pool(cfg)?;
        ScheduleLogic::set(&mut pool, &subject, &days_in_range(start, end), minutes)?;
    }
    Ok(())
}

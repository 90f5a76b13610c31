use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::errors::{AppError, AppResult};
use crate::models::event_kind::EventKind;
use crate::utils::date::{parse_date_arg, today};
use crate::utils::time::{at, parse_optional_time};
use chrono::Local;

/// Record an arrival, break or departure.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock {
        kind,
        subject,
        date,
        at: time,
    } = cmd
    {
        let kind = EventKind::from_input(kind)
            .ok_or_else(|| AppError::InvalidEventKind(kind.to_string()))?;
        let subject = cfg.subject_or_default(subject.as_ref())?;

        let day = match date {
            Some(d) => parse_date_arg(d)?,
            None => today(),
        };
        let time = parse_optional_time(time.as_ref())?.unwrap_or_else(|| Local::now().time());

        let mut pool = open_pool(cfg)?;
        ClockLogic::record(&mut pool, &subject, kind, at(day, time))?;
    }
    Ok(())
}

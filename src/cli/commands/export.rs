use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::logic::{ExportKind, ExportLogic};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        subject,
        days,
        force,
    } = cmd
    {
        let pool = open_pool(cfg)?;
        let kind = if *days { ExportKind::Days } else { ExportKind::Events };

        ExportLogic::export(
            &pool,
            *format,
            kind,
            file,
            range.as_deref(),
            subject.as_deref(),
            *force,
        )?;
    }
    Ok(())
}

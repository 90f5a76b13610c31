use crate::core::school_year::school_year_of;
use crate::core::splitter::split_with_label;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::insert_period;
use crate::errors::AppResult;
use crate::models::vacation::{SplitSubRange, VacationRange};
use crate::ui::messages::success;

pub struct PeriodLogic;

impl PeriodLogic {
    /// Store the periods produced by the splitter, all or nothing.
    pub fn save(pool: &mut DbPool, parts: &[SplitSubRange]) -> AppResult<Vec<i64>> {
        let ids = pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            let mut ids = Vec::with_capacity(parts.len());
            for p in parts {
                let year = school_year_of(p.start);
                let school_year = format!("{}-{}", year, year + 1);
                ids.push(insert_period(&tx, &p.label, &p.start, &p.end, &school_year)?);
            }
            tx.commit()?;
            Ok(ids)
        })?;

        ttlog_soft(
            &pool.conn,
            "periods",
            &parts.first().map(|p| p.label.clone()).unwrap_or_default(),
            &format!("Created {} period(s)", parts.len()),
        );

        success(format!("Created {} period(s).", parts.len()));
        Ok(ids)
    }

    /// Split `range` (if asked) and optionally store the result.
    pub fn create(
        pool: Option<&mut DbPool>,
        range: &VacationRange,
        split_into_weeks: bool,
        week_label: &str,
    ) -> AppResult<Vec<SplitSubRange>> {
        let parts = split_with_label(range, split_into_weeks, week_label)?;
        if let Some(pool) = pool {
            Self::save(pool, &parts)?;
        }
        Ok(parts)
    }
}

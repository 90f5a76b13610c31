use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::store::TimesheetStore;
use crate::errors::{AppError, AppResult};
use crate::models::schedule::DaySchedule;
use crate::ui::messages::success;
use crate::utils::formatting::format_minutes;
use chrono::NaiveDate;

pub struct ScheduleLogic;

impl ScheduleLogic {
    /// Set the planned minutes of each date for `subject_id`.
    pub fn set(
        pool: &mut DbPool,
        subject_id: &str,
        dates: &[NaiveDate],
        planned_minutes: i64,
    ) -> AppResult<()> {
        if planned_minutes < 0 {
            return Err(AppError::InvalidMinutes(planned_minutes.to_string()));
        }

        for date in dates {
            let schedule = DaySchedule::new(subject_id, *date, planned_minutes);
            pool.save_schedule(&schedule)?;
        }

        let target = match (dates.first(), dates.last()) {
            (Some(a), Some(b)) if a != b => format!("{} {}:{}", subject_id, a, b),
            (Some(a), _) => format!("{} {}", subject_id, a),
            _ => subject_id.to_string(),
        };

        ttlog_soft(
            &pool.conn,
            "plan",
            &target,
            &format!("Planned {} min on {} day(s)", planned_minutes, dates.len()),
        );

        success(format!(
            "Planned {} on {} day(s) for {}.",
            format_minutes(planned_minutes),
            dates.len(),
            subject_id
        ));
        Ok(())
    }
}

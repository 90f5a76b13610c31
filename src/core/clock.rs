use crate::core::calculator::aggregator::aggregate_day;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_event, load_event};
use crate::db::store::TimesheetStore;
use crate::errors::{AppError, AppResult};
use crate::models::aggregate::ClockState;
use crate::models::event_kind::EventKind;
use crate::models::time_event::TimeEvent;
use crate::ui::messages::{success, warning};
use chrono::NaiveDateTime;

/// High-level business logic for the `clock` and `del` commands.
pub struct ClockLogic;

/// Whether `kind` would open or close an interval when the day is in `state`.
pub fn is_effective(state: ClockState, kind: EventKind) -> bool {
    matches!(
        (state, kind),
        (ClockState::Idle, EventKind::Arrival)
            | (ClockState::Working, EventKind::BreakStart)
            | (ClockState::Working, EventKind::Departure)
            | (ClockState::OnBreak, EventKind::BreakEnd)
    )
}

impl ClockLogic {
    /// Record a clock action for `subject_id` at `at`.
    ///
    /// The event is always stored. When it does not fit the day recorded so
    /// far it is flagged, since the summaries will not count it.
    pub fn record(
        pool: &mut DbPool,
        subject_id: &str,
        kind: EventKind,
        at: NaiveDateTime,
    ) -> AppResult<i64> {
        let date = at.date();

        // Day state just before `at` (events after it are not relevant here).
        let earlier: Vec<TimeEvent> = pool
            .events_for(subject_id, date, date)?
            .into_iter()
            .filter(|e| e.occurred_at <= at)
            .collect();
        let state = aggregate_day(subject_id, date, &earlier).state;

        let ev = TimeEvent::new(subject_id, kind, at);
        let id = pool.record_event(&ev)?;

        ttlog_soft(
            &pool.conn,
            "clock",
            &format!("{} {}", subject_id, ev.date_str()),
            &format!("{} at {} (id {})", kind, ev.time_str(), id),
        );

        success(format!(
            "{} {} at {} on {} (id {}).",
            subject_id,
            kind.describe().to_lowercase(),
            ev.time_str(),
            ev.date_str(),
            id
        ));

        if !is_effective(state, kind) {
            warning(format!(
                "{} while {}: this event will not count towards worked time.",
                kind,
                state.label()
            ));
        }

        Ok(id)
    }

    /// Delete one stored event by id.
    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<TimeEvent> {
        let ev = load_event(&pool.conn, id)?
            .ok_or_else(|| AppError::NotFound(format!("event {}", id)))?;

        delete_event(&pool.conn, id)?;

        ttlog_soft(
            &pool.conn,
            "del",
            &format!("{} {}", ev.subject_id, ev.date_str()),
            &format!("Deleted {} at {} (id {})", ev.kind, ev.time_str(), id),
        );

        success(format!(
            "Deleted event {} ({} {} at {}).",
            id,
            ev.subject_id,
            ev.kind,
            ev.time_str()
        ));
        Ok(ev)
    }
}

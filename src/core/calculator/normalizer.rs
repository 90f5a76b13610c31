use crate::models::time_event::TimeEvent;

/// Sort events chronologically.
///
/// The sort is stable: events sharing a timestamp keep their input order.
/// Nothing is dropped, duplicated or modified.
pub fn normalize(events: &[TimeEvent]) -> Vec<TimeEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.occurred_at);
    sorted
}

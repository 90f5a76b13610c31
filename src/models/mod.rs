pub mod aggregate;
pub mod event_kind;
pub mod period;
pub mod rollup;
pub mod schedule;
pub mod time_event;
pub mod vacation;

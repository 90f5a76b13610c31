use super::event_kind::EventKind;
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One clock action of a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEvent {
    pub id: i64,                   // ⇔ time_events.id (0 until stored)
    pub subject_id: String,        // ⇔ time_events.subject_id
    pub kind: EventKind,           // ⇔ time_events.kind
    pub occurred_at: NaiveDateTime, // ⇔ time_events.occurred_at ("YYYY-MM-DD HH:MM:SS")
    pub source: String,            // ⇔ time_events.source (default 'cli')
    pub created_at: String,        // ⇔ time_events.created_at (RFC 3339)
}

impl TimeEvent {
    /// Build a not-yet-stored event recorded from the CLI.
    pub fn new(subject_id: &str, kind: EventKind, occurred_at: NaiveDateTime) -> Self {
        Self {
            id: 0,
            subject_id: subject_id.to_string(),
            kind,
            occurred_at,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Local calendar date the event belongs to.
    pub fn date(&self) -> NaiveDate {
        self.occurred_at.date()
    }

    pub fn date_str(&self) -> String {
        self.occurred_at.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.occurred_at.format("%H:%M").to_string()
    }
}

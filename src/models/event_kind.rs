use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a clock action.
///
/// Records written by other clients may carry kinds this build does not
/// know about; they map to `Unknown` instead of failing the whole read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Arrival,
    BreakStart,
    BreakEnd,
    Departure,
    #[serde(other)]
    Unknown,
}

impl EventKind {
    /// Strict parser used for user input (CLI).
    /// Accepts the stored names plus a few short aliases.
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "arrival" | "in" | "arrive" => Some(Self::Arrival),
            "break_start" | "break-start" | "pause" => Some(Self::BreakStart),
            "break_end" | "break-end" | "resume" => Some(Self::BreakEnd),
            "departure" | "out" | "leave" => Some(Self::Departure),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventKind::Arrival => "arrival",
            EventKind::BreakStart => "break_start",
            EventKind::BreakEnd => "break_end",
            EventKind::Departure => "departure",
            EventKind::Unknown => "unknown",
        }
    }

    /// Convert DB string → enum. Never fails.
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "arrival" => EventKind::Arrival,
            "break_start" => EventKind::BreakStart,
            "break_end" => EventKind::BreakEnd,
            "departure" => EventKind::Departure,
            _ => EventKind::Unknown,
        }
    }

    /// Human label, as shown in the history view.
    pub fn describe(&self) -> &'static str {
        match self {
            EventKind::Arrival => "Arrived",
            EventKind::BreakStart => "Started break",
            EventKind::BreakEnd => "Ended break",
            EventKind::Departure => "Left",
            EventKind::Unknown => "Unknown action",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

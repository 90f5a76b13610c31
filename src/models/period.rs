use chrono::NaiveDate;
use serde::Serialize;

/// A stored activity period (one row of the `periods` table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Period {
    pub id: i64,
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub school_year: String, // e.g. "2024-2025", empty when unknown
    pub created_at: String,
}

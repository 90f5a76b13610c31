use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Planned effort for a subject on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub subject_id: String,
    pub date: NaiveDate,
    pub planned_minutes: i64,
}

impl DaySchedule {
    pub fn new(subject_id: &str, date: NaiveDate, planned_minutes: i64) -> Self {
        Self {
            subject_id: subject_id.to_string(),
            date,
            planned_minutes,
        }
    }
}

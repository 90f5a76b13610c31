use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named, inclusive date range (school vacation, or any period to create).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRange {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl VacationRange {
    pub fn new(label: &str, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            label: label.to_string(),
            start,
            end,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Output of the splitter: one period to be created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSubRange {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SplitSubRange {
    /// Number of days covered, both ends included.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl From<&VacationRange> for SplitSubRange {
    fn from(r: &VacationRange) -> Self {
        Self {
            label: r.label.clone(),
            start: r.start,
            end: r.end,
        }
    }
}

//! School-year calendar: years run from 1 September to 31 July and carry
//! the five French school vacations used when creating periods.

use crate::models::vacation::VacationRange;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolYear {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub vacations: Vec<VacationRange>,
}

impl SchoolYear {
    /// School year starting in September of `year`.
    /// `None` only for years outside chrono's calendar.
    pub fn starting_in(year: i32) -> Option<Self> {
        Some(Self {
            name: format!("{}-{}", year, year + 1),
            start: NaiveDate::from_ymd_opt(year, 9, 1)?,
            end: NaiveDate::from_ymd_opt(year + 1, 7, 31)?,
            vacations: vacation_periods(year)?,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn find_vacation(&self, label: &str) -> Option<&VacationRange> {
        let wanted = label.trim().to_lowercase();
        self.vacations
            .iter()
            .find(|v| v.label.to_lowercase() == wanted)
    }
}

fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

/// Vacation periods of the school year starting in `year`.
pub fn vacation_periods(year: i32) -> Option<Vec<VacationRange>> {
    let next = year + 1;
    Some(vec![
        VacationRange::new("Toussaint", ymd(year, 10, 19)?, ymd(year, 11, 4)?),
        VacationRange::new("Noël", ymd(year, 12, 21)?, ymd(next, 1, 6)?),
        VacationRange::new("Hiver", ymd(next, 2, 10)?, ymd(next, 2, 26)?),
        VacationRange::new("Printemps", ymd(next, 4, 13)?, ymd(next, 4, 29)?),
        VacationRange::new("Été", ymd(next, 7, 6)?, ymd(next, 9, 2)?),
    ])
}

/// `count` consecutive school years, the first starting in `first_year`.
pub fn generate_school_years(first_year: i32, count: usize) -> Vec<SchoolYear> {
    (0..count)
        .filter_map(|i| SchoolYear::starting_in(first_year + i as i32))
        .collect()
}

/// School year that contains `date`, if any (August is between years).
pub fn current_school_year(years: &[SchoolYear], date: NaiveDate) -> Option<&SchoolYear> {
    years.iter().find(|y| y.contains(date))
}

/// Starting year of the school year `date` falls in (August counts as the
/// end of the previous one).
pub fn school_year_of(date: NaiveDate) -> i32 {
    if date.month() >= 9 {
        date.year()
    } else {
        date.year() - 1
    }
}

pub fn is_vacation_day(date: NaiveDate, vacations: &[VacationRange]) -> bool {
    vacations.iter().any(|v| v.contains(date))
}

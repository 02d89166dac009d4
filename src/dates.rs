use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// check if year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// days in the year used as the interest denominator
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// days in a calendar month, fixed non-leap lookup.
///
/// Month-length for interest weighting depends only on the month number,
/// so February is always 28 here; leap years enter the calculation through
/// [`days_in_year`] alone.
pub fn days_in_month(month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => Some(28),
        _ => None,
    }
}

/// calendar distance between two dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermLength {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl TermLength {
    /// whole months covered by this length, ignoring leftover days
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}

/// absolute calendar difference between two dates in years, months and days
pub fn term_between(start: NaiveDate, end: NaiveDate) -> TermLength {
    let (from, to) = if start <= end { (start, end) } else { (end, start) };

    let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if add_months_clamped(from, months) > to {
        months -= 1;
    }
    let anchor = add_months_clamped(from, months);
    let days = (to - anchor).num_days();

    TermLength {
        years: (months / 12) as u32,
        months: (months % 12) as u32,
        days: days as u32,
    }
}

/// shift a date by whole months, clamping the day to the target month length
fn add_months_clamped(date: NaiveDate, months: i32) -> NaiveDate {
    let zero_based = date.year() * 12 + date.month() as i32 - 1 + months;
    let year = zero_based.div_euclid(12);
    let month = zero_based.rem_euclid(12) as u32 + 1;

    let mut day = date.day();
    loop {
        if let Some(d) = NaiveDate::from_ymd_opt(year, month, day) {
            return d;
        }
        day -= 1;
    }
}

//! Epoch-day date representation and weekday arithmetic.

use chrono::{Datelike, NaiveDate};

/// A calendar date as a day count from the Common Era.
///
/// All optimizer arithmetic runs on this integer index, so ordering, set
/// membership, and day distances are exact and free of time-of-day or
/// timezone concerns. The count matches
/// [`chrono::Datelike::num_days_from_ce`], where day 1 is 0001-01-01 in the
/// proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayIndex(i32);

impl DayIndex {
    /// Converts a civil date to its day index.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.num_days_from_ce())
    }

    /// Converts the index back to a civil date.
    pub fn to_date(self) -> NaiveDate {
        // Safety: every DayIndex derives from a valid chrono date plus a
        // small in-year offset, well inside chrono's supported range.
        NaiveDate::from_num_days_from_ce_opt(self.0)
            .expect("DayIndex always stays within chrono's date range")
    }

    /// Returns the raw day count.
    pub fn get(self) -> i32 {
        self.0
    }

    /// Returns the day `days` after (or before, if negative) this one.
    pub fn offset(self, days: i32) -> Self {
        Self(self.0 + days)
    }

    /// Signed distance in days from `other` to `self`.
    pub fn days_since(self, other: DayIndex) -> i32 {
        self.0 - other.0
    }

    /// Weekday as 0 = Monday through 6 = Sunday.
    ///
    /// CE day 1 (0001-01-01) is a Monday, so the weekday falls out of the
    /// index by modular arithmetic alone.
    pub fn weekday0(self) -> u8 {
        (self.0 - 1).rem_euclid(7) as u8
    }

    /// True for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        self.weekday0() >= 5
    }

    /// The Monday on or before this day.
    pub fn week_monday(self) -> Self {
        self.offset(-i32::from(self.weekday0()))
    }
}

//! Public holiday inputs and date-membership lookup.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::day::DayIndex;

/// A dated public holiday supplied by the caller.
///
/// The optimizer only cares about the date; the name travels along for
/// presentation layers. "Observed" variants of a holiday are ordinary
/// independent entries with their own date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicHoliday {
    /// The calendar date of the holiday.
    pub date: NaiveDate,
    /// Display name, e.g. "National Day (Observed)".
    pub name: String,
}

impl PublicHoliday {
    /// Creates a holiday record.
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}

/// Set of holiday dates for O(1) membership tests.
///
/// Holiday identity is irrelevant to the optimizer, so duplicate dates
/// collapse harmlessly into a single member.
#[derive(Debug, Clone, Default)]
pub struct HolidaySet {
    days: HashSet<DayIndex>,
}

impl HolidaySet {
    /// Builds the set from a list of holiday records.
    pub fn from_holidays(holidays: &[PublicHoliday]) -> Self {
        Self {
            days: holidays
                .iter()
                .map(|h| DayIndex::from_date(h.date))
                .collect(),
        }
    }

    /// True when `day` is a holiday.
    pub fn contains(&self, day: DayIndex) -> bool {
        self.days.contains(&day)
    }

    /// Number of distinct holiday dates.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// True when no holidays were supplied.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn membership() {
        let holidays = vec![
            PublicHoliday::new(date(2026, 1, 1), "New Year's Day"),
            PublicHoliday::new(date(2026, 12, 25), "Christmas Day"),
        ];
        let set = HolidaySet::from_holidays(&holidays);
        assert_eq!(set.len(), 2);
        assert!(set.contains(DayIndex::from_date(date(2026, 1, 1))));
        assert!(set.contains(DayIndex::from_date(date(2026, 12, 25))));
        assert!(!set.contains(DayIndex::from_date(date(2026, 1, 2))));
    }

    #[test]
    fn duplicate_dates_collapse() {
        let holidays = vec![
            PublicHoliday::new(date(2026, 5, 31), "Vesak Day"),
            PublicHoliday::new(date(2026, 5, 31), "Vesak Day (duplicate entry)"),
        ];
        let set = HolidaySet::from_holidays(&holidays);
        assert_eq!(set.len(), 1);
        assert!(set.contains(DayIndex::from_date(date(2026, 5, 31))));
    }

    #[test]
    fn empty() {
        let set = HolidaySet::from_holidays(&[]);
        assert!(set.is_empty());
        assert!(!set.contains(DayIndex::from_date(date(2026, 1, 1))));
    }
}

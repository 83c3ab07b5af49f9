//! Output of an optimizer run.

use chrono::NaiveDate;

/// A computed leave plan: the chosen leave days plus run diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeavePlan {
    /// Chosen leave days, ascending and de-duplicated.
    days: Vec<NaiveDate>,
    /// Greedy iterations executed.
    iterations: usize,
    /// Leave days the run could not place.
    remaining_budget: u32,
}

impl LeavePlan {
    pub(crate) fn new(days: Vec<NaiveDate>, iterations: usize, remaining_budget: u32) -> Self {
        Self {
            days,
            iterations,
            remaining_budget,
        }
    }

    /// Returns the chosen leave days in ascending order.
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// Number of leave days chosen.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// True when no leave day was chosen.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Greedy iterations executed, seeding excluded.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Budget left unspent when the run terminated.
    pub fn remaining_budget(&self) -> u32 {
        self.remaining_budget
    }

    /// Consumes the plan, returning the chosen days.
    pub fn into_days(self) -> Vec<NaiveDate> {
        self.days
    }
}

//! Error types for the leavemax-optimizer crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the leavemax-optimizer crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptimizerError {
    /// Returned when the iteration cap is zero.
    #[error("max iterations must be >= 1, got {max_iterations}")]
    InvalidIterationCap {
        /// The invalid cap value.
        max_iterations: usize,
    },

    /// Returned when the merge gap does not leave room below the minimum
    /// spacing, which would make every gap either merged or forbidden.
    #[error("merge gap {merge_gap_days} days must be smaller than minimum spacing {min_spacing_days} days")]
    InvalidSpacingWindow {
        /// Configured merge gap in days.
        merge_gap_days: u32,
        /// Configured minimum spacing in days.
        min_spacing_days: u32,
    },

    /// Returned when a holiday is dated outside the start date's year.
    #[error("holiday {date} falls outside planning year {year}")]
    HolidayOutsideYear {
        /// The offending holiday date.
        date: NaiveDate,
        /// The planning year derived from the start date.
        year: i32,
    },

    /// Returned when a seed date is dated outside the start date's year.
    #[error("seed date {date} falls outside planning year {year}")]
    SeedOutsideYear {
        /// The offending seed date.
        date: NaiveDate,
        /// The planning year derived from the start date.
        year: i32,
    },
}

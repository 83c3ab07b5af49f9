//! Configuration for optimizer runs.

use crate::error::OptimizerError;

/// Configuration for an optimizer run.
///
/// The defaults encode the break-spacing policy: two breaks must either sit
/// within the merge gap of each other (one combined vacation period) or at
/// least the minimum spacing apart (genuinely separate breaks). Gaps in
/// between are disallowed.
///
/// # Example
///
/// ```
/// use leavemax_optimizer::OptimizerConfig;
///
/// let config = OptimizerConfig::new()
///     .with_min_spacing_days(21)
///     .with_max_iterations(50);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizerConfig {
    /// Largest gap (days) at which two breaks still count as one cluster.
    merge_gap_days: u32,
    /// Smallest gap (days) at which two breaks count as separate.
    min_spacing_days: u32,
    /// Safety cap on greedy loop iterations.
    max_iterations: usize,
    /// Budget below which lone Monday/Friday candidates are considered.
    single_day_threshold: u32,
}

impl OptimizerConfig {
    /// Creates a configuration with the default policy.
    ///
    /// Defaults: `merge_gap_days = 4`, `min_spacing_days = 14`,
    /// `max_iterations = 100`, `single_day_threshold = 5`.
    pub fn new() -> Self {
        Self {
            merge_gap_days: 4,
            min_spacing_days: 14,
            max_iterations: 100,
            single_day_threshold: 5,
        }
    }

    /// Sets the merge gap in days.
    pub fn with_merge_gap_days(mut self, days: u32) -> Self {
        self.merge_gap_days = days;
        self
    }

    /// Sets the minimum spacing in days.
    pub fn with_min_spacing_days(mut self, days: u32) -> Self {
        self.min_spacing_days = days;
        self
    }

    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, cap: usize) -> Self {
        self.max_iterations = cap;
        self
    }

    /// Sets the remaining-budget threshold for single-day candidates.
    pub fn with_single_day_threshold(mut self, threshold: u32) -> Self {
        self.single_day_threshold = threshold;
        self
    }

    /// Returns the merge gap in days.
    pub fn merge_gap_days(&self) -> u32 {
        self.merge_gap_days
    }

    /// Returns the minimum spacing in days.
    pub fn min_spacing_days(&self) -> u32 {
        self.min_spacing_days
    }

    /// Returns the iteration cap.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Returns the remaining-budget threshold for single-day candidates.
    pub fn single_day_threshold(&self) -> u32 {
        self.single_day_threshold
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the iteration cap is zero or the merge gap is
    /// not strictly below the minimum spacing.
    pub fn validate(&self) -> Result<(), OptimizerError> {
        if self.max_iterations == 0 {
            return Err(OptimizerError::InvalidIterationCap {
                max_iterations: self.max_iterations,
            });
        }
        if self.merge_gap_days >= self.min_spacing_days {
            return Err(OptimizerError::InvalidSpacingWindow {
                merge_gap_days: self.merge_gap_days,
                min_spacing_days: self.min_spacing_days,
            });
        }
        Ok(())
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self::new()
    }
}

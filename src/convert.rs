//! Conversions from TOML config sections to optimizer inputs.

use leavemax_optimizer::{OptimizerConfig, PublicHoliday};

use crate::config::{CalendarToml, OptimizerToml};

/// Builds the optimizer configuration from its TOML section.
pub fn build_optimizer_config(toml: &OptimizerToml) -> OptimizerConfig {
    OptimizerConfig::new()
        .with_merge_gap_days(toml.merge_gap_days)
        .with_min_spacing_days(toml.min_spacing_days)
        .with_max_iterations(toml.max_iterations)
        .with_single_day_threshold(toml.single_day_threshold)
}

/// Builds the holiday list from the calendar section.
pub fn build_holidays(calendar: &CalendarToml) -> Vec<PublicHoliday> {
    calendar
        .holidays
        .iter()
        .map(|h| PublicHoliday::new(h.date, h.name.clone()))
        .collect()
}

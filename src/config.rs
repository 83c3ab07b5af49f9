use chrono::NaiveDate;
use serde::Deserialize;

/// Top-level leavemax configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeavemaxConfig {
    /// Planning defaults, overridable from the CLI.
    #[serde(default)]
    pub plan: PlanToml,

    /// Year calendar: holidays and pre-assigned seed dates.
    pub calendar: CalendarToml,

    /// Optimizer settings.
    #[serde(default)]
    pub optimizer: OptimizerToml,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PlanToml {
    /// First date leave may be placed on.
    pub start: Option<NaiveDate>,
    /// Leave-day budget.
    pub days: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    /// Public holidays of the planning year.
    pub holidays: Vec<HolidayToml>,
    /// Pre-identified bridge days, consumed before the greedy search.
    #[serde(default)]
    pub seed_dates: Vec<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidayToml {
    pub date: NaiveDate,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptimizerToml {
    #[serde(default = "default_merge_gap_days")]
    pub merge_gap_days: u32,
    #[serde(default = "default_min_spacing_days")]
    pub min_spacing_days: u32,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default = "default_single_day_threshold")]
    pub single_day_threshold: u32,
}

impl Default for OptimizerToml {
    fn default() -> Self {
        Self {
            merge_gap_days: default_merge_gap_days(),
            min_spacing_days: default_min_spacing_days(),
            max_iterations: default_max_iterations(),
            single_day_threshold: default_single_day_threshold(),
        }
    }
}

fn default_merge_gap_days() -> u32 {
    4
}
fn default_min_spacing_days() -> u32 {
    14
}
fn default_max_iterations() -> usize {
    100
}
fn default_single_day_threshold() -> u32 {
    5
}

//! # leavemax-optimizer
//!
//! Greedy leave-day selection over one calendar year: given a start date, a
//! leave budget, and the year's public holidays, pick the calendar dates to
//! spend as leave so the contiguous rest they produce (weekends + holidays
//! + leave) is as long as possible, while keeping separate breaks either
//! merged or clearly apart.
//!
//! Candidates are generated per Monday-anchored week under four strategies:
//!
//! | Tier | Strategy | Rest gained |
//! |------|----------|-------------|
//! | 1 | Fill a week already holding back-to-back holidays | 9 |
//! | 2 | Bridge a Tuesday/Thursday holiday onto a weekend | 4 |
//! | 3 | Fill a plain week | 9 |
//! | 4 | Extend a holiday by one adjacent weekday | 2 |
//! | 5 | Lone Monday or Friday for leftover budget | 3 |
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use leavemax_optimizer::{optimize, OptimizerConfig, PublicHoliday};
//!
//! let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
//! let holidays = vec![PublicHoliday::new(start, "New Year's Day")];
//!
//! let plan = optimize(start, 7, &holidays, &[], &OptimizerConfig::default()).unwrap();
//! assert!(plan.len() <= 7);
//! assert!(plan.days().windows(2).all(|w| w[0] < w[1]));
//! ```
//!
//! # Architecture
//!
//! ```text
//! optimize()
//!   ├─ validate_inputs()
//!   ├─ seed fixed days           (optimize.rs)
//!   └─ loop, ≤ max_iterations
//!        ├─ week_candidates()    (week.rs)
//!        ├─ respects_spacing()   (spacing.rs)
//!        └─ fold best + commit   (candidate.rs)
//! ```
//!
//! The loop is a bounded fixed-point search: every iteration rescans all
//! remaining weeks against the days committed so far and stops as soon as
//! no candidate survives validation. The function is pure and re-entrant;
//! all mutable state is local to the call.

pub mod config;
pub mod day;
pub mod error;
pub mod holiday;
pub mod optimize;
pub mod result;

pub(crate) mod candidate;
pub(crate) mod spacing;
pub(crate) mod week;

pub use config::OptimizerConfig;
pub use day::DayIndex;
pub use error::OptimizerError;
pub use holiday::{HolidaySet, PublicHoliday};
pub use optimize::optimize;
pub use result::LeavePlan;

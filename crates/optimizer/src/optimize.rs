//! Optimizer entry point: input validation, fixed seeding, and the bounded
//! greedy loop.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, debug_span};

use crate::candidate::Candidate;
use crate::config::OptimizerConfig;
use crate::day::DayIndex;
use crate::error::OptimizerError;
use crate::holiday::{HolidaySet, PublicHoliday};
use crate::result::LeavePlan;
use crate::spacing::respects_spacing;
use crate::week::week_candidates;

/// Validates the config and the year alignment of all dated inputs.
fn validate_inputs(
    start: NaiveDate,
    holidays: &[PublicHoliday],
    seed_dates: &[NaiveDate],
    config: &OptimizerConfig,
) -> Result<(), OptimizerError> {
    config.validate()?;

    let year = start.year();
    for holiday in holidays {
        if holiday.date.year() != year {
            return Err(OptimizerError::HolidayOutsideYear {
                date: holiday.date,
                year,
            });
        }
    }
    for &seed in seed_dates {
        if seed.year() != year {
            return Err(OptimizerError::SeedOutsideYear { date: seed, year });
        }
    }
    Ok(())
}

/// Selects leave days that maximize contiguous rest for the remainder of
/// the start date's year.
///
/// Runs in two phases. Seeding consumes `seed_dates` in list order —
/// pre-identified allocations that are always taken first while the budget
/// allows, skipping dates in the past, duplicates, and holidays. The greedy
/// loop then repeatedly scans every week through December 31, generates
/// candidates under the four strategies, drops those violating the
/// break-spacing rule, and commits the single best until the budget or the
/// candidates run out.
///
/// The returned plan may hold fewer days than `budget`; exhausting the
/// candidate pool is a normal terminal condition, not an error.
///
/// # Arguments
///
/// * `start` — first date leave may be placed on
/// * `budget` — number of leave days available
/// * `holidays` — public holidays of the start date's year
/// * `seed_dates` — pre-assigned leave days, consumed first
/// * `config` — spacing thresholds and loop bounds
///
/// # Errors
///
/// Returns [`OptimizerError`] if the config is invalid or any holiday or
/// seed date falls outside the start date's year.
pub fn optimize(
    start: NaiveDate,
    budget: u32,
    holidays: &[PublicHoliday],
    seed_dates: &[NaiveDate],
    config: &OptimizerConfig,
) -> Result<LeavePlan, OptimizerError> {
    validate_inputs(start, holidays, seed_dates, config)?;

    let start_day = DayIndex::from_date(start);
    let year_end = DayIndex::from_date(
        NaiveDate::from_ymd_opt(start.year(), 12, 31).expect("December 31 exists in every year"),
    );
    let holiday_set = HolidaySet::from_holidays(holidays);

    let mut selected: BTreeSet<DayIndex> = BTreeSet::new();
    let mut remaining = budget;

    // Phase 1: fixed seeding.
    for &seed in seed_dates {
        if remaining == 0 {
            break;
        }
        let day = DayIndex::from_date(seed);
        if day < start_day || holiday_set.contains(day) {
            continue;
        }
        if selected.insert(day) {
            remaining -= 1;
            debug!(date = %seed, "seed day committed");
        }
    }

    // Phase 2: bounded greedy loop. Each pass rescans the whole remaining
    // year; the search space is ~50 weeks, so a global recompute stays
    // cheap and keeps the loop free of incremental bookkeeping.
    let mut iterations = 0;
    let mut week_buf: Vec<Candidate> = Vec::new();
    while remaining > 0 && iterations < config.max_iterations() {
        iterations += 1;
        let _iter = debug_span!("iteration", n = iterations).entered();

        let mut best: Option<Candidate> = None;
        let mut monday = start_day.week_monday();
        while monday <= year_end {
            week_buf.clear();
            week_candidates(
                monday,
                start_day,
                &holiday_set,
                &selected,
                remaining,
                config.single_day_threshold(),
                &mut week_buf,
            );
            for candidate in week_buf.drain(..) {
                if !respects_spacing(
                    candidate.span,
                    &selected,
                    config.merge_gap_days(),
                    config.min_spacing_days(),
                ) {
                    continue;
                }
                let replace = match &best {
                    None => true,
                    Some(incumbent) => candidate.beats(incumbent),
                };
                if replace {
                    best = Some(candidate);
                }
            }
            monday = monday.offset(7);
        }

        match best {
            Some(candidate) => {
                debug!(
                    tier = ?candidate.tier,
                    days = candidate.days.len(),
                    rest_gained = candidate.rest_gained,
                    "candidate committed"
                );
                remaining -= candidate.days.len() as u32;
                selected.extend(candidate.days);
            }
            None => {
                debug!("no valid candidate remains, stopping early");
                break;
            }
        }
    }

    let days: Vec<NaiveDate> = selected.iter().map(|d| d.to_date()).collect();
    Ok(LeavePlan::new(days, iterations, remaining))
}

//! Week-window candidate generation.
//!
//! Each greedy iteration scans Monday-anchored weeks and proposes leave
//! allocations under four strategies. Weekday activity is confined to
//! Monday through Friday; flanking weekends only ever appear inside break
//! spans.

use std::collections::BTreeSet;

use crate::candidate::{BreakSpan, Candidate, Tier};
use crate::day::DayIndex;
use crate::holiday::HolidaySet;

/// Appends every candidate for the week anchored at `monday`, in a fixed
/// order (fill, Tuesday bridge, Thursday bridge, per-holiday extensions,
/// Monday/Friday singles). The caller's fold relies on this order for
/// deterministic tie-breaking.
pub(crate) fn week_candidates(
    monday: DayIndex,
    start: DayIndex,
    holidays: &HolidaySet,
    selected: &BTreeSet<DayIndex>,
    remaining: u32,
    single_day_threshold: u32,
    out: &mut Vec<Candidate>,
) {
    // A day is spendable when it is in the future, not a holiday, and not
    // already committed.
    let free = |day: DayIndex| {
        day >= start && !holidays.contains(day) && !selected.contains(&day)
    };

    let weekdays: [DayIndex; 5] = [
        monday,
        monday.offset(1),
        monday.offset(2),
        monday.offset(3),
        monday.offset(4),
    ];
    let week_holidays: Vec<DayIndex> = weekdays
        .iter()
        .copied()
        .filter(|&d| holidays.contains(d))
        .collect();

    // Saturday before the week through Sunday after it: the 9-day span a
    // fully rested week produces.
    let full_span = BreakSpan {
        start: monday.offset(-2),
        end: monday.offset(6),
    };

    // Fill the week: spend on every remaining weekday. Tier 1 when the week
    // already holds back-to-back holidays, tier 3 otherwise.
    let fill: Vec<DayIndex> = weekdays.iter().copied().filter(|&d| free(d)).collect();
    if !fill.is_empty() && fill.len() as u32 <= remaining {
        let tier = if has_consecutive_holidays(&week_holidays) {
            Tier::ConsecutiveFill
        } else {
            Tier::FillWeek
        };
        out.push(Candidate {
            days: fill,
            tier,
            rest_gained: 9,
            span: full_span,
        });
    }

    // Bridges: a Tuesday holiday turns Monday into a 4-day break off the
    // preceding weekend; a Thursday holiday does the same with Friday and
    // the following weekend.
    let tuesday = monday.offset(1);
    if holidays.contains(tuesday) && free(monday) {
        out.push(Candidate {
            days: vec![monday],
            tier: Tier::Bridge,
            rest_gained: 4,
            span: BreakSpan {
                start: monday.offset(-2),
                end: tuesday,
            },
        });
    }
    let thursday = monday.offset(3);
    let friday = monday.offset(4);
    if holidays.contains(thursday) && free(friday) {
        out.push(Candidate {
            days: vec![friday],
            tier: Tier::Bridge,
            rest_gained: 4,
            span: BreakSpan {
                start: thursday,
                end: monday.offset(6),
            },
        });
    }

    // Holiday extensions: one leave day immediately before or after each
    // weekday holiday, weekdays only.
    for &h in &week_holidays {
        let prev = h.offset(-1);
        if free(prev) && !prev.is_weekend() {
            out.push(Candidate {
                days: vec![prev],
                tier: Tier::Extension,
                rest_gained: 2,
                span: BreakSpan { start: prev, end: h },
            });
        }
        let next = h.offset(1);
        if free(next) && !next.is_weekend() {
            out.push(Candidate {
                days: vec![next],
                tier: Tier::Extension,
                rest_gained: 2,
                span: BreakSpan { start: h, end: next },
            });
        }
    }

    // Leftover singles: once the budget is too small for a full week,
    // a lone Monday or Friday still stretches a weekend.
    if remaining < single_day_threshold {
        if free(monday) {
            out.push(Candidate {
                days: vec![monday],
                tier: Tier::Single,
                rest_gained: 3,
                span: BreakSpan {
                    start: monday.offset(-2),
                    end: monday,
                },
            });
        }
        if free(friday) {
            out.push(Candidate {
                days: vec![friday],
                tier: Tier::Single,
                rest_gained: 3,
                span: BreakSpan {
                    start: friday,
                    end: monday.offset(6),
                },
            });
        }
    }
}

/// True when any two of the week's holidays fall on adjacent days.
fn has_consecutive_holidays(week_holidays: &[DayIndex]) -> bool {
    // week_holidays is built Monday-to-Friday, so it is already sorted.
    week_holidays
        .windows(2)
        .any(|pair| pair[1].days_since(pair[0]) <= 1)
}

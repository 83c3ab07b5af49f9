//! Break-spacing validation against already-committed leave days.

use std::collections::BTreeSet;

use crate::candidate::BreakSpan;
use crate::day::DayIndex;

/// Checks a candidate break span against every committed leave day.
///
/// A gap of at most `merge_gap_days` means the candidate merges into the
/// existing break; a gap of at least `min_spacing_days` means it stands
/// clearly apart. Anything strictly in between is rejected: too close to be
/// separate, too far to be the same.
pub(crate) fn respects_spacing(
    span: BreakSpan,
    selected: &BTreeSet<DayIndex>,
    merge_gap_days: u32,
    min_spacing_days: u32,
) -> bool {
    selected.iter().all(|&day| {
        let gap = span.gap_to(day);
        gap <= merge_gap_days as i32 || gap >= min_spacing_days as i32
    })
}

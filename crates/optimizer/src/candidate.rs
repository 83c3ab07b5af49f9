//! Candidate leave allocations and their preference order.

use crate::day::DayIndex;

/// Strategy tier. Lower wins before any score-based tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Tier {
    /// Fill a week that already holds back-to-back holidays.
    ConsecutiveFill = 1,
    /// Single day bridging a Tuesday or Thursday holiday onto a weekend.
    Bridge = 2,
    /// Fill a plain week end to end.
    FillWeek = 3,
    /// Single day adjacent to an isolated holiday.
    Extension = 4,
    /// Lone Monday or Friday for leftover budget.
    Single = 5,
}

/// The contiguous rest span a candidate creates or extends, inclusive on
/// both ends. Includes adjoining weekend and holiday days, so it can reach
/// beyond the leave days themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BreakSpan {
    pub start: DayIndex,
    pub end: DayIndex,
}

impl BreakSpan {
    /// Distance in days from `day` to the nearer span boundary, 0 when the
    /// day lies inside the span.
    pub fn gap_to(self, day: DayIndex) -> i32 {
        if day < self.start {
            self.start.days_since(day)
        } else if day > self.end {
            day.days_since(self.end)
        } else {
            0
        }
    }
}

/// A proposed leave allocation, evaluated and discarded within a single
/// iteration of the greedy loop.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    /// Leave days to spend, ascending, 1 to 5 entries.
    pub days: Vec<DayIndex>,
    /// Strategy tier.
    pub tier: Tier,
    /// Contiguous rest days the allocation claims to produce.
    pub rest_gained: u8,
    /// The break this allocation creates or extends.
    pub span: BreakSpan,
}

impl Candidate {
    /// Strict-improvement test: lower tier wins, ties broken by more rest
    /// gained, remaining ties by fewer leave days spent. Equal candidates
    /// never beat each other, so the first one generated wins ties.
    pub fn beats(&self, incumbent: &Candidate) -> bool {
        if self.tier != incumbent.tier {
            return self.tier < incumbent.tier;
        }
        if self.rest_gained != incumbent.rest_gained {
            return self.rest_gained > incumbent.rest_gained;
        }
        self.days.len() < incumbent.days.len()
    }
}

//! End-to-end scenarios with hand-checked expected plans.

use chrono::{Datelike, NaiveDate, Weekday};
use leavemax_optimizer::{optimize, OptimizerConfig, PublicHoliday};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn new_year_start_prefers_structures_over_singles() {
    // 2026-01-01 is a Thursday holiday. Expected commit order:
    //   1. bridge Friday Jan 2 (tier 2, Thu holiday week),
    //   2. fill the following week Jan 5-9 (tier 3, merges across the
    //      Jan 3-4 weekend into an 11-day break),
    //   3. with one day left, the first lone Friday clearing the 14-day
    //      spacing from Jan 9 is Jan 23.
    let start = date(2026, 1, 1);
    let holidays = vec![PublicHoliday::new(start, "New Year's Day")];
    let plan = optimize(start, 7, &holidays, &[], &OptimizerConfig::default()).unwrap();

    assert_eq!(
        plan.days(),
        &[
            date(2026, 1, 2),
            date(2026, 1, 5),
            date(2026, 1, 6),
            date(2026, 1, 7),
            date(2026, 1, 8),
            date(2026, 1, 9),
            date(2026, 1, 23),
        ]
    );
    assert_eq!(plan.iterations(), 3);
    assert_eq!(plan.remaining_budget(), 0);
}

#[test]
fn consecutive_holidays_win_tier_one_fill() {
    // Tue 2026-03-10 and Wed 2026-03-11 are back-to-back holidays. The
    // tier-1 fill of that week (Mon, Thu, Fri) must be committed ahead of
    // the plain tier-3 fills available everywhere else, producing a 9-day
    // break from Sat 03-07 through Sun 03-15.
    let start = date(2026, 3, 2); // a Monday
    let holidays = vec![
        PublicHoliday::new(date(2026, 3, 10), "holiday"),
        PublicHoliday::new(date(2026, 3, 11), "holiday (observed)"),
    ];
    let plan = optimize(start, 5, &holidays, &[], &OptimizerConfig::default()).unwrap();

    let fill_days = [date(2026, 3, 9), date(2026, 3, 12), date(2026, 3, 13)];
    for d in fill_days {
        assert!(plan.days().contains(&d), "fill day {d} missing");
    }

    // Every day of the Sat-to-Sun span is now rest: weekend, leave, or
    // holiday.
    let mut d = date(2026, 3, 7);
    while d <= date(2026, 3, 15) {
        let is_rest = matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
            || plan.days().contains(&d)
            || holidays.iter().any(|h| h.date == d);
        assert!(is_rest, "{d} breaks the 9-day span");
        d = d.succ_opt().unwrap();
    }

    // The two leftover days fall to spaced-out singles.
    assert_eq!(
        plan.days(),
        &[
            date(2026, 3, 9),
            date(2026, 3, 12),
            date(2026, 3, 13),
            date(2026, 3, 27),
            date(2026, 3, 30),
        ]
    );
}

#[test]
fn forbidden_band_candidate_is_rejected() {
    // After committing the Mar 9 bridge (holiday Tue Mar 10), the extension
    // next to the Fri Mar 20 holiday would sit 10 days away — inside the
    // disallowed 5..=13 band — and must lose to a merged extension even
    // though both are tier 4.
    let start = date(2026, 3, 2);
    let holidays = vec![
        PublicHoliday::new(date(2026, 3, 10), "holiday A"),
        PublicHoliday::new(date(2026, 3, 20), "holiday B"),
    ];
    let plan = optimize(start, 2, &holidays, &[], &OptimizerConfig::default()).unwrap();

    assert_eq!(plan.days(), &[date(2026, 3, 9), date(2026, 3, 11)]);
    assert!(
        !plan.days().contains(&date(2026, 3, 19)),
        "rejected candidate leaked into the plan"
    );
}

#[test]
fn relaxed_spacing_admits_the_band() {
    // A seeded Monday Mar 9 puts the extension next to the Fri Mar 20
    // holiday exactly 10 days away. Under the default 4/14 policy the
    // tier-4 extension is rejected and the first merged tier-5 single
    // (Friday Mar 6, one day off the seed's span) wins; with min_spacing
    // lowered to 7 the extension becomes legal and its better tier takes
    // the pick.
    let start = date(2026, 3, 2);
    let holidays = vec![PublicHoliday::new(date(2026, 3, 20), "holiday")];
    let seeds = vec![date(2026, 3, 9)];

    let strict = optimize(start, 2, &holidays, &seeds, &OptimizerConfig::default()).unwrap();
    assert_eq!(strict.days(), &[date(2026, 3, 6), date(2026, 3, 9)]);

    let relaxed = optimize(
        start,
        2,
        &holidays,
        &seeds,
        &OptimizerConfig::new().with_min_spacing_days(7),
    )
    .unwrap();
    assert_eq!(relaxed.days(), &[date(2026, 3, 9), date(2026, 3, 19)]);
}

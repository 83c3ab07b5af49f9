use std::fs;

use anyhow::{bail, Context, Result};
use tracing::{info, info_span};

use leavemax_optimizer::optimize;

use crate::cli::PlanArgs;
use crate::config::LeavemaxConfig;
use crate::convert;

/// Runs the `plan` subcommand.
///
/// Steps:
/// 1. Load and parse the TOML configuration.
/// 2. Resolve start date and budget (CLI overrides config).
/// 3. Run the optimizer.
/// 4. Print one selected date per line.
pub fn run(args: PlanArgs) -> Result<()> {
    let _span = info_span!("plan").entered();

    // 1. Load configuration.
    let raw = fs::read_to_string(&args.config)
        .with_context(|| format!("reading config file {}", args.config.display()))?;
    let config: LeavemaxConfig = toml::from_str(&raw)
        .with_context(|| format!("parsing config file {}", args.config.display()))?;

    // 2. Resolve planning inputs. CLI flags win over the [plan] section.
    let start = match args.start.or(config.plan.start) {
        Some(d) => d,
        None => bail!("no start date given; set [plan] start in the config or pass --start"),
    };
    let budget = match args.days.or(config.plan.days) {
        Some(d) => d,
        None => bail!("no leave budget given; set [plan] days in the config or pass --days"),
    };

    let holidays = convert::build_holidays(&config.calendar);
    let optimizer_config = convert::build_optimizer_config(&config.optimizer);

    info!(
        %start,
        budget,
        holidays = holidays.len(),
        seeds = config.calendar.seed_dates.len(),
        "planning leave"
    );

    // 3. Optimize.
    let plan = optimize(
        start,
        budget,
        &holidays,
        &config.calendar.seed_dates,
        &optimizer_config,
    )
    .context("computing leave plan")?;

    // 4. Report.
    for day in plan.days() {
        println!("{day}");
    }

    info!(
        chosen = plan.len(),
        remaining = plan.remaining_budget(),
        iterations = plan.iterations(),
        "plan complete"
    );

    Ok(())
}

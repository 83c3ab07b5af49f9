use std::fs;

use anyhow::{Context, Result};
use tracing::warn;

use crate::cli::CheckArgs;
use crate::config::LeavemaxConfig;
use crate::convert;

/// Runs the `check` subcommand: parse and validate a configuration
/// file without computing a plan.
pub fn run(args: CheckArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.config)
        .with_context(|| format!("reading config file {}", args.config.display()))?;
    let config: LeavemaxConfig = toml::from_str(&raw)
        .with_context(|| format!("parsing config file {}", args.config.display()))?;

    let optimizer_config = convert::build_optimizer_config(&config.optimizer);
    optimizer_config
        .validate()
        .context("invalid [optimizer] section")?;

    if config.calendar.holidays.is_empty() {
        warn!("calendar has no holidays; plans will only contain generic fill weeks");
    }

    println!("{}: ok", args.config.display());
    println!("  holidays:   {}", config.calendar.holidays.len());
    println!("  seed dates: {}", config.calendar.seed_dates.len());
    match (config.plan.start, config.plan.days) {
        (Some(start), Some(days)) => {
            println!("  plan:       {start}, {days} day(s)");
        }
        _ => {
            println!("  plan:       incomplete, pass --start/--days to `plan`");
        }
    }

    Ok(())
}

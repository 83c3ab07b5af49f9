use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Leavemax greedy leave-day planner.
#[derive(Parser)]
#[command(
    name = "leavemax",
    version,
    about = "Plan leave days that maximize contiguous rest around public holidays"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute a leave plan for the configured year.
    Plan(PlanArgs),
    /// Validate a calendar file without planning.
    Check(CheckArgs),
}

/// Arguments for the `plan` subcommand.
#[derive(clap::Args)]
pub struct PlanArgs {
    /// Path to TOML calendar/configuration file.
    #[arg(short, long, default_value = "leavemax.toml")]
    pub config: PathBuf,

    /// Override the start date from config (YYYY-MM-DD).
    #[arg(short, long)]
    pub start: Option<NaiveDate>,

    /// Override the leave-day budget from config.
    #[arg(short, long)]
    pub days: Option<u32>,
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Path to TOML calendar/configuration file.
    #[arg(short, long, default_value = "leavemax.toml")]
    pub config: PathBuf,
}

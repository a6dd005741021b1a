//! Command-line interface for planning Compass itineraries offline.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod plan;

pub use error::CliError;
use plan::{PlanArgs, run_plan};

pub(crate) const ARG_PLAN_REQUEST: &str = "request";
pub(crate) const ARG_PLAN_CATALOGUE: &str = "catalogue";
pub(crate) const ARG_PLAN_MINUTES_PER_KM: &str = "minutes-per-km";
pub(crate) const ARG_PLAN_ALTERNATIVES: &str = "alternatives";
pub(crate) const ARG_PLAN_OUTPUT: &str = "output";
pub(crate) const ENV_PLAN_REQUEST: &str = "COMPASS_CMDS_PLAN_REQUEST_PATH";

/// Run the Compass CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "compass",
    about = "Offline itinerary planning for the Compass city guide",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order a day of sightseeing from a JSON plan request.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;

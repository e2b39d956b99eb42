//! Core library entry for the `gradewatch` CLI.
//!
//! Grades student coding assignments submitted as pull requests: checks
//! whether the required files were modified, computes a completion
//! score, and publishes the report to a sheet endpoint.

pub mod adapters;
pub mod assignment;
pub mod cli;
pub mod config;
pub mod constraint;
pub mod context;
pub mod pipeline;
pub mod ports;
pub mod reconcile;
pub mod report;
pub mod roster;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails, the config file
/// cannot be loaded, or the report cannot be published.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    let mut config = config::Config::load(cli.config.as_deref())?;
    if let Some(roster) = cli.roster {
        config.roster_path = roster;
    }
    let ctx = context::ServiceContext::live(&config);
    pipeline::run(&ctx, &config)
}

//! Command-line interface for bulbul.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub mod args;
mod commands;
mod exit_status;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Environment variable holding a tracing filter, e.g. `BULBUL_LOG=bulbul=trace`.
pub const LOG_ENV: &str = "BULBUL_LOG";

/// Install the stderr tracing subscriber.
///
/// `BULBUL_LOG` wins when set; otherwise `--verbose` enables debug events.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args)
}

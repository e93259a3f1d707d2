//! Prun: prompt template runner for AI command-line tools.
//!
//! This is the main entry point for the `prun` CLI. It parses arguments,
//! initializes logging, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

mod cli;
mod commands;
mod config;
mod context;
mod error;
mod exit_codes;
mod invocation;
mod paths;
mod prompt;
mod requirements;
mod vars;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

/// Log to stderr at `warn` (or `debug` with `--debug`); `RUST_LOG` wins.
fn setup_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_logging(cli.debug);

    let code = match commands::dispatch(cli) {
        Ok(code) => code,
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);
            err.exit_code()
        }
    };

    ExitCode::from(u8::try_from(code).unwrap_or(exit_codes::USER_ERROR as u8))
}

//! Command implementations for prun.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each handler returns the process exit code on success.

mod list;
mod run;
mod show;

use crate::cli::{Cli, Command};
use crate::context::{GlobalOptions, PrunContext};
use crate::error::Result;
use crate::prompt::{ParsedPrompt, RawDocument};
use crate::requirements::{Host, SystemHost};
use std::path::PathBuf;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. The context is
/// resolved once from global options and shared by every handler.
pub fn dispatch(cli: Cli) -> Result<i32> {
    let host = SystemHost;
    let options = GlobalOptions {
        prompts_dir: cli.prompts_dir,
        config: cli.config,
    };
    let ctx = PrunContext::resolve(&options, &host)?;

    match cli.command {
        Command::Run(args) => run::cmd_run(&ctx, args, &host),
        Command::List => list::cmd_list(&ctx),
        Command::Show(args) => show::cmd_show(&ctx, args, &host),
    }
}

/// Resolve and parse a prompt, logging any recovered parse problems.
fn load_prompt(ctx: &PrunContext, input: &str, host: &dyn Host) -> Result<(PathBuf, ParsedPrompt)> {
    let path = ctx.resolver.resolve(input, host)?;
    let prompt = RawDocument::read(&path)?.parse()?;
    for warning in &prompt.warnings {
        log::warn!("{}", warning);
    }
    Ok((path, prompt))
}

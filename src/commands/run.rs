//! Implementation of the `prun run` command.
//!
//! Resolves the prompt, assembles variables, validates, then either prints
//! the command (`--dry-run`) or runs it.

use super::load_prompt;
use crate::cli::RunArgs;
use crate::context::PrunContext;
use crate::error::Result;
use crate::exit_codes;
use crate::invocation::{RenderedInvocation, execute, prepare_invocation};
use crate::requirements::Host;
use crate::vars::VariableSources;

/// Execute the `prun run` command.
///
/// Returns the external tool's exit code, or success for a dry run.
pub fn cmd_run(ctx: &PrunContext, args: RunArgs, host: &dyn Host) -> Result<i32> {
    let invocation = prepare_run(ctx, &args, host)?;

    if args.dry_run {
        println!("{}", shell_words::join(&invocation.argv));
        println!();
        println!("{}", invocation.text);
        return Ok(exit_codes::SUCCESS);
    }

    execute(&invocation)
}

fn prepare_run(ctx: &PrunContext, args: &RunArgs, host: &dyn Host) -> Result<RenderedInvocation> {
    let (path, prompt) = load_prompt(ctx, &args.prompt, host)?;
    log::debug!("running prompt {}", path.display());

    let sources = VariableSources {
        file: args.file.clone(),
        json: args.json.clone(),
        assignments: args.vars.clone(),
    };
    let assembled = sources.assemble(host)?;
    for warning in &assembled.warnings {
        log::warn!("{}", warning);
    }

    let config = ctx.invocation_config(args.verbose)?;
    prepare_invocation(&prompt, &assembled.variables, &config, host)
}

//! External tool execution.

use super::RenderedInvocation;
use crate::error::{PrunError, Result};
use crate::exit_codes;
use std::process::Command;

/// Run the invocation with inherited stdio and wait for it to finish.
///
/// Returns the tool's exit code. A tool terminated by a signal reports
/// [`exit_codes::TOOL_FAILURE`].
pub fn execute(invocation: &RenderedInvocation) -> Result<i32> {
    let (program, args) = invocation
        .argv
        .split_first()
        .ok_or_else(|| PrunError::ToolFailure("invocation has no program".to_string()))?;

    log::debug!("executing {} with {} arguments", program, args.len());
    let status = Command::new(program).args(args).status().map_err(|e| {
        PrunError::ToolFailure(format!(
            "failed to execute '{}': {}\n\
             Fix: ensure the command is installed and in PATH, or set `command` in the prun config.",
            program, e
        ))
    })?;

    Ok(status.code().unwrap_or(exit_codes::TOOL_FAILURE))
}

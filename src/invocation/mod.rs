//! Turning a parsed prompt into an invocation of the external tool.
//!
//! - **Builder**: argv construction and allow-list policy
//! - **Executor**: running the assembled command
//!
//! [`prepare_invocation`] runs the checks in a fixed order so the user fixes
//! input problems before environment problems:
//!
//! 1. every referenced variable is bound
//! 2. the body is rendered
//! 3. declared requirements are satisfied by the host
//! 4. argv is assembled

mod builder;
mod executor;


use crate::error::{PrunError, Result};
use crate::prompt::ParsedPrompt;
use crate::requirements::{Host, validate_requirements};
use crate::vars::VariableMap;

pub use builder::{InvocationConfig, build_argv};
pub use executor::execute;

/// Final prompt text plus the command line that carries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedInvocation {
    pub text: String,
    pub argv: Vec<String>,
}

/// Fail with every referenced variable that `variables` does not bind.
pub fn check_missing_variables(prompt: &ParsedPrompt, variables: &VariableMap) -> Result<()> {
    let missing: Vec<String> = prompt
        .required_variables()
        .into_iter()
        .filter(|name| !variables.contains_key(name))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PrunError::MissingVariable { missing })
    }
}

/// Validate and render a prompt into a ready-to-run invocation.
pub fn prepare_invocation(
    prompt: &ParsedPrompt,
    variables: &VariableMap,
    config: &InvocationConfig,
    host: &dyn Host,
) -> Result<RenderedInvocation> {
    check_missing_variables(prompt, variables)?;
    let text = prompt.body.render(variables).to_text();

    if let Some(requirements) = &prompt.requirements {
        validate_requirements(requirements, host)?;
    }

    let argv = build_argv(
        &text,
        prompt.model.as_deref(),
        prompt.requirements.as_ref(),
        config,
        host,
    )?;
    Ok(RenderedInvocation { text, argv })
}

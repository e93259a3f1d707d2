//! Argument construction for the external tool.

use crate::error::Result;
use crate::requirements::{Host, Requirements};

/// Flag carrying the prompt payload.
pub const PROMPT_FLAG: &str = "-p";

/// Flags selecting streaming structured output.
pub const VERBOSE_FLAGS: [&str; 3] = ["--output-format", "stream-json", "--verbose"];

/// Flag selecting the model.
pub const MODEL_FLAG: &str = "--model";

/// Flag carrying the comma-joined allow-list.
pub const ALLOWED_TOOLS_FLAG: &str = "--allowedTools";

/// Flag granting access to one directory.
pub const ADD_DIR_FLAG: &str = "--add-dir";

/// Settings that shape every invocation.
#[derive(Debug, Clone)]
pub struct InvocationConfig {
    /// Program and fixed leading arguments.
    pub program: Vec<String>,
    /// Request streaming structured output.
    pub verbose: bool,
    /// Tool grants used when a prompt declares commands but no tools.
    pub default_tools: Vec<String>,
}

/// Scoped shell-execution grant for one command.
pub fn command_grant(command: &str) -> String {
    format!("Bash({}:*)", command)
}

/// Derive the allow-list for a prompt's requirements.
///
/// Each command becomes a scoped shell grant. Declared tools are appended
/// verbatim; when no tools are declared, the default tool set is appended
/// instead. Prompts that declare neither get no allow-list at all.
pub fn allowed_tools(requirements: &Requirements, default_tools: &[String]) -> Vec<String> {
    if !requirements.declares_grants() {
        return Vec::new();
    }

    let mut allowed: Vec<String> = requirements
        .commands
        .iter()
        .map(|c| command_grant(c))
        .collect();
    match &requirements.tools {
        Some(tools) => allowed.extend(tools.iter().cloned()),
        None => allowed.extend(default_tools.iter().cloned()),
    }
    allowed
}

/// Assemble the full argv for the external tool.
///
/// Order: program, prompt payload, verbose flags, model, allow-list, then
/// one `--add-dir` pair per declared directory (absolute, in declaration
/// order, duplicates kept).
pub fn build_argv(
    text: &str,
    model: Option<&str>,
    requirements: Option<&Requirements>,
    config: &InvocationConfig,
    host: &dyn Host,
) -> Result<Vec<String>> {
    let mut argv = config.program.clone();
    argv.push(PROMPT_FLAG.to_string());
    argv.push(text.to_string());

    if config.verbose {
        argv.extend(VERBOSE_FLAGS.iter().map(|s| s.to_string()));
    }

    if let Some(model) = model {
        argv.push(MODEL_FLAG.to_string());
        argv.push(model.to_string());
    }

    let Some(requirements) = requirements else {
        return Ok(argv);
    };

    let allowed = allowed_tools(requirements, &config.default_tools);
    if !allowed.is_empty() {
        argv.push(ALLOWED_TOOLS_FLAG.to_string());
        argv.push(allowed.join(","));
    }

    for dir in &requirements.directories {
        argv.push(ADD_DIR_FLAG.to_string());
        argv.push(host.expand(dir)?.to_string_lossy().into_owned());
    }

    Ok(argv)
}

//! Implementation of the `prun show` command.
//!
//! Displays where a prompt resolves to and what it needs to run.

use super::load_prompt;
use crate::cli::ShowArgs;
use crate::context::PrunContext;
use crate::error::Result;
use crate::exit_codes;
use crate::prompt::ParsedPrompt;
use crate::requirements::Host;
use std::path::Path;

/// Execute the `prun show` command.
pub fn cmd_show(ctx: &PrunContext, args: ShowArgs, host: &dyn Host) -> Result<i32> {
    let (path, prompt) = load_prompt(ctx, &args.prompt, host)?;
    print!("{}", render_details(&path, &prompt));
    Ok(exit_codes::SUCCESS)
}

fn render_details(path: &Path, prompt: &ParsedPrompt) -> String {
    let mut out = String::new();
    out.push_str(&format!("Path:         {}\n", path.display()));

    if let Some(name) = &prompt.name {
        out.push_str(&format!("Name:         {}\n", name));
    }
    if let Some(description) = &prompt.description {
        out.push_str(&format!("Description:  {}\n", description));
    }
    if let Some(model) = &prompt.model {
        out.push_str(&format!("Model:        {}\n", model));
    }

    let variables = prompt.required_variables();
    if variables.is_empty() {
        out.push_str("Variables:    (none)\n");
    } else {
        let names: Vec<_> = variables.into_iter().collect();
        out.push_str(&format!("Variables:    {}\n", names.join(", ")));
    }

    if let Some(requirements) = &prompt.requirements {
        let section = |label: &str, items: &[String]| {
            if items.is_empty() {
                String::new()
            } else {
                format!("  {:<13}{}\n", format!("{}:", label), items.join(", "))
            }
        };

        out.push_str("Requirements:\n");
        out.push_str(&section("commands", &requirements.commands));
        if let Some(tools) = &requirements.tools {
            out.push_str(&section("tools", tools));
        }
        out.push_str(&section("environment", &requirements.environment));
        out.push_str(&section("directories", &requirements.directories));
    }

    out
}

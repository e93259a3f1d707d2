//! Implementation of the `prun list` command.

use crate::context::PrunContext;
use crate::error::Result;
use crate::exit_codes;
use crate::prompt::{PromptEntry, RawDocument};

/// Execute the `prun list` command.
///
/// Prints one line per prompt in the prompts directory, with its
/// description when the file parses and declares one.
pub fn cmd_list(ctx: &PrunContext) -> Result<i32> {
    let entries = ctx.resolver.available()?;

    if entries.is_empty() {
        println!("No prompts found in {}", ctx.resolver.search_dir().display());
        return Ok(exit_codes::SUCCESS);
    }

    let described: Vec<_> = entries
        .into_iter()
        .map(|entry| {
            let description = describe(&entry);
            (entry, description)
        })
        .collect();

    for line in format_listing(&described) {
        println!("{}", line);
    }
    Ok(exit_codes::SUCCESS)
}

fn describe(entry: &PromptEntry) -> Option<String> {
    match RawDocument::read(&entry.path).and_then(|doc| doc.parse()) {
        Ok(prompt) => prompt.description,
        Err(e) => {
            log::debug!("skipping description for {}: {}", entry.path.display(), e);
            None
        }
    }
}

/// Align names into a column, followed by descriptions.
fn format_listing(entries: &[(PromptEntry, Option<String>)]) -> Vec<String> {
    let width = entries
        .iter()
        .map(|(entry, _)| entry.name.len())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|(entry, description)| match description {
            Some(desc) => format!("{:<width$}  {}", entry.name, desc, width = width),
            None => entry.name.clone(),
        })
        .collect()
}

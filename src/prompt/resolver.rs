//! Mapping prompt names and paths to files.

use crate::error::{PrunError, Result};
use crate::requirements::Host;
use std::path::{Path, PathBuf};

/// Extensions probed for a bare prompt name, in priority order.
pub const PROMPT_EXTENSIONS: [&str; 3] = [".prompt.yaml", ".md", ".txt"];

/// A prompt file found in the search directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptEntry {
    /// File name without its prompt extension.
    pub name: String,
    pub path: PathBuf,
}

/// Resolves user input to a prompt file.
#[derive(Debug, Clone)]
pub struct PromptResolver {
    search_dir: PathBuf,
}

impl PromptResolver {
    pub fn new(search_dir: impl Into<PathBuf>) -> Self {
        Self {
            search_dir: search_dir.into(),
        }
    }

    pub fn search_dir(&self) -> &Path {
        &self.search_dir
    }

    /// Resolve a prompt name or path to an existing file.
    ///
    /// 1. If `input` names an existing file (relative to the current
    ///    directory), it is used regardless of its extension.
    /// 2. If `input` contains a `.`, resolution stops there.
    /// 3. Otherwise `<search_dir>/<input><ext>` is probed for each of
    ///    [`PROMPT_EXTENSIONS`] in order.
    pub fn resolve(&self, input: &str, host: &dyn Host) -> Result<PathBuf> {
        let direct = host.expand(input)?;
        if direct.is_file() {
            log::debug!("resolved prompt '{}' directly to {}", input, direct.display());
            return Ok(direct);
        }

        let mut tried = vec![direct];
        if !input.contains('.') {
            for ext in PROMPT_EXTENSIONS {
                let candidate = self.search_dir.join(format!("{}{}", input, ext));
                if candidate.is_file() {
                    log::debug!("resolved prompt '{}' to {}", input, candidate.display());
                    return Ok(candidate);
                }
                tried.push(candidate);
            }
        }

        let tried = tried
            .iter()
            .map(|p| format!("  {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n");
        Err(PrunError::NotFound(format!(
            "prompt '{}' not found\n\nTried:\n{}\n\nFix: run `prun list` to see available prompts.",
            input, tried
        )))
    }

    /// List prompt files in the search directory, sorted by name and then
    /// extension priority.
    ///
    /// A missing search directory yields an empty list.
    pub fn available(&self) -> Result<Vec<PromptEntry>> {
        let entries = match std::fs::read_dir(&self.search_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(PrunError::Io(format!(
                    "failed to read prompts directory '{}': {}",
                    self.search_dir.display(),
                    e
                )));
            }
        };

        let mut found = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                PrunError::Io(format!(
                    "failed to read prompts directory '{}': {}",
                    self.search_dir.display(),
                    e
                ))
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy().to_string();
            let matched = PROMPT_EXTENSIONS
                .iter()
                .enumerate()
                .find_map(|(rank, ext)| file_name.strip_suffix(ext).map(|stem| (rank, stem)));
            if let Some((rank, stem)) = matched {
                if !stem.is_empty() {
                    found.push((
                        stem.to_string(),
                        rank,
                        PromptEntry {
                            name: stem.to_string(),
                            path,
                        },
                    ));
                }
            }
        }

        found.sort_by(|a, b| (&a.0, a.1).cmp(&(&b.0, b.1)));
        Ok(found.into_iter().map(|(_, _, entry)| entry).collect())
    }
}

//! Host checks for declared requirements.

use super::Requirements;
use super::host::Host;
use crate::error::{PrunError, RequirementKind, Result};
use std::path::Path;

/// Check every declared requirement against the host.
///
/// Categories are checked in a fixed order: commands, environment,
/// directories. The first category with failures aborts validation, and its
/// error lists every failing entry of that category.
pub fn validate_requirements(requirements: &Requirements, host: &dyn Host) -> Result<()> {
    let commands = missing_commands(&requirements.commands, host)?;
    fail_on(RequirementKind::Commands, commands)?;

    let environment = requirements
        .environment
        .iter()
        .filter(|name| host.lookup_env(name).is_none())
        .cloned()
        .collect();
    fail_on(RequirementKind::Environment, environment)?;

    let mut directories = Vec::new();
    for dir in &requirements.directories {
        if !host.expand(dir)?.is_dir() {
            directories.push(dir.clone());
        }
    }
    fail_on(RequirementKind::Directories, directories)
}

fn fail_on(kind: RequirementKind, entries: Vec<String>) -> Result<()> {
    if entries.is_empty() {
        return Ok(());
    }
    log::debug!("requirement check failed ({:?}): {:?}", kind, entries);
    Err(PrunError::RequirementUnsatisfied { kind, entries })
}

/// Return the declared commands that cannot be found, in declaration order.
///
/// - absolute path: must be an executable file
/// - path with a separator: resolved against the current directory
/// - bare name: looked up in every search-path directory
pub fn missing_commands(commands: &[String], host: &dyn Host) -> Result<Vec<String>> {
    let mut missing = Vec::new();
    for command in commands {
        if !command_exists(command, host)? {
            missing.push(command.clone());
        }
    }
    Ok(missing)
}

fn command_exists(command: &str, host: &dyn Host) -> Result<bool> {
    let path = Path::new(command);
    if path.is_absolute() {
        return Ok(is_executable(path));
    }
    if command.contains('/') || command.contains(std::path::MAIN_SEPARATOR) {
        return Ok(is_executable(&host.current_dir()?.join(path)));
    }
    Ok(host
        .search_path()
        .iter()
        .any(|dir| is_executable(&dir.join(command))))
}

/// Whether `path` is a regular file the current user may execute.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// Whether `path` is a regular file the current user may execute.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

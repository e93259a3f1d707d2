//! Read-only view of the host process environment.

use crate::error::{PrunError, Result};
use crate::paths;
use std::env;
use std::path::PathBuf;

/// Capabilities the validator and builder need from the host.
///
/// Production code uses [`SystemHost`]; tests substitute a fixed environment.
pub trait Host {
    /// Value of an environment variable, if bound.
    fn lookup_env(&self, name: &str) -> Option<String>;

    /// Directories of the executable search path, in lookup order.
    fn search_path(&self) -> Vec<PathBuf>;

    /// Directory relative paths are resolved against.
    fn current_dir(&self) -> Result<PathBuf>;

    /// Directory `~` expands to.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Expand `path` to an absolute, lexically normalized path.
    fn expand(&self, path: &str) -> Result<PathBuf> {
        let cwd = self.current_dir()?;
        Ok(paths::expand(path, &cwd, self.home_dir().as_deref()))
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl Host for SystemHost {
    fn lookup_env(&self, name: &str) -> Option<String> {
        env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }

    fn search_path(&self) -> Vec<PathBuf> {
        env::var_os("PATH")
            .map(|p| env::split_paths(&p).collect())
            .unwrap_or_default()
    }

    fn current_dir(&self) -> Result<PathBuf> {
        env::current_dir().map_err(|e| {
            PrunError::Io(format!("failed to get current working directory: {}", e))
        })
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

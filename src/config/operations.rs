//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{PrunError, Result};
use crate::requirements::Host;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "PRUN_CONFIG";

/// Prompts directory under the home directory when none is configured.
const DEFAULT_PROMPTS_DIR: &str = "~/.prompts";

/// Location of the config file: `$PRUN_CONFIG`, else
/// `<config dir>/prun/config.yaml`.
pub fn default_config_path(host: &dyn Host) -> Option<PathBuf> {
    if let Some(path) = host.lookup_env(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("prun").join("config.yaml"))
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PrunError::Io)` - The file could not be read
    /// * `Err(PrunError::MalformedInput)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PrunError::Io(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            PrunError::MalformedInput(msg) => {
                PrunError::MalformedInput(format!("{} (in '{}')", msg, path.display()))
            }
            other => other,
        })
    }

    /// Load config from `path`, falling back to defaults when the file does
    /// not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PrunError::MalformedInput(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `command` must split into at least one word
    /// - `default_tools` entries must be non-empty
    pub fn validate(&self) -> Result<()> {
        self.program()?;

        if self.default_tools.iter().any(|t| t.trim().is_empty()) {
            return Err(PrunError::MalformedInput(
                "config validation failed: default_tools entries must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// The external tool's program and fixed arguments.
    pub fn program(&self) -> Result<Vec<String>> {
        let words = shell_words::split(&self.command).map_err(|e| {
            PrunError::MalformedInput(format!(
                "config validation failed: cannot parse command '{}': {}\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                self.command, e
            ))
        })?;

        if words.is_empty() {
            return Err(PrunError::MalformedInput(
                "config validation failed: command must not be empty".to_string(),
            ));
        }
        Ok(words)
    }

    /// Absolute prompts directory, with `~` expanded.
    pub fn prompts_dir(&self, host: &dyn Host) -> Result<PathBuf> {
        host.expand(self.prompts_dir.as_deref().unwrap_or(DEFAULT_PROMPTS_DIR))
    }
}

//! Run context resolution for prun.
//!
//! Every command starts from a [`PrunContext`]: the loaded config plus the
//! prompts directory, with command-line overrides applied. Commands resolve
//! prompt names through the context rather than reading config themselves.

use crate::config::{Config, default_config_path};
use crate::error::Result;
use crate::invocation::InvocationConfig;
use crate::prompt::PromptResolver;
use crate::requirements::Host;
use std::path::PathBuf;

/// Global options that override config values.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// `--prompts-dir`: replaces the configured prompts directory.
    pub prompts_dir: Option<String>,
    /// `--config`: an explicit config file, which must exist.
    pub config: Option<PathBuf>,
}

/// Resolved settings shared by all commands.
#[derive(Debug, Clone)]
pub struct PrunContext {
    pub config: Config,
    pub resolver: PromptResolver,
}

impl PrunContext {
    /// Load config and resolve the prompts directory.
    ///
    /// An explicit `--config` path must be readable; the default location
    /// falls back to built-in defaults when no file is present.
    pub fn resolve(options: &GlobalOptions, host: &dyn Host) -> Result<Self> {
        let config = match &options.config {
            Some(path) => Config::load(path)?,
            None => match default_config_path(host) {
                Some(path) => Config::load_or_default(path)?,
                None => Config::default(),
            },
        };

        let prompts_dir = match &options.prompts_dir {
            Some(dir) => host.expand(dir)?,
            None => config.prompts_dir(host)?,
        };
        log::debug!("prompts directory: {}", prompts_dir.display());

        Ok(Self {
            config,
            resolver: PromptResolver::new(prompts_dir),
        })
    }

    /// Invocation settings for one run.
    pub fn invocation_config(&self, verbose: bool) -> Result<InvocationConfig> {
        Ok(InvocationConfig {
            program: self.config.program()?,
            verbose,
            default_tools: self.config.default_tools.clone(),
        })
    }
}

//! Configuration model for prun.
//!
//! This module defines the Config struct that represents `config.yaml`
//! (`$PRUN_CONFIG`, or `<config dir>/prun/config.yaml`). It supports
//! forward-compatible YAML parsing (unknown fields are ignored), sensible
//! defaults for every field, and validation of config values.

mod model;
mod operations;


// Re-export public API
pub use model::Config;
pub use operations::default_config_path;

//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// Program used to run prompts when no `command` is configured.
pub const DEFAULT_COMMAND: &str = "claude";

/// Configuration for prun.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory searched for bare prompt names (default: `~/.prompts`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompts_dir: Option<String>,

    /// Command line of the external tool. Split with shell quoting rules,
    /// so fixed leading arguments are allowed (e.g. `npx claude`).
    #[serde(default = "default_command")]
    pub command: String,

    /// Tool grants used when a prompt declares commands but no tools.
    #[serde(default = "default_tools")]
    pub default_tools: Vec<String>,
}

fn default_command() -> String {
    DEFAULT_COMMAND.to_string()
}

/// The read-only tool set granted by default.
pub fn default_tools() -> Vec<String> {
    ["Read", "Grep", "Glob", "LS"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompts_dir: None,
            command: default_command(),
            default_tools: default_tools(),
        }
    }
}

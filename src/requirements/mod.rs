//! Declarative execution requirements for a prompt.
//!
//! A prompt may declare what it needs from the host before it is dispatched:
//!
//! ```yaml
//! requirements:
//!   commands: [git, ./scripts/check.sh]
//!   tools: [Read, Edit]
//!   environment: [GITHUB_TOKEN]
//!   directories: [~/src/project]
//! ```
//!
//! Commands, environment variables and directories are checked against the
//! host by [`validate_requirements`]. Commands and tools also feed the
//! allow-list passed to the external tool.

mod host;
mod validator;


use serde::{Deserialize, Serialize};

pub use host::{Host, SystemHost};
pub use validator::validate_requirements;

/// Requirements block from a prompt's frontmatter or structured document.
///
/// Lists keep declaration order and are never de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Requirements {
    /// Executables that must be present; each also becomes a scoped shell grant.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<String>,

    /// Tool grants passed verbatim. `None` means "not declared", which
    /// selects the default read-only tool set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,

    /// Environment variables that must be bound (empty values are fine).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub environment: Vec<String>,

    /// Directories that must exist; each is also granted to the tool.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directories: Vec<String>,
}

impl Requirements {
    /// Whether the prompt asks for any permission grants at all.
    pub fn declares_grants(&self) -> bool {
        !self.commands.is_empty() || self.tools.is_some()
    }
}

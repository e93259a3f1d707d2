//! Prompt documents: loading, parsing and interpolation.
//!
//! Two document shapes are supported and normalized into one [`ParsedPrompt`]:
//!
//! - **Structured** (`.prompt.yaml`, `.yaml`, `.yml`): a YAML document with
//!   top-level metadata and a `messages` list.
//! - **Text** (`.md`, `.txt`): free-form text with optional YAML frontmatter
//!   delimited by `---` lines.
//!
//! # Structured document
//!
//! ```yaml
//! name: review
//! description: Review a file
//! model: sonnet
//! requirements:
//!   commands: [git]
//! messages:
//!   - role: system
//!     content: You are a careful reviewer.
//!   - role: user
//!     content: Review {{file}}.
//! ```
//!
//! # Text document
//!
//! ```text
//! ---
//! description: Summarize a topic
//! ---
//! Summarize {{topic}} in three bullet points.
//! ```

mod document;
mod resolver;
pub mod template;

#[cfg(test)]
mod tests;

use crate::requirements::Requirements;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use template::Node;

pub use document::{DocumentFormat, RawDocument};
pub use resolver::{PromptEntry, PromptResolver};

/// Optional metadata shared by frontmatter and structured documents.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Frontmatter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub model: Option<String>,
    pub requirements: Option<Requirements>,
}

/// One entry of a structured document's `messages` list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Message {
    pub role: String,
    #[serde(default)]
    pub content: Node,
}

/// Renderable content of a prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Text documents: everything after the frontmatter.
    Flat(String),
    /// Structured documents: the `messages` list.
    Messages(Vec<Message>),
}

impl Body {
    /// Variable names referenced by the body.
    ///
    /// Message roles are not interpolated and never contribute names.
    pub fn required_variables(&self) -> BTreeSet<String> {
        match self {
            Body::Flat(text) => template::extract_names(text),
            Body::Messages(messages) => messages.iter().flat_map(|m| m.content.names()).collect(),
        }
    }

    /// Substitute bound variables, leaving unbound tokens in place.
    pub fn render(&self, variables: &HashMap<String, String>) -> Body {
        match self {
            Body::Flat(text) => Body::Flat(template::substitute(text, variables)),
            Body::Messages(messages) => Body::Messages(
                messages
                    .iter()
                    .map(|m| Message {
                        role: m.role.clone(),
                        content: m.content.substitute(variables),
                    })
                    .collect(),
            ),
        }
    }

    /// The prompt text handed to the external tool.
    ///
    /// Messages are flattened to their content, separated by a blank line.
    pub fn to_text(&self) -> String {
        match self {
            Body::Flat(text) => text.clone(),
            Body::Messages(messages) => messages
                .iter()
                .map(|m| m.content.to_text())
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }
}

/// A prompt normalized from either document shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPrompt {
    pub name: Option<String>,
    pub description: Option<String>,
    pub model: Option<String>,
    pub requirements: Option<Requirements>,
    pub body: Body,
    /// Problems recovered from while parsing (malformed frontmatter).
    pub warnings: Vec<String>,
}

impl ParsedPrompt {
    fn new(meta: Frontmatter, body: Body) -> Self {
        Self {
            name: meta.name,
            description: meta.description,
            model: meta.model,
            requirements: meta.requirements,
            body,
            warnings: Vec::new(),
        }
    }

    /// Variable names the body needs before it can be rendered.
    pub fn required_variables(&self) -> BTreeSet<String> {
        self.body.required_variables()
    }
}

//! Document loading and normalization into [`ParsedPrompt`].

use super::{Body, Frontmatter, Message, ParsedPrompt};
use crate::error::{PrunError, Result};
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Frontmatter delimiter line.
const DELIMITER: &str = "---";

/// Source shape of a prompt file, decided by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.prompt.yaml`, `.yaml`, `.yml`
    StructuredYaml,
    /// `.md`, `.txt`
    TextWithFrontmatter,
}

impl DocumentFormat {
    /// Detect the format from a file name (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if name.ends_with(".yaml") || name.ends_with(".yml") {
            Ok(DocumentFormat::StructuredYaml)
        } else if name.ends_with(".md") || name.ends_with(".txt") {
            Ok(DocumentFormat::TextWithFrontmatter)
        } else {
            Err(PrunError::UnsupportedFormat(format!(
                "'{}'\n\nPrompt files must end in .prompt.yaml, .yaml, .yml, .md or .txt",
                path.display()
            )))
        }
    }
}

/// The unparsed contents of a resolved prompt file.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub format: DocumentFormat,
    pub path: PathBuf,
    pub content: String,
}

/// On-disk shape of a structured prompt.
#[derive(Debug, Deserialize)]
struct StructuredDocument {
    #[serde(flatten)]
    meta: Frontmatter,
    #[serde(default)]
    messages: Vec<Message>,
}

impl RawDocument {
    /// Read a prompt file, detecting its format from the extension.
    ///
    /// The extension is checked before the file is opened.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                PrunError::NotFound(format!("prompt file '{}' does not exist", path.display()))
            }
            ErrorKind::InvalidData => PrunError::MalformedInput(format!(
                "prompt file '{}' is not valid UTF-8",
                path.display()
            )),
            _ => PrunError::Io(format!(
                "failed to read prompt file '{}': {}",
                path.display(),
                e
            )),
        })?;

        Ok(Self {
            format,
            path: path.to_path_buf(),
            content,
        })
    }

    /// Normalize the document into a [`ParsedPrompt`].
    ///
    /// Malformed frontmatter in a text document is not an error: it is
    /// recorded in [`ParsedPrompt::warnings`] and treated as empty. A
    /// structured document that does not parse is an error.
    pub fn parse(&self) -> Result<ParsedPrompt> {
        match self.format {
            DocumentFormat::StructuredYaml => self.parse_structured(),
            DocumentFormat::TextWithFrontmatter => Ok(self.parse_text()),
        }
    }

    fn parse_structured(&self) -> Result<ParsedPrompt> {
        let doc: StructuredDocument = serde_yaml::from_str(&self.content).map_err(|e| {
            PrunError::MalformedInput(format!(
                "failed to parse prompt '{}': {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(ParsedPrompt::new(doc.meta, Body::Messages(doc.messages)))
    }

    fn parse_text(&self) -> ParsedPrompt {
        let Some((block, body)) = split_frontmatter(&self.content) else {
            return ParsedPrompt::new(Frontmatter::default(), Body::Flat(self.content.clone()));
        };

        let mut warnings = Vec::new();
        let meta = match parse_frontmatter(block) {
            Ok(meta) => meta,
            Err(e) => {
                warnings.push(format!(
                    "ignoring malformed frontmatter in '{}': {}",
                    self.path.display(),
                    e
                ));
                Frontmatter::default()
            }
        };

        let mut prompt = ParsedPrompt::new(meta, Body::Flat(body.to_string()));
        prompt.warnings = warnings;
        prompt
    }
}

fn parse_frontmatter(block: &str) -> std::result::Result<Frontmatter, serde_yaml::Error> {
    if block.trim().is_empty() {
        return Ok(Frontmatter::default());
    }
    serde_yaml::from_str(block)
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\n', '\r']) == DELIMITER
}

/// Split a text document into its frontmatter block and body.
///
/// Returns `None` unless the first line is exactly `---` and a later line is
/// also exactly `---`. The body starts after the closing delimiter line and
/// is otherwise untouched. Both LF and CRLF line endings are accepted.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');
    let first = lines.next()?;
    if !is_delimiter(first) {
        return None;
    }

    let block_start = first.len();
    let mut offset = block_start;
    for line in lines {
        if is_delimiter(line) {
            return Some((&content[block_start..offset], &content[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

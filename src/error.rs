//! Error types for the prun CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::fmt;
use thiserror::Error;

/// Category of a failed requirement check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementKind {
    Commands,
    Environment,
    Directories,
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequirementKind::Commands => write!(f, "required commands not found"),
            RequirementKind::Environment => write!(f, "required environment variables not set"),
            RequirementKind::Directories => write!(f, "required directories do not exist"),
        }
    }
}

/// Main error type for prun operations.
///
/// Each variant maps to an exit code in [`exit_codes`].
#[derive(Error, Debug)]
pub enum PrunError {
    /// A prompt or input file could not be resolved.
    #[error("{0}")]
    NotFound(String),

    /// A prompt or variable file has an extension prun does not understand.
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// A prompt document or variable source could not be parsed.
    #[error("{0}")]
    MalformedInput(String),

    /// The prompt references variables that were not supplied.
    #[error("{}", format_missing(.missing))]
    MissingVariable {
        /// Missing variable names, sorted.
        missing: Vec<String>,
    },

    /// One category of declared requirements is not satisfied.
    #[error("{kind}: {}", .entries.join(", "))]
    RequirementUnsatisfied {
        kind: RequirementKind,
        /// Every failing entry of that category, in declaration order.
        entries: Vec<String>,
    },

    /// A file could not be read.
    #[error("{0}")]
    Io(String),

    /// The external tool could not be started.
    #[error("{0}")]
    ToolFailure(String),
}

fn format_missing(missing: &[String]) -> String {
    let mut msg = format!("missing required variables: {}\n\nProvide them as:", missing.join(", "));
    for name in missing {
        msg.push_str(&format!("\n  {}=<value>", name));
    }
    msg
}

impl PrunError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PrunError::NotFound(_)
            | PrunError::UnsupportedFormat(_)
            | PrunError::MalformedInput(_)
            | PrunError::MissingVariable { .. }
            | PrunError::Io(_) => exit_codes::USER_ERROR,
            PrunError::RequirementUnsatisfied { .. } => exit_codes::REQUIREMENT_FAILURE,
            PrunError::ToolFailure(_) => exit_codes::TOOL_FAILURE,
        }
    }
}

/// Result type alias for prun operations.
pub type Result<T> = std::result::Result<T, PrunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_have_user_exit_code() {
        let errs = [
            PrunError::NotFound("prompt 'x' not found".to_string()),
            PrunError::UnsupportedFormat("a.csv".to_string()),
            PrunError::MalformedInput("bad json".to_string()),
            PrunError::MissingVariable {
                missing: vec!["x".to_string()],
            },
            PrunError::Io("unreadable".to_string()),
        ];
        for err in errs {
            assert_eq!(err.exit_code(), exit_codes::USER_ERROR, "{:?}", err);
        }
    }

    #[test]
    fn requirement_error_has_requirement_exit_code() {
        let err = PrunError::RequirementUnsatisfied {
            kind: RequirementKind::Commands,
            entries: vec!["git".to_string()],
        };
        assert_eq!(err.exit_code(), exit_codes::REQUIREMENT_FAILURE);
    }

    #[test]
    fn tool_error_has_tool_exit_code() {
        let err = PrunError::ToolFailure("spawn failed".to_string());
        assert_eq!(err.exit_code(), exit_codes::TOOL_FAILURE);
    }

    #[test]
    fn missing_variable_message_shows_expected_input() {
        let err = PrunError::MissingVariable {
            missing: vec!["branch".to_string(), "topic".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "missing required variables: branch, topic\n\n\
             Provide them as:\n  branch=<value>\n  topic=<value>"
        );
    }

    #[test]
    fn requirement_message_names_all_entries() {
        let err = PrunError::RequirementUnsatisfied {
            kind: RequirementKind::Environment,
            entries: vec!["API_KEY".to_string(), "HOME_DIR".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "required environment variables not set: API_KEY, HOME_DIR"
        );
    }

    #[test]
    fn unsupported_format_message_is_prefixed() {
        let err = PrunError::UnsupportedFormat("vars.csv".to_string());
        assert_eq!(err.to_string(), "unsupported file format: vars.csv");
    }
}

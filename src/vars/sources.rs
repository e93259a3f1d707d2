//! Parsing of individual variable sources.

use super::{AssembledVariables, VariableMap, VariableSources};
use crate::error::{PrunError, Result};
use crate::prompt::template::scalar_text;
use crate::requirements::Host;
use regex::Regex;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::LazyLock;

static ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(\w+)=(.*)$").expect("assignment pattern is valid"));

/// Prefix marking a positional value as a file reference.
const FILE_MARKER: char = '@';

impl VariableSources {
    /// Merge every source into one map, later sources overriding earlier ones.
    pub fn assemble(&self, host: &dyn Host) -> Result<AssembledVariables> {
        let mut assembled = AssembledVariables::default();

        if let Some(file) = &self.file {
            let path = host.expand(&file.to_string_lossy())?;
            assembled.variables.extend(load_variable_file(&path)?);
        }

        if let Some(json) = &self.json {
            assembled.variables.extend(parse_json_variables(json)?);
        }

        for token in &self.assignments {
            match parse_assignment(token, host)? {
                Some((key, value)) => {
                    assembled.variables.insert(key, value);
                }
                None => assembled.warnings.push(format!(
                    "ignoring argument '{}': expected key=value",
                    token
                )),
            }
        }

        Ok(assembled)
    }
}

/// Load a flat mapping of variables from a JSON or YAML file.
pub fn load_variable_file(path: &Path) -> Result<VariableMap> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let is_json = name.ends_with(".json");
    if !is_json && !name.ends_with(".yaml") && !name.ends_with(".yml") {
        return Err(PrunError::UnsupportedFormat(format!(
            "'{}'\n\nVariable files must end in .json, .yaml or .yml",
            path.display()
        )));
    }

    let content = read_file(path, "variable file")?;
    if is_json {
        parse_json_variables(&content).map_err(|e| match e {
            PrunError::MalformedInput(msg) => {
                PrunError::MalformedInput(format!("{} (in '{}')", msg, path.display()))
            }
            other => other,
        })
    } else {
        parse_yaml_variables(&content, path)
    }
}

/// Parse an inline JSON object of variables.
///
/// Values may be strings, numbers or booleans; other values are rejected.
pub fn parse_json_variables(json: &str) -> Result<VariableMap> {
    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)
        .map_err(|e| PrunError::MalformedInput(format!("invalid JSON variables: {}", e)))?;

    object
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                other => return Err(non_scalar(&key, &other.to_string())),
            };
            Ok((key, value))
        })
        .collect()
}

fn parse_yaml_variables(content: &str, path: &Path) -> Result<VariableMap> {
    if content.trim().is_empty() {
        return Ok(VariableMap::new());
    }
    let mapping: serde_yaml::Mapping = serde_yaml::from_str(content).map_err(|e| {
        PrunError::MalformedInput(format!(
            "invalid YAML variables in '{}': {}",
            path.display(),
            e
        ))
    })?;

    mapping
        .into_iter()
        .map(|(key, value)| {
            let key = match key {
                serde_yaml::Value::String(s) => s,
                other => scalar_text(&other),
            };
            match value {
                serde_yaml::Value::String(_)
                | serde_yaml::Value::Number(_)
                | serde_yaml::Value::Bool(_) => Ok((key, scalar_text(&value))),
                other => Err(non_scalar(&key, &scalar_text(&other))),
            }
        })
        .collect()
}

fn non_scalar(key: &str, value: &str) -> PrunError {
    PrunError::MalformedInput(format!(
        "variable '{}' must be a string, number or boolean (got {})",
        key,
        if value.is_empty() { "null" } else { value }
    ))
}

/// Parse one positional `key=value` argument.
///
/// Returns `Ok(None)` when the token is not an assignment. A value of
/// `@path` is replaced by the contents of `path`, resolved against the
/// current directory.
pub fn parse_assignment(token: &str, host: &dyn Host) -> Result<Option<(String, String)>> {
    let Some(caps) = ASSIGNMENT.captures(token) else {
        return Ok(None);
    };
    let key = caps[1].to_string();
    let raw = &caps[2];

    let value = match raw.strip_prefix(FILE_MARKER) {
        Some(file) => {
            let path = host.expand(file)?;
            read_file(&path, &format!("file for variable '{}'", key))?
        }
        None => raw.to_string(),
    };
    Ok(Some((key, value)))
}

fn read_file(path: &Path, what: &str) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            PrunError::NotFound(format!("{} '{}' does not exist", what, path.display()))
        }
        _ => PrunError::Io(format!("failed to read {} '{}': {}", what, path.display(), e)),
    })
}

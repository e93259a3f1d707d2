//! Variable map assembly.
//!
//! Variables come from three sources, merged in this order (later wins):
//!
//! 1. `--file PATH`: a `.json`, `.yaml` or `.yml` file holding a flat mapping
//! 2. `--json STRING`: an inline JSON object
//! 3. positional `key=value` arguments, in command-line order
//!
//! A positional value starting with `@` names a file whose contents become
//! the value (`diff=@changes.patch`).

mod sources;


use std::collections::HashMap;
use std::path::PathBuf;

/// Variable name to value.
pub type VariableMap = HashMap<String, String>;

/// Raw variable inputs from the command line.
#[derive(Debug, Clone, Default)]
pub struct VariableSources {
    pub file: Option<PathBuf>,
    pub json: Option<String>,
    pub assignments: Vec<String>,
}

/// The merged variable map plus any tokens that were skipped.
#[derive(Debug, Clone, Default)]
pub struct AssembledVariables {
    pub variables: VariableMap,
    pub warnings: Vec<String>,
}

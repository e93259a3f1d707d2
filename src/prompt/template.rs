//! Variable interpolation for prompt content.
//!
//! Prompt bodies reference variables with `{{name}}` tokens, where `name`
//! is one or more word characters (letters, digits, underscore). There is no
//! nesting, no expressions and no escape syntax.
//!
//! Substitution is tolerant: a token whose name is not bound is left in the
//! output verbatim. Callers that need every token bound check
//! [`extract_names`] against the variable map before rendering.

use regex::{Captures, Regex};
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("token pattern is valid"));

/// Return the distinct variable names referenced by `text`.
pub fn extract_names(text: &str) -> BTreeSet<String> {
    TOKEN
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Replace every bound `{{name}}` token in `text` with its value.
///
/// Tokens whose name is absent from `variables` are kept as literal text.
pub fn substitute(text: &str, variables: &HashMap<String, String>) -> String {
    TOKEN
        .replace_all(text, |caps: &Captures| match variables.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// String-bearing content that interpolation walks recursively.
///
/// Only `Str` leaves are substituted. Mapping keys and scalar leaves
/// (numbers, booleans, null) pass through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Str(String),
    Seq(Vec<Node>),
    Map(Vec<(Value, Node)>),
    Opaque(Value),
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Node::Str(s),
            Value::Sequence(items) => Node::Seq(items.into_iter().map(Node::from).collect()),
            Value::Mapping(map) => {
                Node::Map(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
            Value::Tagged(tagged) => Node::from(tagged.value),
            other => Node::Opaque(other),
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::Str(String::new())
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Str(value.to_string())
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Node::from)
    }
}

impl Node {
    /// Variable names referenced anywhere inside this node.
    pub fn names(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names(&self, names: &mut BTreeSet<String>) {
        match self {
            Node::Str(s) => names.extend(extract_names(s)),
            Node::Seq(items) => items.iter().for_each(|item| item.collect_names(names)),
            Node::Map(entries) => entries.iter().for_each(|(_, v)| v.collect_names(names)),
            Node::Opaque(_) => {}
        }
    }

    /// Return a copy of this node with bound tokens substituted.
    pub fn substitute(&self, variables: &HashMap<String, String>) -> Node {
        match self {
            Node::Str(s) => Node::Str(substitute(s, variables)),
            Node::Seq(items) => Node::Seq(items.iter().map(|i| i.substitute(variables)).collect()),
            Node::Map(entries) => Node::Map(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.substitute(variables)))
                    .collect(),
            ),
            Node::Opaque(value) => Node::Opaque(value.clone()),
        }
    }

    /// Flatten the node into prompt text.
    ///
    /// Sequence items and mapping values are joined with newlines.
    pub fn to_text(&self) -> String {
        match self {
            Node::Str(s) => s.clone(),
            Node::Seq(items) => join_lines(items.iter()),
            Node::Map(entries) => join_lines(entries.iter().map(|(_, v)| v)),
            Node::Opaque(value) => scalar_text(value),
        }
    }
}

fn join_lines<'a>(nodes: impl Iterator<Item = &'a Node>) -> String {
    nodes
        .map(Node::to_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a YAML scalar the way it was written.
pub(crate) fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

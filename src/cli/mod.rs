//! CLI argument parsing for prun.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Prun: run reusable prompt templates through an AI CLI.
///
/// Prompts are files in a prompts directory (default `~/.prompts`):
/// - `.prompt.yaml` documents with a `messages` list
/// - `.md` / `.txt` files with optional YAML frontmatter
///
/// `{{name}}` tokens are filled from `key=value` arguments, `--json`, or `--file`.
#[derive(Parser, Debug)]
#[command(name = "prun")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(long, global = true)]
    pub debug: bool,

    /// Directory searched for bare prompt names.
    #[arg(long, global = true, value_name = "DIR")]
    pub prompts_dir: Option<String>,

    /// Config file to load instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for prun.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a prompt and hand it to the AI CLI.
    ///
    /// Validates variables and declared requirements first; nothing runs
    /// unless every check passes.
    Run(RunArgs),

    /// List prompts in the prompts directory.
    #[command(alias = "ls")]
    List,

    /// Show a prompt's metadata, requirements and variables.
    Show(ShowArgs),
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Prompt name (looked up in the prompts directory) or path.
    pub prompt: String,

    /// Variables as `key=value`; `key=@path` reads the value from a file.
    #[arg(value_name = "KEY=VALUE")]
    pub vars: Vec<String>,

    /// Load variables from a JSON or YAML file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Load variables from an inline JSON object.
    #[arg(long, value_name = "JSON")]
    pub json: Option<String>,

    /// Stream structured output from the AI CLI.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the command instead of running it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `show` command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Prompt name or path.
    pub prompt: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

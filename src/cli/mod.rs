//! CLI argument parsing for trunkcfg.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// trunkcfg: load, validate and query trunk.yaml configs.
///
/// With no subcommand, validates the given config (or the nearest
/// `.trunk/trunk.yaml`) and prints a summary.
#[derive(Parser, Debug)]
#[command(name = "trunkcfg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to trunk.yaml (default: nearest .trunk/trunk.yaml).
    pub path: Option<PathBuf>,

    /// Enable debug logging on stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The command to run, falling back to `check` on the positional path.
    pub fn into_command(self) -> Command {
        self.command
            .unwrap_or(Command::Check(CheckArgs { path: self.path }))
    }
}

/// Available commands for trunkcfg.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a config and print a summary.
    Check(CheckArgs),

    /// Print the normalized config.
    Show(ShowArgs),

    /// Report whether a file is ignored for a linter.
    Ignored(IgnoredArgs),

    /// Compare two config snapshots.
    Diff(DiffArgs),
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to trunk.yaml (default: nearest .trunk/trunk.yaml).
    pub path: Option<PathBuf>,
}

/// Output format for `show`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Arguments for the `show` command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Path to trunk.yaml (default: nearest .trunk/trunk.yaml).
    pub path: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

/// Arguments for the `ignored` command.
#[derive(Args, Debug)]
pub struct IgnoredArgs {
    /// Linter name (e.g. ruff).
    pub linter: String,

    /// Repo-relative file path.
    pub file: String,

    /// Path to trunk.yaml (default: nearest .trunk/trunk.yaml).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `diff` command.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Older snapshot.
    pub old: PathBuf,

    /// Newer snapshot.
    pub new: PathBuf,
}

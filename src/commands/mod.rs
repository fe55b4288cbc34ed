//! Command implementations for trunkcfg.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command loads configs through `Config::load`, so
//! parse and validation failures surface with their own exit codes.

mod check;
mod diff;
mod ignored;
mod show;

use crate::cli::Command;
use trunkcfg::config::Config;
use trunkcfg::context::resolve_config_path;
use trunkcfg::error::Result;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => check::cmd_check(args),
        Command::Show(args) => show::cmd_show(args),
        Command::Ignored(args) => ignored::cmd_ignored(args),
        Command::Diff(args) => diff::cmd_diff(args),
    }
}

/// Resolve the config path and load it.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = resolve_config_path(explicit)?;
    Config::load(path)
}

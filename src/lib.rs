//! trunkcfg: loader, validator and query layer for trunk.yaml configs.
//!
//! The library half of the `trunkcfg` CLI. `Config::load` parses a
//! trunk.yaml document into an immutable, validated `Config`;
//! `ignore::IgnoreMatcher` answers path/linter ignore queries and
//! `snapshot::diff` compares two configs.

pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod ignore;
pub mod logging;
pub mod snapshot;

pub use config::Config;
pub use error::{ConfigError, Result};

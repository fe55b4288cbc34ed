//! Configuration model for trunk.yaml.
//!
//! This module parses a trunk.yaml document into an immutable, validated
//! `Config`. Parsing goes through a permissive raw shape first so that
//! missing or malformed fields are reported with their field path.

mod document;
mod model;
mod operations;
mod query;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use types::{ALL_LINTERS, IgnoreRule, LinterSelector, PinError, PluginSource, ToolPin};

//! Typed accessors over a loaded Config.

use super::model::Config;
use super::types::{IgnoreRule, PluginSource, ToolPin};

impl Config {
    /// Schema version of the document, as written.
    pub fn schema_version(&self) -> &str {
        &self.version
    }

    /// Pinned trunk CLI version.
    pub fn cli_version(&self) -> &str {
        &self.cli.version
    }

    pub fn plugin_sources(&self) -> &[PluginSource] {
        &self.plugins.sources
    }

    /// Look up a plugin source by id.
    pub fn plugin(&self, id: &str) -> Option<&PluginSource> {
        self.plugins.sources.iter().find(|source| source.id == id)
    }

    pub fn runtimes(&self) -> &[ToolPin] {
        &self.runtimes.enabled
    }

    /// Version pinned for a runtime such as `python` or `node`.
    pub fn runtime(&self, name: &str) -> Option<&str> {
        self.runtimes
            .enabled
            .iter()
            .find(|pin| pin.name == name)
            .and_then(ToolPin::version)
    }

    pub fn enabled_linters(&self) -> &[ToolPin] {
        &self.lint.enabled
    }

    pub fn disabled_linters(&self) -> &[ToolPin] {
        &self.lint.disabled
    }

    /// The enabled entry for a linter, if any.
    pub fn linter(&self, name: &str) -> Option<&ToolPin> {
        self.lint.enabled.iter().find(|pin| pin.name == name)
    }

    pub fn is_linter_enabled(&self, name: &str) -> bool {
        self.linter(name).is_some()
    }

    pub fn is_linter_disabled(&self, name: &str) -> bool {
        self.lint.disabled.iter().any(|pin| pin.name == name)
    }

    pub fn ignore_rules(&self) -> &[IgnoreRule] {
        &self.lint.ignore
    }

    /// Ignore rules that apply to a linter, either by name or via `ALL`.
    pub fn ignore_rules_for<'a>(&'a self, linter: &'a str) -> impl Iterator<Item = &'a IgnoreRule> {
        self.lint
            .ignore
            .iter()
            .filter(move |rule| rule.applies_to(linter))
    }

    pub fn enabled_actions(&self) -> &[String] {
        &self.actions.enabled
    }

    pub fn disabled_actions(&self) -> &[String] {
        &self.actions.disabled
    }

    pub fn is_action_enabled(&self, id: &str) -> bool {
        self.actions.enabled.iter().any(|action| action == id)
    }

    pub fn is_action_disabled(&self, id: &str) -> bool {
        self.actions.disabled.iter().any(|action| action == id)
    }
}

//! Config struct definition.

use super::types::{IgnoreRule, PluginSource, ToolPin};
use serde::Serialize;

/// A validated trunk.yaml document.
///
/// Fields are crate-private: outside this crate a Config only comes from
/// `Config::load` / `Config::from_yaml`, which guarantee the required fields
/// are present and every pin is well-formed. Read it through the accessors.
/// Serializes back to the trunk.yaml shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Schema version of the document (e.g. "0.1").
    pub(crate) version: String,

    pub(crate) cli: CliSection,

    #[serde(skip_serializing_if = "PluginsSection::is_empty")]
    pub(crate) plugins: PluginsSection,

    #[serde(skip_serializing_if = "RuntimesSection::is_empty")]
    pub(crate) runtimes: RuntimesSection,

    #[serde(skip_serializing_if = "LintSection::is_empty")]
    pub(crate) lint: LintSection,

    #[serde(skip_serializing_if = "ActionsSection::is_empty")]
    pub(crate) actions: ActionsSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CliSection {
    /// Semantic version of the trunk CLI.
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PluginsSection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<PluginSource>,
}

impl PluginsSection {
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuntimesSection {
    /// Runtimes, always pinned.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enabled: Vec<ToolPin>,
}

impl RuntimesSection {
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LintSection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enabled: Vec<ToolPin>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disabled: Vec<ToolPin>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignore: Vec<IgnoreRule>,
}

impl LintSection {
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty() && self.disabled.is_empty() && self.ignore.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionsSection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disabled: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enabled: Vec<String>,
}

impl ActionsSection {
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty() && self.disabled.is_empty()
    }
}

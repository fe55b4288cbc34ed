//! Raw serde shape of a trunk.yaml document.
//!
//! Everything here is optional or defaulted so that a missing field becomes
//! a validation error with a field path rather than a generic parse error.
//! Unknown keys are ignored for forward compatibility.

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawDocument {
    /// Scalar rather than String: `version: 0.1` parses as a YAML float.
    pub version: Option<Value>,
    #[serde(deserialize_with = "nullable")]
    pub cli: RawCli,
    #[serde(deserialize_with = "nullable")]
    pub plugins: RawPlugins,
    #[serde(deserialize_with = "nullable")]
    pub runtimes: RawRuntimes,
    #[serde(deserialize_with = "nullable")]
    pub lint: RawLint,
    #[serde(deserialize_with = "nullable")]
    pub actions: RawActions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawCli {
    pub version: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawPlugins {
    #[serde(deserialize_with = "nullable")]
    pub sources: Vec<RawPluginSource>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawPluginSource {
    pub id: Option<Value>,
    #[serde(rename = "ref")]
    pub git_ref: Option<Value>,
    pub uri: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawRuntimes {
    #[serde(deserialize_with = "nullable")]
    pub enabled: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawLint {
    #[serde(deserialize_with = "nullable")]
    pub enabled: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub disabled: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub ignore: Vec<RawIgnoreRule>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawIgnoreRule {
    #[serde(deserialize_with = "nullable")]
    pub linters: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub paths: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawActions {
    #[serde(deserialize_with = "nullable")]
    pub enabled: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub disabled: Vec<String>,
}

/// Treat an explicit `null` (e.g. `lint:` with nothing under it) like an
/// absent key.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

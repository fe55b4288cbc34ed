//! Config loading, validation, and serialization.

use super::document::{RawDocument, RawIgnoreRule, RawPluginSource};
use super::model::{ActionsSection, CliSection, Config, LintSection, PluginsSection, RuntimesSection};
use super::types::{IgnoreRule, LinterSelector, PluginSource, ToolPin};
use crate::error::{ConfigError, Result};
use crate::ignore::build_glob;
use regex::Regex;
use serde_yaml::Value;
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

static SCHEMA_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)*$").expect("valid schema version regex"));

static VERSION_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^version:[ \t]*([0-9][0-9.]*)[ \t]*(?:#.*)?\r?$")
        .expect("valid version line regex")
});

static SEMVER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+(-[0-9A-Za-z.-]+)?(\+[0-9A-Za-z.-]+)?$")
        .expect("valid semver regex")
});

impl Config {
    /// Load config from a trunk.yaml file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ConfigError::Io)` - The file could not be read
    /// * `Err(ConfigError::Parse)` - Malformed YAML, with line/column
    /// * `Err(ConfigError::Validation)` - Missing or malformed field, with its path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading config");

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_yaml(&content)?;
        info!(
            path = %path.display(),
            cli_version = %config.cli.version,
            linters = config.lint.enabled.len(),
            runtimes = config.runtimes.enabled.len(),
            ignore_rules = config.lint.ignore.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Parse and validate config from a YAML string.
    ///
    /// Unknown keys are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let mut raw: RawDocument =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::from_yaml(&e))?;
        if let Some(Value::Number(_)) = raw.version
            && let Some(literal) = top_level_version_literal(yaml)
        {
            raw.version = Some(Value::String(literal));
        }
        let config = Self::from_raw(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize config back to the trunk.yaml shape.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Usage(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Serialize config to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Usage(format!("failed to serialize config to JSON: {}", e)))
    }

    /// Check cross-field rules that the per-field conversion cannot see.
    ///
    /// Validation rules:
    /// - a linter is enabled at most once
    /// - a linter is not both enabled and disabled
    /// - an action is not both enabled and disabled
    /// - plugin source ids are unique
    pub fn validate(&self) -> Result<()> {
        let mut enabled_names = HashSet::new();
        for (i, pin) in self.lint.enabled.iter().enumerate() {
            if !enabled_names.insert(pin.name.as_str()) {
                return Err(ConfigError::validation(
                    format!("lint.enabled[{i}]"),
                    format!("linter '{}' is enabled more than once", pin.name),
                ));
            }
        }

        for (i, pin) in self.lint.disabled.iter().enumerate() {
            if enabled_names.contains(pin.name.as_str()) {
                return Err(ConfigError::validation(
                    format!("lint.disabled[{i}]"),
                    format!("linter '{}' is both enabled and disabled", pin.name),
                ));
            }
        }

        let enabled_actions: HashSet<&str> =
            self.actions.enabled.iter().map(String::as_str).collect();
        for (i, action) in self.actions.disabled.iter().enumerate() {
            if enabled_actions.contains(action.as_str()) {
                return Err(ConfigError::validation(
                    format!("actions.disabled[{i}]"),
                    format!("action '{action}' is both enabled and disabled"),
                ));
            }
        }

        let mut plugin_ids = HashSet::new();
        for (i, source) in self.plugins.sources.iter().enumerate() {
            if !plugin_ids.insert(source.id.as_str()) {
                return Err(ConfigError::validation(
                    format!("plugins.sources[{i}].id"),
                    format!("duplicate plugin source id '{}'", source.id),
                ));
            }
        }

        Ok(())
    }

    fn from_raw(raw: RawDocument) -> Result<Self> {
        let version = required_scalar(raw.version, "version")?;
        if !SCHEMA_VERSION_RE.is_match(&version) {
            return Err(ConfigError::validation(
                "version",
                format!("'{version}' is not a schema version (expected digits like '0.1')"),
            ));
        }

        let cli_version = required_scalar(raw.cli.version, "cli.version")?;
        if !SEMVER_RE.is_match(&cli_version) {
            return Err(ConfigError::validation(
                "cli.version",
                format!("'{cli_version}' is not a semantic version (expected MAJOR.MINOR.PATCH)"),
            ));
        }

        let sources = raw
            .plugins
            .sources
            .into_iter()
            .enumerate()
            .map(|(i, source)| plugin_source(source, i))
            .collect::<Result<Vec<_>>>()?;

        let runtimes = raw
            .runtimes
            .enabled
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                ToolPin::parse_pinned(entry)
                    .map_err(|e| ConfigError::validation(format!("runtimes.enabled[{i}]"), e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        let enabled = pins(&raw.lint.enabled, "lint.enabled")?;
        let disabled = pins(&raw.lint.disabled, "lint.disabled")?;

        let ignore = raw
            .lint
            .ignore
            .into_iter()
            .enumerate()
            .map(|(i, rule)| ignore_rule(rule, i))
            .collect::<Result<Vec<_>>>()?;

        Ok(Config {
            version,
            cli: CliSection {
                version: cli_version,
            },
            plugins: PluginsSection { sources },
            runtimes: RuntimesSection { enabled: runtimes },
            lint: LintSection {
                enabled,
                disabled,
                ignore,
            },
            actions: ActionsSection {
                disabled: action_ids(raw.actions.disabled, "actions.disabled")?,
                enabled: action_ids(raw.actions.enabled, "actions.enabled")?,
            },
        })
    }
}

/// The source text of an unquoted top-level `version:` value.
///
/// YAML reads `version: 0.10` as the float 0.1; the text is what trunk
/// compares, so it is taken from the document instead.
fn top_level_version_literal(yaml: &str) -> Option<String> {
    VERSION_LINE_RE
        .captures(yaml)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Read a scalar that may be written as a YAML string or number.
fn scalar(value: Option<Value>, field: &str) -> Result<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.trim().to_string())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(ConfigError::validation(field, "must be a string")),
    }
}

fn required_scalar(value: Option<Value>, field: &str) -> Result<String> {
    match scalar(value, field)? {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ConfigError::validation(field, "is required")),
    }
}

fn pins(entries: &[String], field: &str) -> Result<Vec<ToolPin>> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            entry
                .parse::<ToolPin>()
                .map_err(|e| ConfigError::validation(format!("{field}[{i}]"), e.to_string()))
        })
        .collect()
}

fn plugin_source(raw: RawPluginSource, index: usize) -> Result<PluginSource> {
    let prefix = format!("plugins.sources[{index}]");
    let id = required_scalar(raw.id, &format!("{prefix}.id"))?;
    let git_ref = required_scalar(raw.git_ref, &format!("{prefix}.ref"))?;
    let uri = required_scalar(raw.uri, &format!("{prefix}.uri"))?;

    url::Url::parse(&uri).map_err(|e| {
        ConfigError::validation(format!("{prefix}.uri"), format!("'{uri}' is not a valid URI: {e}"))
    })?;

    Ok(PluginSource { id, git_ref, uri })
}

fn ignore_rule(raw: RawIgnoreRule, index: usize) -> Result<IgnoreRule> {
    let prefix = format!("lint.ignore[{index}]");

    if raw.linters.is_empty() {
        return Err(ConfigError::validation(
            format!("{prefix}.linters"),
            "must name at least one linter (or ALL)",
        ));
    }
    if raw.paths.is_empty() {
        return Err(ConfigError::validation(
            format!("{prefix}.paths"),
            "must list at least one path glob",
        ));
    }

    let mut linters = Vec::with_capacity(raw.linters.len());
    for (i, name) in raw.linters.iter().enumerate() {
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::validation(
                format!("{prefix}.linters[{i}]"),
                "linter name must be non-empty",
            ));
        }
        linters.push(LinterSelector::parse(name));
    }

    for (i, pattern) in raw.paths.iter().enumerate() {
        build_glob(pattern, &format!("{prefix}.paths[{i}]"))?;
    }
    debug!(rule = index, globs = raw.paths.len(), "validated ignore rule");

    Ok(IgnoreRule {
        linters,
        paths: raw.paths,
    })
}

fn action_ids(entries: Vec<String>, field: &str) -> Result<Vec<String>> {
    for (i, entry) in entries.iter().enumerate() {
        if entry.trim().is_empty() {
            return Err(ConfigError::validation(
                format!("{field}[{i}]"),
                "action id must be non-empty",
            ));
        }
    }
    Ok(entries)
}

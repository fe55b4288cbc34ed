//! Value types used by the Config struct.
//!
//! `ToolPin` and `LinterSelector` serialize back to the same plain strings
//! they are parsed from, so a Config re-serializes to the trunk.yaml shape.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sentinel selector that applies an ignore rule to every linter.
pub const ALL_LINTERS: &str = "ALL";

/// Why a `name@version` token could not be split.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinError {
    #[error("entry is empty")]
    Empty,
    #[error("'{0}' has an empty name before '@'")]
    EmptyName(String),
    #[error("'{0}' has an empty version after '@'")]
    EmptyVersion(String),
    #[error("'{0}' is missing a '@version' pin")]
    MissingVersion(String),
    #[error("'{0}' must not contain whitespace")]
    Whitespace(String),
}

/// A tool reference of the form `name` or `name@version`.
///
/// The split happens on the last `@`, so scoped names such as
/// `@scope/tool@1.0.0` keep their leading `@`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToolPin {
    pub name: String,
    pub version: Option<String>,
}

impl ToolPin {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: Some(version.into()),
        }
    }

    pub fn unpinned(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    /// Parse a token that must carry a version (runtimes).
    pub fn parse_pinned(raw: &str) -> Result<Self, PinError> {
        let pin: ToolPin = raw.parse()?;
        if pin.version.is_none() {
            return Err(PinError::MissingVersion(raw.to_string()));
        }
        Ok(pin)
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn is_pinned(&self) -> bool {
        self.version.is_some()
    }
}

impl FromStr for ToolPin {
    type Err = PinError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() {
            return Err(PinError::Empty);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(PinError::Whitespace(raw.to_string()));
        }

        match raw.rsplit_once('@') {
            None => Ok(Self::unpinned(raw)),
            Some(("", _)) => Err(PinError::EmptyName(raw.to_string())),
            Some((_, "")) => Err(PinError::EmptyVersion(raw.to_string())),
            Some((name, version)) => Ok(Self::new(name, version)),
        }
    }
}

impl fmt::Display for ToolPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}@{}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}

impl Serialize for ToolPin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Which linters an ignore rule applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LinterSelector {
    /// The `ALL` sentinel.
    All,
    /// A single linter by name.
    Named(String),
}

impl LinterSelector {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_LINTERS {
            Self::All
        } else {
            Self::Named(raw.to_string())
        }
    }

    /// Whether this selector covers the given linter.
    pub fn matches(&self, linter: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == linter,
        }
    }
}

impl fmt::Display for LinterSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_LINTERS),
            Self::Named(name) => f.write_str(name),
        }
    }
}

impl Serialize for LinterSelector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A remote repository of linter definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginSource {
    pub id: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub uri: String,
}

/// Paths excluded from some or all linters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IgnoreRule {
    pub linters: Vec<LinterSelector>,
    pub paths: Vec<String>,
}

impl IgnoreRule {
    /// Whether the rule carries the `ALL` sentinel.
    pub fn applies_to_all(&self) -> bool {
        self.linters.contains(&LinterSelector::All)
    }

    /// Whether the rule applies to the given linter (ignoring paths).
    pub fn applies_to(&self, linter: &str) -> bool {
        self.linters.iter().any(|selector| selector.matches(linter))
    }
}

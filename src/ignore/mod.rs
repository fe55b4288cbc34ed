//! Ignore-rule matching for trunk configs.
//!
//! Compiles every `lint.ignore` rule into a GlobSet once, then answers
//! whether a repo-relative path is ignored for a given linter:
//! - A rule applies when its linters include the linter or `ALL`
//! - A path matches when any glob of the rule matches it
//! - A glob-free entry such as `vendor` or `docs/` also covers everything below it
//!
//! Queried paths are normalized to forward slashes; patterns are not.

use crate::config::{Config, IgnoreRule};
use crate::error::{ConfigError, Result};
use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use tracing::debug;

/// One compiled ignore rule.
#[derive(Debug, Clone)]
struct CompiledRule {
    rule: IgnoreRule,
    globs: GlobSet,
    /// Literal entries, normalized with a trailing slash.
    directories: Vec<String>,
}

impl CompiledRule {
    fn matches_path(&self, path: &str) -> bool {
        self.globs.is_match(path) || self.directories.iter().any(|dir| path.starts_with(dir))
    }
}

/// Compiled form of a config's ignore rules.
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    rules: Vec<CompiledRule>,
}

impl IgnoreMatcher {
    /// Compile the ignore rules of a loaded config.
    ///
    /// # Returns
    ///
    /// * `Ok(IgnoreMatcher)` - All globs compiled
    /// * `Err(ConfigError::Validation)` - A glob failed to compile, naming its field path
    pub fn new(config: &Config) -> Result<Self> {
        Self::from_rules(config.ignore_rules())
    }

    pub fn from_rules(rules: &[IgnoreRule]) -> Result<Self> {
        let rules = rules
            .iter()
            .enumerate()
            .map(|(i, rule)| compile_rule(rule, i))
            .collect::<Result<Vec<_>>>()?;
        debug!(rules = rules.len(), "compiled ignore rules");
        Ok(Self { rules })
    }

    /// Whether `path` is excluded from `linter`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trunkcfg::config::Config;
    /// use trunkcfg::ignore::IgnoreMatcher;
    ///
    /// let config = Config::from_yaml(
    ///     "version: 0.1\ncli:\n  version: 1.22.2\nlint:\n  ignore:\n    - linters: [ALL]\n      paths: ['.github/**']\n",
    /// )
    /// .unwrap();
    /// let matcher = IgnoreMatcher::new(&config).unwrap();
    /// assert!(matcher.is_ignored("ruff", ".github/workflows/ci.yaml"));
    /// assert!(!matcher.is_ignored("ruff", "src/main.py"));
    /// ```
    pub fn is_ignored(&self, linter: &str, path: &str) -> bool {
        let path = normalize_path(path);
        self.rules
            .iter()
            .any(|compiled| compiled.rule.applies_to(linter) && compiled.matches_path(&path))
    }

    /// Indices (into `lint.ignore`) of the rules that exclude `path` from `linter`.
    pub fn matching_rules(&self, linter: &str, path: &str) -> Vec<usize> {
        let path = normalize_path(path);
        self.rules
            .iter()
            .enumerate()
            .filter(|(_, compiled)| compiled.rule.applies_to(linter) && compiled.matches_path(&path))
            .map(|(i, _)| i)
            .collect()
    }

    /// The rule at `index`, as written in the config.
    pub fn rule(&self, index: usize) -> Option<&IgnoreRule> {
        self.rules.get(index).map(|compiled| &compiled.rule)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn compile_rule(rule: &IgnoreRule, index: usize) -> Result<CompiledRule> {
    let mut builder = GlobSetBuilder::new();
    let mut directories = Vec::new();

    for (i, pattern) in rule.paths.iter().enumerate() {
        builder.add(build_glob(pattern, &format!("lint.ignore[{index}].paths[{i}]"))?);
        if let Some(dir) = literal_directory(pattern) {
            directories.push(dir);
        }
    }

    let globs = builder.build().map_err(|e| {
        ConfigError::validation(
            format!("lint.ignore[{index}].paths"),
            format!("failed to compile globs: {e}"),
        )
    })?;

    Ok(CompiledRule {
        rule: rule.clone(),
        globs,
        directories,
    })
}

/// Compile one ignore path entry.
///
/// Shared by config validation and matching so that a pattern accepted at
/// load time compiles to the same glob here. Backslashes are glob escapes
/// (`foo\*` is a literal star), never path separators.
pub(crate) fn build_glob(pattern: &str, field: &str) -> Result<Glob> {
    let body = pattern_body(pattern);
    if body.trim().is_empty() {
        return Err(ConfigError::validation(
            field,
            format!("'{pattern}' does not name a path"),
        ));
    }

    GlobBuilder::new(body)
        .literal_separator(true)
        .backslash_escape(true)
        .build()
        .map_err(|e| ConfigError::validation(field, format!("invalid glob '{pattern}': {e}")))
}

/// `vendor` or `docs/` as a `dir/` prefix; `None` for real globs.
fn literal_directory(pattern: &str) -> Option<String> {
    let body = pattern_body(pattern);
    if body.contains(['*', '?', '[', '{', '\\']) {
        return None;
    }
    Some(format!("{}/", body))
}

/// Pattern without a leading `./` or trailing `/`.
fn pattern_body(pattern: &str) -> &str {
    pattern
        .strip_prefix("./")
        .unwrap_or(pattern)
        .trim_end_matches('/')
}

/// Normalize a queried path to forward slashes without a leading `./`.
fn normalize_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    match path.strip_prefix("./") {
        Some(stripped) => stripped.to_string(),
        None => path,
    }
}

//! Tests for config functionality.

use crate::config::{Config, LinterSelector, ToolPin};
use crate::error::ConfigError;

const FULL_YAML: &str = r#"
version: 0.1
cli:
  version: 1.22.2
plugins:
  sources:
    - id: trunk
      ref: v1.5.0
      uri: https://github.com/trunk-io/plugins
runtimes:
  enabled:
    - node@18.12.1
    - python@3.10.8
lint:
  enabled:
    - bandit@1.7.8
    - checkov@3.2.95
    - git-diff-check
    - mypy@1.10.0
    - ruff@0.4.4
  disabled:
    - black
  ignore:
    - linters: [ALL]
      paths:
        - .github/**
    - linters: [bandit]
      paths:
        - tests/**
actions:
  disabled:
    - trunk-announce
    - trunk-check-pre-push
  enabled:
    - trunk-upgrade-available
"#;

fn expect_validation(yaml: &str, field: &str) -> ConfigError {
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.is_validation(), "expected validation error, got {err:?}");
    assert_eq!(err.field(), Some(field), "unexpected field for {err}");
    err
}

#[test]
fn test_parse_full_yaml() {
    let config = Config::from_yaml(FULL_YAML).unwrap();

    assert_eq!(config.version, "0.1");
    assert_eq!(config.cli_version(), "1.22.2");

    let trunk = config.plugin("trunk").unwrap();
    assert_eq!(trunk.git_ref, "v1.5.0");
    assert_eq!(trunk.uri, "https://github.com/trunk-io/plugins");

    assert_eq!(config.runtimes().len(), 2);
    assert_eq!(config.runtime("python"), Some("3.10.8"));
    assert_eq!(config.runtime("go"), None);

    assert_eq!(config.enabled_linters().len(), 5);
    assert_eq!(config.linter("git-diff-check"), Some(&ToolPin::unpinned("git-diff-check")));
    assert!(config.is_linter_disabled("black"));
    assert!(!config.is_linter_enabled("black"));

    assert_eq!(config.ignore_rules().len(), 2);
    assert_eq!(config.disabled_actions(), ["trunk-announce", "trunk-check-pre-push"]);
    assert!(config.is_action_enabled("trunk-upgrade-available"));
    assert!(config.is_action_disabled("trunk-announce"));
}

#[test]
fn test_enabled_linter_order_is_preserved() {
    let config = Config::from_yaml(FULL_YAML).unwrap();
    let names: Vec<&str> = config
        .enabled_linters()
        .iter()
        .map(|pin| pin.name.as_str())
        .collect();
    assert_eq!(names, vec!["bandit", "checkov", "git-diff-check", "mypy", "ruff"]);
}

#[test]
fn test_ruff_pin_is_split() {
    let yaml = r#"
version: 0.1
cli:
  version: 1.22.2
lint:
  enabled: [ruff@0.4.4]
"#;
    let config = Config::from_yaml(yaml).unwrap();
    let ruff = config.linter("ruff").unwrap();
    assert_eq!(ruff.name, "ruff");
    assert_eq!(ruff.version(), Some("0.4.4"));
}

#[test]
fn test_all_sentinel_ignore_rule() {
    let yaml = r#"
version: 0.1
cli:
  version: 1.22.2
lint:
  ignore:
    - linters: [ALL]
      paths: [".github/**"]
"#;
    let config = Config::from_yaml(yaml).unwrap();
    let rule = &config.ignore_rules()[0];

    assert_eq!(rule.linters, vec![LinterSelector::All]);
    assert!(rule.applies_to_all());
    assert!(rule.applies_to("ruff"));
    assert!(rule.applies_to("anything-else"));
    assert_eq!(rule.paths, vec![".github/**"]);
}

#[test]
fn test_ignore_rules_for_linter() {
    let config = Config::from_yaml(FULL_YAML).unwrap();
    assert_eq!(config.ignore_rules_for("bandit").count(), 2);
    assert_eq!(config.ignore_rules_for("ruff").count(), 1);
}

#[test]
fn test_round_trip() {
    let config = Config::from_yaml(FULL_YAML).unwrap();
    let yaml = config.to_yaml().unwrap();
    let reparsed = Config::from_yaml(&yaml).unwrap();
    assert_eq!(reparsed, config);
}

#[test]
fn test_round_trip_minimal() {
    let config = Config::from_yaml("version: 0.1\ncli:\n  version: 1.0.0\n").unwrap();
    let yaml = config.to_yaml().unwrap();
    assert!(!yaml.contains("lint"));
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

fn assert_round_trip(yaml: &str) -> Config {
    let config = Config::from_yaml(yaml).unwrap();
    let reparsed = Config::from_yaml(&config.to_yaml().unwrap()).unwrap();
    assert_eq!(reparsed, config);
    config
}

#[test]
fn test_round_trip_unpinned_and_scoped_pins() {
    let config = assert_round_trip(
        "version: 0.1\ncli:\n  version: 1.0.0\nlint:\n  enabled: [git-diff-check, '@scope/tool@1.0']\n  disabled: [black]\n",
    );
    assert_eq!(config.linter("@scope/tool").unwrap().version(), Some("1.0"));
    assert_eq!(config.linter("git-diff-check").unwrap().version(), None);
}

#[test]
fn test_round_trip_numeric_plugin_fields() {
    let config = assert_round_trip(
        "version: 0.1\ncli:\n  version: 1.0.0\nplugins:\n  sources:\n    - id: 42\n      ref: 1.5\n      uri: https://github.com/trunk-io/plugins\n",
    );
    assert_eq!(config.plugin("42").unwrap().git_ref, "1.5");
}

#[test]
fn test_round_trip_padded_selectors() {
    let config = assert_round_trip(
        "version: 0.1\ncli:\n  version: 1.0.0\nlint:\n  ignore:\n    - linters: [' ruff ', ' ALL']\n      paths: [build]\n",
    );
    assert_eq!(
        config.ignore_rules()[0].linters,
        vec![LinterSelector::Named("ruff".to_string()), LinterSelector::All]
    );
}

#[test]
fn test_round_trip_keeps_schema_version_text() {
    let config = assert_round_trip("version: 0.10\ncli:\n  version: 1.0.0\n");
    assert_eq!(config.schema_version(), "0.10");
}

#[test]
fn test_json_output_uses_document_keys() {
    let config = Config::from_yaml(FULL_YAML).unwrap();
    let json: serde_json::Value = serde_json::from_str(&config.to_json().unwrap()).unwrap();
    assert_eq!(json["cli"]["version"], "1.22.2");
    assert_eq!(json["plugins"]["sources"][0]["ref"], "v1.5.0");
    assert_eq!(json["lint"]["enabled"][4], "ruff@0.4.4");
    assert_eq!(json["lint"]["ignore"][0]["linters"][0], "ALL");
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
version: 0.1
cli:
  version: 1.22.2
  options:
    - commands: [check]
merge:
  required_statuses: [ci]
lint:
  enabled: [ruff@0.4.4]
  definitions: []
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert!(config.is_linter_enabled("ruff"));
}

#[test]
fn test_null_sections_are_empty() {
    let yaml = r#"
version: 0.1
cli:
  version: 1.22.2
lint:
actions:
  enabled:
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert!(config.lint.is_empty());
    assert!(config.enabled_actions().is_empty());
}

#[test]
fn test_missing_version() {
    let err = expect_validation("cli:\n  version: 1.22.2\n", "version");
    assert!(err.to_string().contains("is required"));
}

#[test]
fn test_empty_document_is_missing_version() {
    expect_validation("", "version");
}

#[test]
fn test_missing_cli_version() {
    expect_validation("version: 0.1\n", "cli.version");
    expect_validation("version: 0.1\ncli: {}\n", "cli.version");
}

#[test]
fn test_malformed_schema_version() {
    let err = expect_validation("version: beta\ncli:\n  version: 1.0.0\n", "version");
    assert!(err.to_string().contains("schema version"));
}

#[test]
fn test_malformed_cli_version() {
    let err = expect_validation("version: 0.1\ncli:\n  version: latest\n", "cli.version");
    assert!(err.to_string().contains("semantic version"));
}

#[test]
fn test_cli_prerelease_version_is_accepted() {
    let config = Config::from_yaml("version: 0.1\ncli:\n  version: 1.23.0-beta.4\n").unwrap();
    assert_eq!(config.cli_version(), "1.23.0-beta.4");
}

#[test]
fn test_pin_with_empty_version() {
    let yaml = "version: 0.1\ncli:\n  version: 1.0.0\nlint:\n  enabled: [ruff@0.4.4, 'mypy@']\n";
    let err = expect_validation(yaml, "lint.enabled[1]");
    assert!(err.to_string().contains("empty version"));
}

#[test]
fn test_pin_with_empty_name() {
    let yaml = "version: 0.1\ncli:\n  version: 1.0.0\nlint:\n  enabled: ['@0.4.4']\n";
    expect_validation(yaml, "lint.enabled[0]");
}

#[test]
fn test_runtime_requires_version() {
    let yaml = "version: 0.1\ncli:\n  version: 1.0.0\nruntimes:\n  enabled: [node@18.12.1, python]\n";
    let err = expect_validation(yaml, "runtimes.enabled[1]");
    assert!(err.to_string().contains("missing"));
}

#[test]
fn test_duplicate_enabled_linter() {
    let yaml = "version: 0.1\ncli:\n  version: 1.0.0\nlint:\n  enabled: [ruff@0.4.4, ruff@0.4.5]\n";
    expect_validation(yaml, "lint.enabled[1]");
}

#[test]
fn test_linter_enabled_and_disabled() {
    let yaml = "version: 0.1\ncli:\n  version: 1.0.0\nlint:\n  enabled: [ruff@0.4.4]\n  disabled: [ruff]\n";
    let err = expect_validation(yaml, "lint.disabled[0]");
    assert!(err.to_string().contains("both enabled and disabled"));
}

#[test]
fn test_action_enabled_and_disabled() {
    let yaml = "version: 0.1\ncli:\n  version: 1.0.0\nactions:\n  enabled: [trunk-announce]\n  disabled: [trunk-announce]\n";
    expect_validation(yaml, "actions.disabled[0]");
}

#[test]
fn test_plugin_source_requires_all_fields() {
    let yaml = r#"
version: 0.1
cli:
  version: 1.0.0
plugins:
  sources:
    - id: trunk
      uri: https://github.com/trunk-io/plugins
"#;
    expect_validation(yaml, "plugins.sources[0].ref");
}

#[test]
fn test_plugin_source_uri_must_be_absolute() {
    let yaml = r#"
version: 0.1
cli:
  version: 1.0.0
plugins:
  sources:
    - id: trunk
      ref: v1.5.0
      uri: not a uri
"#;
    let err = expect_validation(yaml, "plugins.sources[0].uri");
    assert!(err.to_string().contains("not a valid URI"));
}

#[test]
fn test_duplicate_plugin_ids() {
    let yaml = r#"
version: 0.1
cli:
  version: 1.0.0
plugins:
  sources:
    - id: trunk
      ref: v1.5.0
      uri: https://github.com/trunk-io/plugins
    - id: trunk
      ref: v1.6.0
      uri: https://github.com/trunk-io/plugins
"#;
    expect_validation(yaml, "plugins.sources[1].id");
}

#[test]
fn test_ignore_rule_requires_paths() {
    let yaml = "version: 0.1\ncli:\n  version: 1.0.0\nlint:\n  ignore:\n    - linters: [ALL]\n";
    expect_validation(yaml, "lint.ignore[0].paths");
}

#[test]
fn test_ignore_rule_rejects_bad_glob() {
    let yaml = "version: 0.1\ncli:\n  version: 1.0.0\nlint:\n  ignore:\n    - linters: [ALL]\n      paths: ['src/[abc']\n";
    let err = expect_validation(yaml, "lint.ignore[0].paths[0]");
    assert!(err.to_string().contains("invalid glob"));
}

#[test]
fn test_ignore_rule_rejects_empty_path() {
    for path in ["''", "'   '", "'/'", "'./'"] {
        let yaml = format!(
            "version: 0.1\ncli:\n  version: 1.0.0\nlint:\n  ignore:\n    - linters: [ALL]\n      paths: ['.github/**', {path}]\n"
        );
        let err = expect_validation(&yaml, "lint.ignore[0].paths[1]");
        assert!(err.to_string().contains("does not name a path"), "{err}");
    }
}

#[test]
fn test_escaped_glob_that_loads_also_compiles_for_matching() {
    let yaml = "version: 0.1\ncli:\n  version: 1.0.0\nlint:\n  ignore:\n    - linters: [ALL]\n      paths: ['foo\\[bar']\n";
    let config = Config::from_yaml(yaml).unwrap();
    assert!(crate::ignore::IgnoreMatcher::new(&config).is_ok());
}

#[test]
fn test_schema_version_text_is_kept() {
    let config = Config::from_yaml("version: 0.10\ncli:\n  version: 1.0.0\n").unwrap();
    assert_eq!(config.schema_version(), "0.10");

    let config = Config::from_yaml("version: 2 # schema\ncli:\n  version: 1.0.0\n").unwrap();
    assert_eq!(config.schema_version(), "2");

    let config = Config::from_yaml("version: '0.1'\ncli:\n  version: 1.0.0\n").unwrap();
    assert_eq!(config.schema_version(), "0.1");
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let yaml = "version: 0.1\ncli:\n  version: [1.0.0\nlint: {}\n";
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.is_parse(), "expected parse error, got {err:?}");
    match err {
        ConfigError::Parse { line, .. } => assert!(line.is_some()),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_wrong_shape_is_parse_error() {
    let yaml = "version: 0.1\ncli:\n  version: 1.0.0\nlint:\n  enabled: ruff@0.4.4\n";
    assert!(Config::from_yaml(yaml).unwrap_err().is_parse());
}

#[test]
fn test_config_load_from_file() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", FULL_YAML).unwrap();

    let config = Config::load(file.path()).unwrap();
    assert!(config.is_linter_enabled("ruff"));
}

#[test]
fn test_config_load_missing_file() {
    let err = Config::load("/nonexistent/path/trunk.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("failed to read config file"));
}

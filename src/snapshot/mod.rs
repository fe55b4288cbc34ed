//! Comparison of two trunk config snapshots.
//!
//! Reports what changed between an older and a newer config: CLI upgrades,
//! plugin ref bumps, runtimes and linters (enabled or disabled) added,
//! removed or re-pinned, ignore rules added or removed, and action list
//! changes. Changes are ordered by section, then by the order
//! entries appear in the newer (or, for removals, the older) config.

use crate::config::{Config, IgnoreRule, ToolPin};
use std::fmt;

/// Which pinned list a tool change belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Runtime,
    Linter,
    DisabledLinter,
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolKind::Runtime => write!(f, "runtime"),
            ToolKind::Linter => write!(f, "linter"),
            ToolKind::DisabledLinter => write!(f, "disabled linter"),
        }
    }
}

/// Which action list an action id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionList {
    Enabled,
    Disabled,
}

impl fmt::Display for ActionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionList::Enabled => write!(f, "enabled"),
            ActionList::Disabled => write!(f, "disabled"),
        }
    }
}

/// A single difference between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    SchemaVersion { from: String, to: String },
    CliVersion { from: String, to: String },
    PluginAdded { id: String, git_ref: String },
    PluginRemoved { id: String },
    PluginRef { id: String, from: String, to: String },
    PluginUri { id: String, from: String, to: String },
    ToolAdded { kind: ToolKind, pin: ToolPin },
    ToolRemoved { kind: ToolKind, pin: ToolPin },
    ToolRepinned {
        kind: ToolKind,
        name: String,
        from: Option<String>,
        to: Option<String>,
    },
    IgnoreAdded { rule: IgnoreRule },
    IgnoreRemoved { rule: IgnoreRule },
    ActionEnabled { id: String },
    ActionDisabled { id: String },
    /// The id no longer appears in the given list of the newer config.
    ActionUnlisted { id: String, list: ActionList },
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::SchemaVersion { from, to } => write!(f, "~ version {} -> {}", from, to),
            Change::CliVersion { from, to } => write!(f, "~ cli {} -> {}", from, to),
            Change::PluginAdded { id, git_ref } => write!(f, "+ plugin {} ({})", id, git_ref),
            Change::PluginRemoved { id } => write!(f, "- plugin {}", id),
            Change::PluginRef { id, from, to } => write!(f, "~ plugin {} {} -> {}", id, from, to),
            Change::PluginUri { id, from, to } => {
                write!(f, "~ plugin {} uri {} -> {}", id, from, to)
            }
            Change::ToolAdded { kind, pin } => write!(f, "+ {} {}", kind, pin),
            Change::ToolRemoved { kind, pin } => write!(f, "- {} {}", kind, pin),
            Change::ToolRepinned {
                kind,
                name,
                from,
                to,
            } => write!(
                f,
                "~ {} {} {} -> {}",
                kind,
                name,
                from.as_deref().unwrap_or("(unpinned)"),
                to.as_deref().unwrap_or("(unpinned)")
            ),
            Change::IgnoreAdded { rule } => write!(f, "+ ignore {}", describe_rule(rule)),
            Change::IgnoreRemoved { rule } => write!(f, "- ignore {}", describe_rule(rule)),
            Change::ActionEnabled { id } => write!(f, "+ action {} enabled", id),
            Change::ActionDisabled { id } => write!(f, "- action {} disabled", id),
            Change::ActionUnlisted { id, list } => {
                write!(f, "~ action {} no longer {}", id, list)
            }
        }
    }
}

fn describe_rule(rule: &IgnoreRule) -> String {
    let linters: Vec<String> = rule.linters.iter().map(ToString::to_string).collect();
    format!("[{}] {}", linters.join(", "), rule.paths.join(", "))
}

/// Compute the ordered list of changes from `old` to `new`.
///
/// Returns an empty list when the two configs hold the same entries; the
/// order of entries within a list is not compared.
pub fn diff(old: &Config, new: &Config) -> Vec<Change> {
    let mut changes = Vec::new();

    if old.version != new.version {
        changes.push(Change::SchemaVersion {
            from: old.version.clone(),
            to: new.version.clone(),
        });
    }

    if old.cli.version != new.cli.version {
        changes.push(Change::CliVersion {
            from: old.cli.version.clone(),
            to: new.cli.version.clone(),
        });
    }

    for source in new.plugin_sources() {
        match old.plugin(&source.id) {
            None => changes.push(Change::PluginAdded {
                id: source.id.clone(),
                git_ref: source.git_ref.clone(),
            }),
            Some(previous) if previous.git_ref != source.git_ref => {
                changes.push(Change::PluginRef {
                    id: source.id.clone(),
                    from: previous.git_ref.clone(),
                    to: source.git_ref.clone(),
                })
            }
            Some(_) => {}
        }
        if let Some(previous) = old.plugin(&source.id)
            && previous.uri != source.uri
        {
            changes.push(Change::PluginUri {
                id: source.id.clone(),
                from: previous.uri.clone(),
                to: source.uri.clone(),
            });
        }
    }
    for source in old.plugin_sources() {
        if new.plugin(&source.id).is_none() {
            changes.push(Change::PluginRemoved {
                id: source.id.clone(),
            });
        }
    }

    diff_tools(ToolKind::Runtime, old.runtimes(), new.runtimes(), &mut changes);
    diff_tools(
        ToolKind::Linter,
        old.enabled_linters(),
        new.enabled_linters(),
        &mut changes,
    );
    diff_tools(
        ToolKind::DisabledLinter,
        old.disabled_linters(),
        new.disabled_linters(),
        &mut changes,
    );

    for rule in new.ignore_rules() {
        if !old.ignore_rules().contains(rule) {
            changes.push(Change::IgnoreAdded { rule: rule.clone() });
        }
    }
    for rule in old.ignore_rules() {
        if !new.ignore_rules().contains(rule) {
            changes.push(Change::IgnoreRemoved { rule: rule.clone() });
        }
    }

    for action in new.enabled_actions() {
        if !old.is_action_enabled(action) {
            changes.push(Change::ActionEnabled { id: action.clone() });
        }
    }
    for action in new.disabled_actions() {
        if !old.is_action_disabled(action) {
            changes.push(Change::ActionDisabled { id: action.clone() });
        }
    }
    for action in old.enabled_actions() {
        if !new.is_action_enabled(action) {
            changes.push(Change::ActionUnlisted {
                id: action.clone(),
                list: ActionList::Enabled,
            });
        }
    }
    for action in old.disabled_actions() {
        if !new.is_action_disabled(action) {
            changes.push(Change::ActionUnlisted {
                id: action.clone(),
                list: ActionList::Disabled,
            });
        }
    }

    changes
}

fn diff_tools(kind: ToolKind, old: &[ToolPin], new: &[ToolPin], changes: &mut Vec<Change>) {
    let find = |pins: &[ToolPin], name: &str| pins.iter().find(|pin| pin.name == name).cloned();

    for pin in new {
        match find(old, &pin.name) {
            None => changes.push(Change::ToolAdded {
                kind,
                pin: pin.clone(),
            }),
            Some(previous) if previous.version != pin.version => {
                changes.push(Change::ToolRepinned {
                    kind,
                    name: pin.name.clone(),
                    from: previous.version,
                    to: pin.version.clone(),
                })
            }
            Some(_) => {}
        }
    }
    for pin in old {
        if find(new, &pin.name).is_none() {
            changes.push(Change::ToolRemoved {
                kind,
                pin: pin.clone(),
            });
        }
    }
}

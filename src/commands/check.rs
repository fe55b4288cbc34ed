//! Implementation of `trunkcfg check`.

use super::load_config;
use crate::cli::CheckArgs;
use trunkcfg::config::{Config, ToolPin};
use trunkcfg::error::Result;

/// Validate the config and print a summary.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let config = load_config(args.path.as_deref())?;
    print!("{}", render_summary(&config));
    Ok(())
}

fn render_summary(config: &Config) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Config OK (schema {}, cli {})\n",
        config.schema_version(),
        config.cli_version()
    ));

    if !config.plugin_sources().is_empty() {
        out.push_str(&format!("\nPlugins ({}):\n", config.plugin_sources().len()));
        for source in config.plugin_sources() {
            out.push_str(&format!("  {} @ {}  {}\n", source.id, source.git_ref, source.uri));
        }
    }

    push_pins(&mut out, "Runtimes", config.runtimes());
    push_pins(&mut out, "Enabled linters", config.enabled_linters());
    push_pins(&mut out, "Disabled linters", config.disabled_linters());

    if !config.ignore_rules().is_empty() {
        out.push_str(&format!("\nIgnore rules ({}):\n", config.ignore_rules().len()));
        for rule in config.ignore_rules() {
            let linters: Vec<String> = rule.linters.iter().map(ToString::to_string).collect();
            out.push_str(&format!("  [{}] {}\n", linters.join(", "), rule.paths.join(", ")));
        }
    }

    if !config.enabled_actions().is_empty() || !config.disabled_actions().is_empty() {
        out.push_str("\nActions:\n");
        for action in config.enabled_actions() {
            out.push_str(&format!("  + {}\n", action));
        }
        for action in config.disabled_actions() {
            out.push_str(&format!("  - {}\n", action));
        }
    }

    out
}

fn push_pins(out: &mut String, title: &str, pins: &[ToolPin]) {
    if pins.is_empty() {
        return;
    }
    out.push_str(&format!("\n{} ({}):\n", title, pins.len()));
    for pin in pins {
        out.push_str(&format!(
            "  {:<24} {}\n",
            pin.name,
            pin.version().unwrap_or("(unpinned)")
        ));
    }
}

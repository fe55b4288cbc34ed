//! Implementation of `trunkcfg ignored`.

use super::load_config;
use crate::cli::IgnoredArgs;
use trunkcfg::error::Result;
use trunkcfg::ignore::IgnoreMatcher;

/// Report whether a file is excluded from a linter, and by which rules.
pub fn cmd_ignored(args: IgnoredArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let matcher = IgnoreMatcher::new(&config)?;

    let matches = matcher.matching_rules(&args.linter, &args.file);
    if matches.is_empty() {
        println!("{}: not ignored for {}", args.file, args.linter);
        return Ok(());
    }

    println!("{}: ignored for {}", args.file, args.linter);
    for index in matches {
        if let Some(rule) = matcher.rule(index) {
            let linters: Vec<String> = rule.linters.iter().map(ToString::to_string).collect();
            println!(
                "  lint.ignore[{}]: linters [{}], paths [{}]",
                index,
                linters.join(", "),
                rule.paths.join(", ")
            );
        }
    }
    Ok(())
}

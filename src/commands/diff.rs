//! Implementation of `trunkcfg diff`.

use crate::cli::DiffArgs;
use trunkcfg::config::Config;
use trunkcfg::error::Result;
use trunkcfg::snapshot;

/// Print the changes between two config snapshots.
pub fn cmd_diff(args: DiffArgs) -> Result<()> {
    let old = Config::load(&args.old)?;
    let new = Config::load(&args.new)?;

    let changes = snapshot::diff(&old, &new);
    if changes.is_empty() {
        println!("No changes.");
        return Ok(());
    }

    println!("{} change(s):", changes.len());
    for change in &changes {
        println!("  {}", change);
    }
    Ok(())
}

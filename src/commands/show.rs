//! Implementation of `trunkcfg show`.

use super::load_config;
use crate::cli::{OutputFormat, ShowArgs};
use trunkcfg::error::Result;

/// Print the normalized config in the requested format.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let config = load_config(args.path.as_deref())?;

    let rendered = match args.format {
        OutputFormat::Yaml => config.to_yaml()?,
        OutputFormat::Json => config.to_json()?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

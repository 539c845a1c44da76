//! Implementation of the `addons list` command.

use std::path::Path;

use addons_core::Registry;
use anyhow::Result;
use owo_colors::{OwoColorize, Stream};

use crate::output::{OutputFormat, symbols};

/// Execute the list command.
pub fn cmd_list(root: &Path, format: OutputFormat) -> Result<()> {
    let registry = Registry::discover(root)?;
    let names = registry.names();

    if format.is_json() {
        println!("{}", serde_json::to_string(&names)?);
        return Ok(());
    }

    for name in &names {
        println!(
            "  {} {}",
            symbols::INFO.if_supports_color(Stream::Stdout, |s| s.cyan()),
            name
        );
    }
    println!("{} component(s)", names.len());
    Ok(())
}

//! Implementation of the `addons changed` command.
//!
//! Runs the change detector over a newline-joined list of changed paths and
//! publishes the selected components as a JSON array (stdout, or the
//! automation output file when running inside CI).

use std::path::Path;

use addons_core::{Registry, RepoConfig, detect, parse_changed_files, publish_changed};
use anyhow::Result;
use owo_colors::{OwoColorize, Stream};

use crate::output::symbols;

/// Execute the changed command.
pub fn cmd_changed(root: &Path, files: &str) -> Result<()> {
    let registry = Registry::discover(root)?;
    let config = RepoConfig::load(root)?;
    let changed_files = parse_changed_files(files);

    let selection = detect(&registry, &config, &changed_files);

    if selection.shared {
        println!("Shared Go files changed, all components selected");
    }
    for change in &selection.changes {
        match &change.reason {
            Some(reason) => println!(
                "  {} {} has changes in {}",
                symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
                change.name,
                reason
            ),
            None => println!(
                "  {} {} has no changes",
                symbols::SKIP.if_supports_color(Stream::Stdout, |s| s.dimmed()),
                change.name
            ),
        }
    }
    if selection.fail_open {
        println!("No changes detected, selecting all components for safety");
    }

    publish_changed(&selection.components)?;
    Ok(())
}

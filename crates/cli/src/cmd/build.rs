//! Implementation of the `addons build` command.
//!
//! Builds a single component: its configured shared frontends, its own
//! frontend bundle, and the cross-compiled backend binaries.

use std::path::Path;
use std::time::Instant;

use addons_core::{BuildOptions, Registry, RepoConfig};
use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};

use crate::output::{format_duration, symbols};

/// Execute the build command.
pub fn cmd_build(root: &Path, component: &str, fast: bool) -> Result<()> {
    let registry = Registry::discover(root)?;
    let config = RepoConfig::load(root)?;
    let component = registry.resolve(component)?;
    let options = BuildOptions { fast };

    let start = Instant::now();
    let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
    rt.block_on(addons_core::build(root, &config, component, &options))
        .with_context(|| format!("Build of '{}' failed", component.name()))?;

    println!(
        "{} Built '{}' in {}",
        symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
        component.name(),
        format_duration(start.elapsed())
    );
    Ok(())
}

//! Implementation of the `addons install` command.
//!
//! Runs the full pipeline for one component: build, stage, and upload to
//! the target host.

use std::path::Path;
use std::time::Instant;

use addons_core::{BuildOptions, Registry, RepoConfig, resolve_host};
use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};

use crate::output::{format_duration, symbols};

/// Execute the install command.
pub fn cmd_install(root: &Path, component: &str, host: Option<&str>, fast: bool) -> Result<()> {
    let registry = Registry::discover(root)?;
    let config = RepoConfig::load(root)?;
    let component = registry.resolve(component)?;
    let options = BuildOptions { fast };

    let target_host = resolve_host(root, &config, host);
    println!(
        "{} Installing '{}' {} {}",
        symbols::INFO.if_supports_color(Stream::Stdout, |s| s.cyan()),
        component.name(),
        symbols::ARROW,
        target_host
    );

    let start = Instant::now();
    let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
    rt.block_on(addons_core::install(
        root, &config, component, host, &options,
    ))
    .with_context(|| format!("Install of '{}' failed", component.name()))?;

    println!(
        "{} Installed '{}' on {} in {}",
        symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
        component.name(),
        target_host,
        format_duration(start.elapsed())
    );
    Ok(())
}

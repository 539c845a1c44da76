//! Implementation of the `addons status` command.

use std::path::Path;

use addons_core::{BuildTarget, Registry, RepoConfig, resolve_host};
use addons_platform::HostInfo;
use anyhow::Result;

/// Execute the status command.
///
/// Prints tool version, repository root, local host information, build
/// targets, and where an install would upload to.
pub fn cmd_status(root: &Path) -> Result<()> {
    let config = RepoConfig::load(root)?;
    let host = HostInfo::current();
    let registry = Registry::discover(root)?;

    let targets: Vec<String> = BuildTarget::all().iter().map(|t| t.to_string()).collect();

    println!("addons v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("  Repository:  {}", root.display());
    println!("  Components:  {}", registry.names().join(", "));
    println!("  Targets:     {}", targets.join(", "));
    println!("  User:        {}@{}", host.username, host.hostname);
    println!("  Upload host: {}", resolve_host(root, &config, None));

    Ok(())
}

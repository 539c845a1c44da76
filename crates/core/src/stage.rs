//! Install staging
//!
//! Staging collects everything the remote host needs into
//! `gen/addons/<name>/`: a generated `build.yml` with the fixed
//! per-architecture base images, plus a copy of the component's static
//! assets (which include the freshly compiled backend binaries).

use crate::component::Component;
use crate::error::CoreError;
use addons_platform::BuildTarget;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

/// Base image used for every architecture in the generated build config
pub const BASE_IMAGE: &str = "ghcr.io/hassio-addons/base:16.3.6";

#[derive(Debug, serde::Serialize)]
struct BuildConfig {
    build_from: BTreeMap<&'static str, &'static str>,
}

impl BuildConfig {
    fn new() -> Self {
        let build_from = BuildTarget::all()
            .iter()
            .map(|target| (target.arch.image_arch(), BASE_IMAGE))
            .collect();
        Self { build_from }
    }
}

/// Stage a component for upload, returning the staging directory
pub fn stage(root: &Path, component: &Component) -> Result<PathBuf, CoreError> {
    let stage_dir = component.stage_dir(root);
    fs::create_dir_all(&stage_dir)?;

    write_build_config(&stage_dir)?;
    copy_dir_contents(&component.asset_dir(root), &stage_dir)?;

    info!(component = component.name(), dir = %stage_dir.display(), "staged");
    Ok(stage_dir)
}

/// Write the generated `build.yml` into `dir`
fn write_build_config(dir: &Path) -> Result<(), CoreError> {
    let config = BuildConfig::new();
    let yaml = serde_yaml::to_string(&config)?;
    let content = format!("# Local development build configuration\n{yaml}");
    fs::write(dir.join("build.yml"), content)?;
    Ok(())
}

/// Copy the contents of `src` into `dst`, preserving the directory layout
fn copy_dir_contents(src: &Path, dst: &Path) -> Result<(), CoreError> {
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry.map_err(std::io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|_| std::io::Error::other("path outside copy source"))?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

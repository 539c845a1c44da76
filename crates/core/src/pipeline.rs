//! Sequential build and install orchestration
//!
//! The pipeline is strictly sequential: shared frontends, the component's
//! own frontend, the multi-arch backend, then (for installs) staging and
//! upload. The first failing step aborts the whole run.

use crate::build::{build_backend, build_web};
use crate::component::{Component, Frontend};
use crate::config::RepoConfig;
use crate::error::CoreError;
use crate::{stage, upload};
use std::path::Path;

/// Options shared by the build and install pipelines
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Skip frontend builds whose bundle already exists
    pub fast: bool,
}

/// Build a component: shared frontends, own frontend, backend binaries
pub async fn build(
    root: &Path,
    config: &RepoConfig,
    component: &Component,
    options: &BuildOptions,
) -> Result<(), CoreError> {
    for extra in config.extra_frontends_for(component.name()) {
        build_web(root, &Frontend::new(extra), options.fast).await?;
    }
    build_web(root, &component.frontend(), options.fast).await?;
    build_backend(root, component).await?;
    Ok(())
}

/// Build a component and upload it to the target host
///
/// `host` follows the resolution order: explicit value, cached host file,
/// configured default.
pub async fn install(
    root: &Path,
    config: &RepoConfig,
    component: &Component,
    host: Option<&str>,
    options: &BuildOptions,
) -> Result<(), CoreError> {
    build(root, config, component, options).await?;
    stage::stage(root, component)?;

    let host = upload::resolve_host(root, config, host);
    upload::upload(root, config, component, &host).await
}

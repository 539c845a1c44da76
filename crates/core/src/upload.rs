//! Upload to the target host
//!
//! The staged directory is streamed as a gzip-compressed tar archive into
//! either a local shell (sentinel host `localhost`) or an ssh session on
//! the target host, replacing any existing remote copy.

use crate::component::Component;
use crate::config::RepoConfig;
use crate::error::CoreError;
use crate::exec::{Cmd, pipe};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Cached host file, relative to the repository root
pub const HOST_CACHE_FILE: &str = "gen/ha.txt";

/// Resolve the upload host: explicit argument, then the cached host file,
/// then the configured default
pub fn resolve_host(root: &Path, config: &RepoConfig, explicit: Option<&str>) -> String {
    if let Some(host) = explicit {
        if !host.is_empty() {
            return host.to_string();
        }
    }

    let cache = root.join(HOST_CACHE_FILE);
    if let Ok(content) = fs::read_to_string(&cache) {
        let cached = content.trim();
        if !cached.is_empty() {
            debug!(host = cached, file = %cache.display(), "using cached host");
            return cached.to_string();
        }
    }

    config.default_host.clone()
}

/// Upload the component's staged directory to `host`
///
/// The remote copy under `/addons/<prefix>_<name>` is removed and
/// recreated before extraction; remote extraction runs under sudo and
/// normalizes file ownership to root.
pub async fn upload(
    root: &Path,
    config: &RepoConfig,
    component: &Component,
    host: &str,
) -> Result<(), CoreError> {
    let stage_dir = component.stage_dir(root);
    let remote_dir = format!("/addons/{}_{}", config.prefix, component.name());

    info!(component = component.name(), host, remote_dir = %remote_dir, "uploading");

    let archive = Cmd::new("tar").args(["czf", "-", "."]).cwd(&stage_dir);

    let extract = if host == "localhost" {
        Cmd::new("bash").arg("-c").arg(format!(
            "rm -rf {remote_dir}/ && mkdir {remote_dir} && cd {remote_dir} && tar xzvf -"
        ))
    } else {
        Cmd::new("ssh")
            .arg(format!("{}@{}", config.remote_user, host))
            .arg(format!(
                "sudo rm -rf {remote_dir}/ && sudo mkdir {remote_dir} && cd {remote_dir} && \
                 sudo tar xzvf - && sudo chown -R root:root ."
            ))
    };

    pipe(archive, extract).await
}

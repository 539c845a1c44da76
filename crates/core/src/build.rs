//! Frontend and backend builds
//!
//! The frontend build produces a production bundle via npm; the backend
//! build cross-compiles the component's Go source for every build target
//! with static linking (no C runtime dependency).

use crate::component::{Component, Frontend};
use crate::error::CoreError;
use crate::exec::Cmd;
use addons_platform::BuildTarget;
use std::path::Path;
use tracing::info;

/// Build a web frontend: install dependencies, then produce the
/// production bundle
///
/// With `fast` set, the build is skipped entirely when a previously built
/// bundle already exists at the frontend's dist marker.
pub async fn build_web(root: &Path, frontend: &Frontend, fast: bool) -> Result<(), CoreError> {
    let web_dir = frontend.dir(root);

    if fast {
        let marker = frontend.dist_marker(root);
        if marker.is_file() {
            info!(
                frontend = frontend.name(),
                marker = %marker.display(),
                "bundle already built, skipping"
            );
            return Ok(());
        }
    }

    info!(frontend = frontend.name(), dir = %web_dir.display(), "building web frontend");
    Cmd::new("npm").arg("install").cwd(&web_dir).run().await?;
    Cmd::new("npm")
        .args(["run", "build"])
        .cwd(&web_dir)
        .run()
        .await?;
    Ok(())
}

/// Cross-compile the component's backend for every build target
///
/// Each target produces `addons/<name>/<name>-<goarch>`. `CGO_ENABLED=0`
/// keeps the binaries statically linked.
pub async fn build_backend(root: &Path, component: &Component) -> Result<(), CoreError> {
    let source = component.backend_source(root);
    let out_dir = component.asset_dir(root);
    tokio::fs::create_dir_all(&out_dir).await?;

    info!(component = component.name(), source = %source.display(), "building backend");

    for target in BuildTarget::all() {
        let output = out_dir.join(component.binary_name(target.arch));
        info!(target = %target, output = %output.display(), "compiling");

        Cmd::new("go")
            .args(["build", "-o"])
            .arg(output.display().to_string())
            .arg(source.display().to_string())
            .env("CGO_ENABLED", "0")
            .env("GOOS", target.os.as_str())
            .env("GOARCH", target.arch.as_str())
            .run()
            .await?;
    }
    Ok(())
}

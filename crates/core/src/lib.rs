//! addons-core: Build orchestration for addon artifacts
//!
//! This crate provides the logic behind the `addons` CLI:
//! - `Component` / `Registry`: the buildable units and their path templates
//! - `detect`: the pure change detector (changed paths -> components)
//! - build pipeline: frontend bundles, cross-compiled backends, staging,
//!   and upload to the target host

mod build;
mod ci;
mod component;
mod config;
mod detect;
mod error;
mod exec;
mod pipeline;
mod stage;
mod upload;

pub use ci::{OUTPUT_ENV, publish_changed};
pub use component::{Component, Frontend, Registry};
pub use config::RepoConfig;
pub use detect::{ComponentChange, Selection, detect, parse_changed_files};
pub use error::CoreError;
pub use pipeline::{BuildOptions, build, install};
pub use stage::stage;
pub use upload::{resolve_host, upload};

// Re-export build targets from addons-platform for convenience
pub use addons_platform::{Arch, BuildTarget, Os};

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

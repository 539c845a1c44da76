//! Platform abstractions for the addon build tool
//!
//! This crate provides the pieces of the build pipeline that describe the
//! machine rather than the repository:
//! - cross-compilation build targets (OS and architecture)
//! - path resolution (tilde expansion, repository-root discovery)
//! - host information for status reporting

mod error;
mod host;
mod paths;
mod target;

pub use error::PlatformError;
pub use host::HostInfo;
pub use paths::{expand_path, find_repo_root};
pub use target::{Arch, BuildTarget, Os};

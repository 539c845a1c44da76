//! Path expansion and repository-root discovery

use crate::error::PlatformError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Expand a path, resolving `~` to the user's home directory
pub fn expand_path<P: AsRef<Path>>(path: P) -> Result<PathBuf, PlatformError> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if path_str.starts_with("~/") {
        let home = dirs::home_dir().ok_or(PlatformError::NoHomeDirectory)?;
        Ok(home.join(&path_str[2..]))
    } else if path_str == "~" {
        dirs::home_dir().ok_or(PlatformError::NoHomeDirectory)
    } else {
        Ok(path.to_path_buf())
    }
}

/// Find the addon repository root by walking upward from `start`
///
/// The root is the first ancestor (including `start` itself) that contains
/// both an `addons/` and a `web/` directory.
pub fn find_repo_root<P: AsRef<Path>>(start: P) -> Result<PathBuf, PlatformError> {
    let start = expand_path(start)?;
    let start = start.canonicalize()?;

    let mut current = start.as_path();
    loop {
        if current.join("addons").is_dir() && current.join("web").is_dir() {
            debug!(root = %current.display(), "found repository root");
            return Ok(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return Err(PlatformError::RepoRootNotFound(start)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_expand_tilde() {
        let path = expand_path("~/.config/addons.yaml").unwrap();
        assert!(path.starts_with(dirs::home_dir().unwrap()));
    }

    #[test]
    fn test_expand_absolute_unchanged() {
        let path = expand_path("/etc/hosts").unwrap();
        assert_eq!(path, PathBuf::from("/etc/hosts"));
    }

    #[test]
    fn test_find_repo_root_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("addons")).unwrap();
        fs::create_dir_all(root.join("web/gateway/src")).unwrap();

        let found = find_repo_root(root.join("web/gateway/src")).unwrap();
        assert_eq!(found, root.canonicalize().unwrap());
    }

    #[test]
    fn test_find_repo_root_missing() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();

        let result = find_repo_root(temp.path().join("src"));
        assert!(matches!(result, Err(PlatformError::RepoRootNotFound(_))));
    }
}

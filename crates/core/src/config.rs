//! Repository configuration
//!
//! An optional `addons.yaml` at the repository root overrides the deployment
//! defaults. A missing file yields the defaults unchanged.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Configuration file name, relative to the repository root
pub const CONFIG_FILE: &str = "addons.yaml";

/// Deployment configuration for an addon repository
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoConfig {
    /// Slug prefix for the remote install directory
    /// (`/addons/<prefix>_<name>`)
    pub prefix: String,

    /// Login user for remote uploads
    pub remote_user: String,

    /// Upload host used when no explicit host or cached host is available
    pub default_host: String,

    /// Additional shared frontends a component depends on, by component
    /// name. Drives both the extra frontend builds and the change
    /// detector's cross dependency.
    pub extra_frontends: BTreeMap<String, Vec<String>>,
}

impl Default for RepoConfig {
    fn default() -> Self {
        let mut extra_frontends = BTreeMap::new();
        extra_frontends.insert("gateway".to_string(), vec!["auth".to_string()]);

        Self {
            prefix: "local".to_string(),
            remote_user: "hassio".to_string(),
            default_host: "homeassistant.local".to_string(),
            extra_frontends,
        }
    }
}

impl RepoConfig {
    /// Load the configuration from `<root>/addons.yaml`, falling back to
    /// the defaults when the file does not exist
    pub fn load(root: &Path) -> Result<Self, CoreError> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// The extra shared frontends configured for a component (empty for
    /// components without any)
    pub fn extra_frontends_for(&self, component: &str) -> &[String] {
        self.extra_frontends
            .get(component)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = RepoConfig::default();
        assert_eq!(config.prefix, "local");
        assert_eq!(config.remote_user, "hassio");
        assert_eq!(config.default_host, "homeassistant.local");
        assert_eq!(config.extra_frontends_for("gateway"), ["auth"]);
        assert!(config.extra_frontends_for("security").is_empty());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = RepoConfig::load(temp.path()).unwrap();
        assert_eq!(config.default_host, "homeassistant.local");
    }

    #[test]
    fn test_load_partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            "default_host: ha.example.net\nprefix: mine\n",
        )
        .unwrap();

        let config = RepoConfig::load(temp.path()).unwrap();
        assert_eq!(config.default_host, "ha.example.net");
        assert_eq!(config.prefix, "mine");
        assert_eq!(config.remote_user, "hassio");
        assert_eq!(config.extra_frontends_for("gateway"), ["auth"]);
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "prefix: [not, a, string").unwrap();

        let result = RepoConfig::load(temp.path());
        assert!(matches!(result, Err(CoreError::Yaml(_))));
    }
}

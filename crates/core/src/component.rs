//! Components and the component registry
//!
//! A component (addon) is one independently buildable and deployable unit
//! pairing a web frontend with a compiled backend binary. All of its paths
//! derive from its name by fixed templates relative to the repository root.

use crate::error::CoreError;
use addons_platform::Arch;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One buildable addon, identified by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    name: String,
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The component's own web frontend
    pub fn frontend(&self) -> Frontend {
        Frontend::new(&self.name)
    }

    /// Backend source file: `go/tools/<name>/<name>.go`
    pub fn backend_source(&self, root: &Path) -> PathBuf {
        root.join("go")
            .join("tools")
            .join(&self.name)
            .join(format!("{}.go", self.name))
    }

    /// Static asset and binary output directory: `addons/<name>/`
    pub fn asset_dir(&self, root: &Path) -> PathBuf {
        root.join("addons").join(&self.name)
    }

    /// Install staging directory: `gen/addons/<name>/`
    pub fn stage_dir(&self, root: &Path) -> PathBuf {
        root.join("gen").join("addons").join(&self.name)
    }

    /// Per-architecture backend binary file name: `<name>-<goarch>`
    pub fn binary_name(&self, arch: Arch) -> String {
        format!("{}-{}", self.name, arch.as_str())
    }
}

/// A buildable web frontend directory
///
/// Usually a component's own frontend, but shared frontends (such as an
/// authentication UI that another component embeds) are built the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontend {
    name: String,
}

impl Frontend {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Frontend project directory: `web/<name>/`
    pub fn dir(&self, root: &Path) -> PathBuf {
        root.join("web").join(&self.name)
    }

    /// Built-bundle marker checked by fast-path builds:
    /// `go/<name>/dist/index.html`
    pub fn dist_marker(&self, root: &Path) -> PathBuf {
        root.join("go")
            .join(&self.name)
            .join("dist")
            .join("index.html")
    }
}

/// The set of known components, sorted by name
#[derive(Debug, Clone)]
pub struct Registry {
    components: Vec<Component>,
}

impl Registry {
    /// Build a registry from a list of component names (sorted)
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut components: Vec<Component> = names.into_iter().map(Component::new).collect();
        components.sort_by(|a, b| a.name.cmp(&b.name));
        Self { components }
    }

    /// Discover components by listing the subdirectories of `addons/`
    ///
    /// Hidden directories are skipped. An empty result is an error: a repo
    /// with no addons cannot be built or deployed.
    pub fn discover(root: &Path) -> Result<Self, CoreError> {
        let addons_dir = root.join("addons");
        let mut names = Vec::new();

        if addons_dir.is_dir() {
            for entry in fs::read_dir(&addons_dir)? {
                let entry = entry?;
                let name = entry.file_name().to_string_lossy().into_owned();
                if entry.file_type()?.is_dir() && !name.starts_with('.') {
                    names.push(name);
                }
            }
        }

        if names.is_empty() {
            return Err(CoreError::NoComponents(addons_dir));
        }

        debug!(count = names.len(), "discovered components");
        Ok(Self::from_names(names))
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn names(&self) -> Vec<String> {
        self.components.iter().map(|c| c.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Resolve a component by name; unknown names are a hard input error
    pub fn resolve(&self, name: &str) -> Result<&Component, CoreError> {
        self.components
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| CoreError::UnknownComponent(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_component_paths() {
        let component = Component::new("gateway");
        let root = Path::new("/repo");

        assert_eq!(component.frontend().dir(root), root.join("web/gateway"));
        assert_eq!(
            component.backend_source(root),
            root.join("go/tools/gateway/gateway.go")
        );
        assert_eq!(component.asset_dir(root), root.join("addons/gateway"));
        assert_eq!(component.stage_dir(root), root.join("gen/addons/gateway"));
        assert_eq!(
            component.frontend().dist_marker(root),
            root.join("go/gateway/dist/index.html")
        );
    }

    #[test]
    fn test_binary_name_per_arch() {
        let component = Component::new("security");
        assert_eq!(component.binary_name(Arch::Amd64), "security-amd64");
        assert_eq!(component.binary_name(Arch::Arm64), "security-arm64");
    }

    #[test]
    fn test_discover_sorted_and_skips_hidden() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        for name in ["security", "gateway", ".git-keep", "alphaess"] {
            fs::create_dir_all(root.join("addons").join(name)).unwrap();
        }
        fs::write(root.join("addons/README.md"), "not a component").unwrap();

        let registry = Registry::discover(root).unwrap();
        assert_eq!(registry.names(), vec!["alphaess", "gateway", "security"]);
    }

    #[test]
    fn test_discover_empty_is_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("addons")).unwrap();

        let result = Registry::discover(temp.path());
        assert!(matches!(result, Err(CoreError::NoComponents(_))));
    }

    #[test]
    fn test_resolve_unknown_component() {
        let registry = Registry::from_names(["gateway", "security"]);

        assert_eq!(registry.resolve("gateway").unwrap().name(), "gateway");
        let err = registry.resolve("does-not-exist").unwrap_err();
        assert!(matches!(err, CoreError::UnknownComponent(name) if name == "does-not-exist"));
    }
}

//! Change detection
//!
//! Given the set of known components and a list of changed repository paths,
//! compute which components need rebuilding. The detector is pure: same
//! inputs always produce the same selection, independent of filesystem
//! state.
//!
//! Policy, preserved deliberately: a change under the shared Go tree
//! rebuilds everything, and an inconclusive detection falls open to
//! rebuilding everything. Under-building is riskier than over-building.

use crate::component::Registry;
use crate::config::RepoConfig;
use tracing::{debug, info};

/// Why a single component was (or was not) selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentChange {
    pub name: String,
    /// The first matching path category, `None` when nothing matched
    pub reason: Option<String>,
}

impl ComponentChange {
    pub fn is_changed(&self) -> bool {
        self.reason.is_some()
    }
}

/// The detector's verdict over the full component set
#[derive(Debug, Clone)]
pub struct Selection {
    /// Per-component verdicts, in registry order
    pub changes: Vec<ComponentChange>,
    /// The shared-dependency rule fired: everything rebuilds
    pub shared: bool,
    /// Nothing matched, so the fail-open fallback selected everything
    pub fail_open: bool,
    /// The component names to build, sorted and duplicate-free
    pub components: Vec<String>,
}

/// Split a newline-joined argument into changed file paths
pub fn parse_changed_files(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// True if a path invalidates the shared Go dependency tree
///
/// Paths under `go/tools/` are component-scoped and never count as shared.
/// The `go.mod`/`go.sum` suffix checks are unanchored on purpose: a lock
/// file anywhere in the tree invalidates every backend.
fn is_shared_path(path: &str) -> bool {
    if path.starts_with("go/tools/") {
        return false;
    }
    path.starts_with("go/") || path.ends_with("go.mod") || path.ends_with("go.sum")
}

/// True if any changed path invalidates the shared dependency tree
pub fn has_shared_changes(changed_files: &[String]) -> bool {
    changed_files.iter().any(|path| is_shared_path(path))
}

/// Determine which components need rebuilding
pub fn detect(registry: &Registry, config: &RepoConfig, changed_files: &[String]) -> Selection {
    let names = registry.names();

    if has_shared_changes(changed_files) {
        info!("shared Go files changed, selecting all components");
        let changes = names
            .iter()
            .map(|name| ComponentChange {
                name: name.clone(),
                reason: Some("go/".to_string()),
            })
            .collect();
        return Selection {
            changes,
            shared: true,
            fail_open: false,
            components: names,
        };
    }

    let mut changes = Vec::with_capacity(names.len());
    for component in registry.components() {
        let reason = component_reason(
            component.name(),
            config.extra_frontends_for(component.name()),
            changed_files,
        );
        match &reason {
            Some(reason) => debug!(component = component.name(), reason = %reason, "has changes"),
            None => debug!(component = component.name(), "no changes"),
        }
        changes.push(ComponentChange {
            name: component.name().to_string(),
            reason,
        });
    }

    let mut components: Vec<String> = changes
        .iter()
        .filter(|change| change.is_changed())
        .map(|change| change.name.clone())
        .collect();

    let fail_open = components.is_empty();
    if fail_open {
        info!("no components matched, selecting all as fallback");
        components = names;
    }

    Selection {
        changes,
        shared: false,
        fail_open,
        components,
    }
}

/// The first path category matching this component, if any
fn component_reason(
    name: &str,
    extra_frontends: &[String],
    changed_files: &[String],
) -> Option<String> {
    for path in changed_files {
        if path.starts_with(&format!("addons/{name}/")) {
            return Some("addons/".to_string());
        }
        if path.starts_with(&format!("go/tools/{name}/")) {
            return Some("go/tools/".to_string());
        }
        if path.starts_with(&format!("web/{name}/")) {
            return Some("web/".to_string());
        }
        for extra in extra_frontends {
            if path.starts_with(&format!("web/{extra}/")) {
                return Some(format!("web/{extra}/"));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::from_names(["gateway", "security", "mqtt-bridge", "alphaess"])
    }

    fn config() -> RepoConfig {
        RepoConfig::default()
    }

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn all_names() -> Vec<String> {
        vec![
            "alphaess".to_string(),
            "gateway".to_string(),
            "mqtt-bridge".to_string(),
            "security".to_string(),
        ]
    }

    #[test]
    fn test_single_component_change() {
        let selection = detect(&registry(), &config(), &paths(&["addons/security/config.yaml"]));

        assert_eq!(selection.components, vec!["security"]);
        assert!(!selection.shared);
        assert!(!selection.fail_open);
    }

    #[test]
    fn test_shared_go_change_selects_all() {
        let selection = detect(&registry(), &config(), &paths(&["go/go.mod"]));

        assert_eq!(selection.components, all_names());
        assert!(selection.shared);
    }

    #[test]
    fn test_shared_go_source_selects_all() {
        let selection = detect(&registry(), &config(), &paths(&["go/network/listener.go"]));

        assert_eq!(selection.components, all_names());
        assert!(selection.shared);
    }

    #[test]
    fn test_go_tools_is_component_scoped() {
        let selection = detect(
            &registry(),
            &config(),
            &paths(&["go/tools/alphaess/alphaess.go"]),
        );

        assert_eq!(selection.components, vec!["alphaess"]);
        assert!(!selection.shared);
    }

    #[test]
    fn test_lock_file_suffix_is_unanchored() {
        assert!(is_shared_path("go.sum"));
        assert!(is_shared_path("subdir/go.mod"));
        assert!(!is_shared_path("go/tools/gateway/go.mod"));
    }

    #[test]
    fn test_empty_input_fails_open() {
        let selection = detect(&registry(), &config(), &[]);

        assert_eq!(selection.components, all_names());
        assert!(selection.fail_open);
        assert!(selection.changes.iter().all(|c| !c.is_changed()));
    }

    #[test]
    fn test_unmatched_input_fails_open() {
        let selection = detect(&registry(), &config(), &paths(&["docs/README.md"]));

        assert_eq!(selection.components, all_names());
        assert!(selection.fail_open);
    }

    #[test]
    fn test_shared_frontend_selects_dependent_only() {
        let selection = detect(&registry(), &config(), &paths(&["web/auth/src/login.ts"]));

        assert_eq!(selection.components, vec!["gateway"]);
        let gateway = selection
            .changes
            .iter()
            .find(|c| c.name == "gateway")
            .unwrap();
        assert_eq!(gateway.reason.as_deref(), Some("web/auth/"));
    }

    #[test]
    fn test_web_change_selects_owner() {
        let selection = detect(&registry(), &config(), &paths(&["web/mqtt-bridge/index.ts"]));

        assert_eq!(selection.components, vec!["mqtt-bridge"]);
    }

    #[test]
    fn test_multiple_components() {
        let selection = detect(
            &registry(),
            &config(),
            &paths(&["web/security/app.ts", "addons/alphaess/config.yaml"]),
        );

        assert_eq!(selection.components, vec!["alphaess", "security"]);
    }

    #[test]
    fn test_output_is_sorted_and_unique() {
        let selection = detect(
            &registry(),
            &config(),
            &paths(&[
                "web/security/app.ts",
                "addons/security/config.yaml",
                "go/tools/security/security.go",
            ]),
        );

        assert_eq!(selection.components, vec!["security"]);
    }

    #[test]
    fn test_parse_changed_files() {
        let files = parse_changed_files("a.txt\n\n  web/auth/x.ts  \n");
        assert_eq!(files, vec!["a.txt", "web/auth/x.ts"]);
        assert!(parse_changed_files("").is_empty());
    }

    #[test]
    fn test_detector_is_deterministic() {
        let input = paths(&["addons/gateway/icon.png", "web/auth/login.ts"]);
        let first = detect(&registry(), &config(), &input);
        let second = detect(&registry(), &config(), &input);
        assert_eq!(first.components, second.components);
    }
}

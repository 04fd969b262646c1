//! Project entity representing the target front-end project.

use crate::config::ProjectConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Marker manifest file whose presence identifies a project root.
///
/// Discovery runs before any configuration can be loaded from the
/// discovered root, so the marker name is a constant rather than a
/// config key.
pub const PROJECT_MANIFEST: &str = "package.json";

/// Subset of package.json used for display purposes
#[derive(Debug, Clone, Deserialize)]
pub struct PackageManifest {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Represents the front-end project being worked on
#[derive(Debug, Clone)]
pub struct Project {
    /// Project root path, resolved once at startup
    pub root_path: PathBuf,
    /// Directory where components are scaffolded (absolute path)
    pub components_directory: PathBuf,
    /// Loaded configuration
    pub config: ProjectConfig,
}

impl Project {
    /// Create a new Project from a root path and configuration
    pub fn new(root_path: PathBuf, config: ProjectConfig) -> Self {
        let components_directory = root_path.join(&config.scaffold.components_directory);

        Self {
            root_path,
            components_directory,
            config,
        }
    }

    /// Discover the project root by walking up from the starting directory.
    ///
    /// Returns the nearest directory (including the start itself) that
    /// contains the marker manifest, or `None` when the walk reaches the
    /// filesystem root without finding one.
    pub fn discover(start_path: Option<PathBuf>) -> Option<PathBuf> {
        let start = start_path
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

        ascend_to_marker(&start, PROJECT_MANIFEST)
    }

    /// Locate the project root with a soft fallback.
    ///
    /// When no ancestor carries the marker manifest this returns the
    /// starting directory unchanged. The caller is expected to warn but
    /// proceed; this never fails.
    pub fn locate_root(start_path: Option<PathBuf>) -> PathBuf {
        let start = start_path
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

        ascend_to_marker(&start, PROJECT_MANIFEST).unwrap_or(start)
    }

    /// Check if the root carries the marker manifest
    pub fn has_manifest(&self) -> bool {
        self.root_path.join(PROJECT_MANIFEST).is_file()
    }

    /// Read the package manifest at the root, if present and parseable
    pub fn manifest(&self) -> Option<PackageManifest> {
        let raw = std::fs::read_to_string(self.root_path.join(PROJECT_MANIFEST)).ok()?;
        match serde_json::from_str(&raw) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                tracing::warn!("Failed to parse {}: {}", PROJECT_MANIFEST, e);
                None
            }
        }
    }

    /// Display name for the project: manifest name, else root directory name
    pub fn display_name(&self) -> String {
        if let Some(manifest) = self.manifest() {
            if let Some(name) = manifest.name {
                return name;
            }
        }
        self.root_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root_path.display().to_string())
    }
}

/// Walk upward from `start`, returning the first directory that contains
/// `marker` directly inside it. Iterative, bounded by the filesystem root
/// (where a directory has no parent).
fn ascend_to_marker(start: &Path, marker: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        if current.join(marker).exists() {
            return Some(current.to_path_buf());
        }

        // Move up to parent
        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_project_new() {
        let config = ProjectConfig::default();
        let project = Project::new(PathBuf::from("/tmp/test-app"), config);

        assert_eq!(project.root_path, PathBuf::from("/tmp/test-app"));
        assert_eq!(
            project.components_directory,
            PathBuf::from("/tmp/test-app/src/components")
        );
    }

    #[test]
    fn test_discover_finds_nearest_ancestor() {
        let temp = TempDir::new().unwrap();
        let outer = temp.path().join("outer");
        let inner = outer.join("inner");
        let deep = inner.join("src").join("pages");
        fs::create_dir_all(&deep).unwrap();
        fs::write(outer.join(PROJECT_MANIFEST), "{}").unwrap();
        fs::write(inner.join(PROJECT_MANIFEST), "{}").unwrap();

        // The nearest marker wins, not the outermost one
        let found = Project::discover(Some(deep)).unwrap();
        assert_eq!(found, inner);
    }

    #[test]
    fn test_discover_includes_start_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("app");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join(PROJECT_MANIFEST), "{}").unwrap();

        let found = Project::discover(Some(root.clone())).unwrap();
        assert_eq!(found, root);
    }

    #[test]
    fn test_locate_root_falls_back_to_start() {
        let temp = TempDir::new().unwrap();
        let start = temp.path().join("nowhere");
        fs::create_dir_all(&start).unwrap();

        // Use a marker that cannot exist in any ancestor of the temp dir
        assert_eq!(
            ascend_to_marker(&start, "scaffold-tui-nonexistent-marker.json"),
            None
        );

        // The soft fallback keeps the starting directory unchanged
        let located = ascend_to_marker(&start, "scaffold-tui-nonexistent-marker.json")
            .unwrap_or_else(|| start.clone());
        assert_eq!(located, start);
    }

    #[test]
    fn test_display_name_from_manifest() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("my-app");
        fs::create_dir_all(&root).unwrap();
        fs::write(
            root.join(PROJECT_MANIFEST),
            r#"{"name": "storefront", "version": "1.0.0"}"#,
        )
        .unwrap();

        let project = Project::new(root, ProjectConfig::default());
        assert!(project.has_manifest());
        assert_eq!(project.display_name(), "storefront");
    }

    #[test]
    fn test_display_name_without_manifest() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("my-app");
        fs::create_dir_all(&root).unwrap();

        let project = Project::new(root, ProjectConfig::default());
        assert!(!project.has_manifest());
        assert_eq!(project.display_name(), "my-app");
    }
}

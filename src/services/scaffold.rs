//! Scaffolding service for component generation and project layout.

use crate::config::ScaffoldConfig;
use crate::domain::ComponentName;
use crate::error::{ScaffoldError, ScaffoldResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Service for scaffolding files inside the target project
pub struct ScaffoldService {
    root_path: PathBuf,
    config: ScaffoldConfig,
}

impl ScaffoldService {
    /// Create a new ScaffoldService rooted at the project
    pub fn new(root_path: PathBuf, config: ScaffoldConfig) -> Self {
        Self { root_path, config }
    }

    /// Scaffold a component directory with its three template files.
    ///
    /// Creates `<components_directory>/<Name>/` (missing parents included;
    /// a pre-existing directory is not an error) and writes the component
    /// module, the barrel file, and the CSS module. Existing files at the
    /// target paths are overwritten. Writes are not transactional: a
    /// failure partway leaves the earlier files in place.
    ///
    /// Returns the created directory path relative to the project root.
    pub fn create_component(&self, name: &ComponentName) -> ScaffoldResult<PathBuf> {
        let component_dir = self
            .root_path
            .join(&self.config.components_directory)
            .join(name.as_str());

        fs::create_dir_all(&component_dir).map_err(|source| ScaffoldError::CreateDirectory {
            path: component_dir.clone(),
            source,
        })?;

        let files = [
            (
                component_dir.join(name.component_filename()),
                component_template(name),
            ),
            (component_dir.join(name.index_filename()), index_template(name)),
            (
                component_dir.join(name.stylesheet_filename()),
                stylesheet_template(name),
            ),
        ];

        for (path, content) in files {
            fs::write(&path, content)
                .map_err(|source| ScaffoldError::WriteFile { path, source })?;
        }

        Ok(self.relative_to_root(&component_dir))
    }

    /// Ensure the expected project layout directories exist.
    ///
    /// Idempotent: directories already present are left alone and not
    /// reported. Returns only the directories newly created by this call,
    /// relative to the project root.
    pub fn ensure_layout(&self) -> ScaffoldResult<Vec<PathBuf>> {
        let mut created = Vec::new();

        for relative in &self.config.layout_directories {
            let full_path = self.root_path.join(relative);
            if !full_path.exists() {
                fs::create_dir_all(&full_path).map_err(|source| {
                    ScaffoldError::CreateDirectory {
                        path: full_path.clone(),
                        source,
                    }
                })?;
                created.push(relative.clone());
            }
        }

        Ok(created)
    }

    fn relative_to_root(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root_path)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Component module: typed props plus a function component that merges the
/// derived container class with a caller-supplied one.
fn component_template(name: &ComponentName) -> String {
    format!(
        r#"import {{ cn }} from '@/lib/utils';
import React from 'react';

interface {name}Props {{
  className?: string;
  children?: React.ReactNode;
}}

export function {name}({{ className, children }}: {name}Props) {{
  return (
    <div className={{cn('{token}', className)}}>
      {{children}}
    </div>
  );
}}
"#,
        name = name.as_str(),
        token = name.class_token(),
    )
}

/// Barrel file re-exporting everything from the component module
fn index_template(name: &ComponentName) -> String {
    format!("export * from './{}';\n", name.as_str())
}

/// Scoped stylesheet with an empty rule block for the container class
fn stylesheet_template(name: &ComponentName) -> String {
    format!(".{} {{\n}}\n", name.class_token())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service_for(root: &Path) -> ScaffoldService {
        ScaffoldService::new(root.to_path_buf(), ScaffoldConfig::default())
    }

    #[test]
    fn test_create_component_writes_three_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        let service = service_for(temp.path());

        let name = ComponentName::new("Button").unwrap();
        let relative = service.create_component(&name).unwrap();
        assert_eq!(relative, PathBuf::from("src/components/Button"));

        let dir = temp.path().join("src/components/Button");
        assert!(dir.join("Button.tsx").is_file());
        assert!(dir.join("index.ts").is_file());
        assert!(dir.join("Button.module.css").is_file());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 3);
    }

    #[test]
    fn test_component_template_content() {
        let temp = TempDir::new().unwrap();
        let service = service_for(temp.path());

        let name = ComponentName::new("Button").unwrap();
        service.create_component(&name).unwrap();

        let dir = temp.path().join("src/components/Button");
        let module = fs::read_to_string(dir.join("Button.tsx")).unwrap();
        assert!(module.contains("interface ButtonProps"));
        assert!(module.contains("className?: string;"));
        assert!(module.contains("children?: React.ReactNode;"));
        assert!(module.contains("export function Button({ className, children }: ButtonProps)"));
        assert!(module.contains("cn('button-container', className)"));

        let index = fs::read_to_string(dir.join("index.ts")).unwrap();
        assert_eq!(index, "export * from './Button';\n");

        let stylesheet = fs::read_to_string(dir.join("Button.module.css")).unwrap();
        assert!(stylesheet.contains(".button-container {"));
    }

    #[test]
    fn test_create_component_overwrites_existing_files() {
        let temp = TempDir::new().unwrap();
        let service = service_for(temp.path());
        let name = ComponentName::new("Card").unwrap();

        let dir = temp.path().join("src/components/Card");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Card.tsx"), "stale").unwrap();

        service.create_component(&name).unwrap();
        let module = fs::read_to_string(dir.join("Card.tsx")).unwrap();
        assert!(module.contains("interface CardProps"));
    }

    #[test]
    fn test_ensure_layout_creates_missing_directories() {
        let temp = TempDir::new().unwrap();
        let service = service_for(temp.path());

        let created = service.ensure_layout().unwrap();
        assert_eq!(
            created,
            vec![
                PathBuf::from("src/components"),
                PathBuf::from("src/lib"),
                PathBuf::from("src/hooks"),
            ]
        );
        assert!(temp.path().join("src/hooks").is_dir());
    }

    #[test]
    fn test_ensure_layout_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let service = service_for(temp.path());

        let first = service.ensure_layout().unwrap();
        assert_eq!(first.len(), 3);

        // The second pass finds everything in place and reports nothing
        let second = service.ensure_layout().unwrap();
        assert!(second.is_empty());
    }

    #[test]
    fn test_ensure_layout_reports_only_new_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src/components")).unwrap();
        let service = service_for(temp.path());

        let created = service.ensure_layout().unwrap();
        assert_eq!(
            created,
            vec![PathBuf::from("src/lib"), PathBuf::from("src/hooks")]
        );
    }
}

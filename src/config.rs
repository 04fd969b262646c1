//! Configuration management for scaffold-tui.
//!
//! Supports layered configuration: defaults → project → user → env

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub scaffold: ScaffoldConfig,
    #[serde(default)]
    pub package_manager: PackageManagerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            scaffold: ScaffoldConfig::default(),
            package_manager: PackageManagerConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl ProjectConfig {
    /// Load configuration with hierarchy: defaults → project → user → env
    pub fn load(project_root: Option<&PathBuf>) -> Result<Self, ConfigError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder();

        // 1. Start with defaults
        builder = builder.add_source(
            config::File::from_str(
                include_str!("../default_config.toml"),
                config::FileFormat::Toml,
            )
            .required(false),
        );

        // 2. Project-specific config (.scaffold-tui.toml in project root)
        if let Some(root) = project_root {
            let project_config = root.join(".scaffold-tui.toml");
            if project_config.exists() {
                builder = builder.add_source(File::from(project_config).required(false));
            }
        }

        // 3. User config (~/.config/scaffold-tui/config.toml)
        if let Some(config_dir) =
            directories::ProjectDirs::from("com", "scaffold-tui", "scaffold-tui")
        {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(File::from(user_config).required(false));
            }
        }

        // 4. Environment variables (SCAFFOLD_TUI_*)
        builder = builder.add_source(
            Environment::with_prefix("SCAFFOLD_TUI")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration with default settings only
    pub fn load_defaults() -> Self {
        Self::default()
    }
}

/// Scaffolding-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Directory where components are created (relative to project root)
    #[serde(default = "default_components_directory")]
    pub components_directory: PathBuf,
    /// Directories expected in a laid-out project (relative to project root)
    #[serde(default = "default_layout_directories")]
    pub layout_directories: Vec<PathBuf>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            components_directory: default_components_directory(),
            layout_directories: default_layout_directories(),
        }
    }
}

fn default_components_directory() -> PathBuf {
    PathBuf::from("src/components")
}

fn default_layout_directories() -> Vec<PathBuf> {
    vec![
        PathBuf::from("src/components"),
        PathBuf::from("src/lib"),
        PathBuf::from("src/hooks"),
    ]
}

/// Package manager configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageManagerConfig {
    /// Package manager executable (resolved through PATH)
    #[serde(default = "default_program")]
    pub program: String,
    /// Runtime executable probed at startup
    #[serde(default = "default_runtime_program")]
    pub runtime_program: String,
}

impl Default for PackageManagerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            runtime_program: default_runtime_program(),
        }
    }
}

fn default_program() -> String {
    "npm".to_string()
}

fn default_runtime_program() -> String {
    "node".to_string()
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// UI refresh rate in milliseconds
    #[serde(default = "default_refresh_rate_ms")]
    pub refresh_rate_ms: u64,
    /// Enable vim-style navigation (j/k/h/l)
    #[serde(default = "default_vim_navigation")]
    pub vim_navigation: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: default_refresh_rate_ms(),
            vim_navigation: default_vim_navigation(),
        }
    }
}

fn default_refresh_rate_ms() -> u64 {
    100
}

fn default_vim_navigation() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProjectConfig::default();
        assert_eq!(
            config.scaffold.components_directory,
            PathBuf::from("src/components")
        );
        assert_eq!(config.scaffold.layout_directories.len(), 3);
        assert_eq!(config.package_manager.program, "npm");
        assert_eq!(config.package_manager.runtime_program, "node");
        assert_eq!(config.ui.refresh_rate_ms, 100);
        assert!(config.ui.vim_navigation);
    }

    #[test]
    fn test_layout_directories_default_order() {
        let config = ScaffoldConfig::default();
        assert_eq!(
            config.layout_directories,
            vec![
                PathBuf::from("src/components"),
                PathBuf::from("src/lib"),
                PathBuf::from("src/hooks"),
            ]
        );
    }
}

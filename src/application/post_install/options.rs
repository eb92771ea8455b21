//! Post-install Options

use std::path::{Path, PathBuf};

use crate::config::{CONFIG_FILE_NAME, DEFAULT_PLUGIN_NAME};
use crate::domain::value_objects::path;

/// Options for the post-install use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostInstallOptions {
    /// Explicit build configuration path (defaults to `<project_root>/capacitor.config.json`)
    pub config_path: Option<PathBuf>,
    /// Project root; `webDir` is resolved against it
    pub project_root: PathBuf,
    /// Directory the `node_modules` lookup starts from
    pub search_from: PathBuf,
    /// Name of the block under `plugins`
    pub plugin: String,
}

impl PostInstallOptions {
    /// Defaults for a script running inside `<project>/node_modules/<package>`:
    /// the project root sits two levels above the working directory.
    pub fn for_working_dir(cwd: impl Into<PathBuf>) -> Self {
        let cwd: PathBuf = cwd.into();
        Self {
            config_path: None,
            project_root: path::ancestor(&cwd, 2),
            search_from: cwd,
            plugin: DEFAULT_PLUGIN_NAME.to_string(),
        }
    }

    pub fn with_config_path(mut self, config_path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(config_path.into());
        self
    }

    pub fn with_project_root(mut self, project_root: impl Into<PathBuf>) -> Self {
        self.project_root = project_root.into();
        self
    }

    pub fn with_search_from(mut self, search_from: impl Into<PathBuf>) -> Self {
        self.search_from = search_from.into();
        self
    }

    pub fn with_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.plugin = plugin.into();
        self
    }

    /// Make every path absolute against `cwd`.
    pub fn resolved_against(self, cwd: &Path) -> Self {
        Self {
            config_path: self.config_path.map(|p| path::resolve(cwd, &p)),
            project_root: path::resolve(cwd, &self.project_root),
            search_from: path::resolve(cwd, &self.search_from),
            plugin: self.plugin,
        }
    }

    /// Build configuration path after defaults.
    pub fn config_path(&self) -> PathBuf {
        self.config_path
            .clone()
            .unwrap_or_else(|| self.project_root.join(CONFIG_FILE_NAME))
    }

    /// Web output directory for a given `webDir` value.
    pub fn target_dir(&self, web_dir: &str) -> PathBuf {
        path::resolve(&self.project_root, Path::new(web_dir))
    }
}

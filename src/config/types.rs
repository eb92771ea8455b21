//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// File name of the Capacitor build configuration.
pub const CONFIG_FILE_NAME: &str = "capacitor.config.json";

/// Key of the plugin block under `plugins`.
pub const DEFAULT_PLUGIN_NAME: &str = "PWAFirebaseMsg";

/// Subset of `capacitor.config.json` this step reads.
///
/// Every other top-level key belongs to Capacitor and is ignored silently.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacitorConfig {
    /// Web asset directory, relative to the project root
    #[serde(default)]
    pub web_dir: Option<String>,

    #[serde(default)]
    pub plugins: Map<String, Value>,
}

impl CapacitorConfig {
    /// Plugin block by name. Non-object values count as absent.
    pub fn plugin(&self, name: &str) -> Option<&Map<String, Value>> {
        self.plugins.get(name).and_then(Value::as_object)
    }
}

/// Verbosity level, ordered from least to most output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }
}

/// Settings taken from `PWA_FIREBASE_MSG_*` environment variables.
///
/// CLI flags override these; these override built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub config: Option<PathBuf>,
    pub project_root: Option<PathBuf>,
    pub verbosity: Option<Verbosity>,
    /// Human-readable notes about values that were ignored
    pub warnings: Vec<String>,
}

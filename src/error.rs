//! Error types for the post-install step
//!
//! Every variant is fatal: the binary prints it and exits with status 1.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for post-install operations
pub type FirebaseMsgResult<T> = Result<T, FirebaseMsgError>;

/// A single artifact that could not be written or copied.
#[derive(Debug)]
pub struct ArtifactFailure {
    pub file_name: &'static str,
    pub source: std::io::Error,
}

impl fmt::Display for ArtifactFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file_name, self.source)
    }
}

/// Main error type for post-install operations
#[derive(Error, Debug)]
pub enum FirebaseMsgError {
    /// Build configuration could not be read
    #[error("unable to read {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Build configuration is not valid JSON or has the wrong shape
    #[error("invalid build configuration in {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// `plugins.<plugin>` block is absent. `available` lists the plugin
    /// names that were configured.
    #[error("Firebase configuration missing under plugins.{plugin} inside of {}", config.display())]
    MissingPluginConfig {
        plugin: String,
        config: PathBuf,
        available: Vec<String>,
    },

    /// Some, but not all, credential fields are present
    #[error("Firebase configuration missing: {}", missing.join(", "))]
    PartialCredentials { missing: Vec<&'static str> },

    /// A credential field holds something other than a string
    #[error("Firebase configuration field '{key}' must be a string")]
    InvalidCredentialField { key: String },

    /// `webDir` is required once files are generated
    #[error("webDir is missing from the build configuration")]
    MissingWebDir,

    /// Files under node_modules could not be located
    #[error(
        "Unable to find required files in node_modules/{dependency} ({}). Are you sure the {dependency} dependency is installed?",
        files.join(", ")
    )]
    DependencyNotFound {
        dependency: String,
        files: Vec<&'static str>,
    },

    /// One or more artifacts failed to land in the web directory
    #[error(
        "Unable to write files to Capacitor web app directory {}: {}",
        dir.display(),
        failures.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
    )]
    WriteFailure {
        dir: PathBuf,
        failures: Vec<ArtifactFailure>,
    },
}

impl FirebaseMsgError {
    /// Short machine-readable kind, used for JSON events
    pub fn kind(&self) -> &'static str {
        match self {
            FirebaseMsgError::ConfigRead { .. } => "config_read",
            FirebaseMsgError::ConfigParse { .. } => "config_parse",
            FirebaseMsgError::MissingPluginConfig { .. } => "missing_plugin_config",
            FirebaseMsgError::PartialCredentials { .. } => "partial_credentials",
            FirebaseMsgError::InvalidCredentialField { .. } => "invalid_credential_field",
            FirebaseMsgError::MissingWebDir => "missing_web_dir",
            FirebaseMsgError::DependencyNotFound { .. } => "dependency_not_found",
            FirebaseMsgError::WriteFailure { .. } => "write_failure",
        }
    }
}

//! Post-install Result

use std::path::PathBuf;

use crate::config::ConfigWarning;
use crate::domain::value_objects::Artifact;

/// One file placed in the web directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    pub artifact: Artifact,
    pub path: PathBuf,
    /// Located dependency file this was copied from, if any
    pub copied_from: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostInstallOutcome {
    /// All artifacts written to `target_dir`
    Generated {
        target_dir: PathBuf,
        written: Vec<WrittenArtifact>,
    },
    /// No credentials configured; nothing written
    Disabled,
}

/// Result of a post-install run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostInstallResult {
    pub outcome: PostInstallOutcome,
    /// Non-fatal configuration warnings
    pub warnings: Vec<ConfigWarning>,
}

impl PostInstallResult {
    pub fn disabled(warnings: Vec<ConfigWarning>) -> Self {
        Self {
            outcome: PostInstallOutcome::Disabled,
            warnings,
        }
    }

    pub fn generated(
        target_dir: PathBuf,
        written: Vec<WrittenArtifact>,
        warnings: Vec<ConfigWarning>,
    ) -> Self {
        Self {
            outcome: PostInstallOutcome::Generated {
                target_dir,
                written,
            },
            warnings,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self.outcome, PostInstallOutcome::Disabled)
    }

    /// Artifacts written, in production order.
    pub fn artifacts(&self) -> Vec<Artifact> {
        match &self.outcome {
            PostInstallOutcome::Generated { written, .. } => {
                written.iter().map(|w| w.artifact).collect()
            }
            PostInstallOutcome::Disabled => Vec::new(),
        }
    }
}

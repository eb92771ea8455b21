//! Post-install Use Case
//!
//! Orchestrates one run:
//! 1. Find the plugin block in the build configuration
//! 2. Apply the all-or-nothing credential policy
//! 3. Locate the Firebase SDK files under `node_modules`
//! 4. Render the service worker
//! 5. Write both generated files and copy both SDK files into the web directory

use std::path::{Path, PathBuf};

use crate::config::{self, CapacitorConfig};
use crate::domain::policies::{validate_credentials, CredentialStatus};
use crate::domain::ports::FileSystem;
use crate::domain::services::{find_dependency_file, render_service_worker};
use crate::domain::value_objects::{Artifact, FIREBASE_DEPENDENCY};
use crate::error::{ArtifactFailure, FirebaseMsgError, FirebaseMsgResult};

use super::options::PostInstallOptions;
use super::result::{PostInstallResult, WrittenArtifact};

/// Content for one artifact
enum Payload {
    Generated(String),
    CopyOf(PathBuf),
}

/// Post-install use case, parameterized by its file system port.
pub struct PostInstallUseCase<FS: FileSystem> {
    file_system: FS,
}

impl<FS: FileSystem> PostInstallUseCase<FS> {
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    /// Load the build configuration from disk, then run.
    pub fn execute(&self, options: &PostInstallOptions) -> FirebaseMsgResult<PostInstallResult> {
        let config = config::load(&options.config_path())?;
        self.execute_with_config(&config, options)
    }

    /// Run against an already-parsed build configuration.
    pub fn execute_with_config(
        &self,
        capacitor: &CapacitorConfig,
        options: &PostInstallOptions,
    ) -> FirebaseMsgResult<PostInstallResult> {
        let config_path = options.config_path();

        let block = capacitor
            .plugin(&options.plugin)
            .ok_or_else(|| FirebaseMsgError::MissingPluginConfig {
                plugin: options.plugin.clone(),
                config: config_path.clone(),
                available: capacitor.plugins.keys().cloned().collect(),
            })?;

        let (raw, warnings) = config::parse_plugin_block(block, &config_path);

        let credentials = match validate_credentials(raw)? {
            CredentialStatus::Complete(credentials) => credentials,
            CredentialStatus::Disabled => return Ok(PostInstallResult::disabled(warnings)),
        };

        let web_dir = capacitor
            .web_dir
            .as_deref()
            .filter(|dir| !dir.trim().is_empty())
            .ok_or(FirebaseMsgError::MissingWebDir)?;

        let (app_js, messaging_js) = self.locate_sdk_files(&options.search_from)?;
        let service_worker = render_service_worker(credentials.messaging_sender_id());

        let plan = [
            (Artifact::ServiceWorker, Payload::Generated(service_worker)),
            (
                Artifact::FirebaseConfig,
                Payload::Generated(credentials.to_pretty_json()),
            ),
            (Artifact::FirebaseApp, Payload::CopyOf(app_js)),
            (Artifact::FirebaseMessaging, Payload::CopyOf(messaging_js)),
        ];

        let target_dir = options.target_dir(web_dir);
        let written = self.write_artifacts(&target_dir, plan)?;

        Ok(PostInstallResult::generated(target_dir, written, warnings))
    }

    fn locate_sdk_files(&self, search_from: &Path) -> FirebaseMsgResult<(PathBuf, PathBuf)> {
        let locate = |artifact: Artifact| {
            find_dependency_file(
                &self.file_system,
                search_from,
                FIREBASE_DEPENDENCY,
                artifact.file_name(),
            )
        };

        match (locate(Artifact::FirebaseApp), locate(Artifact::FirebaseMessaging)) {
            (Some(app_js), Some(messaging_js)) => Ok((app_js, messaging_js)),
            (app_js, messaging_js) => {
                let mut files = Vec::new();
                if app_js.is_none() {
                    files.push(Artifact::FirebaseApp.file_name());
                }
                if messaging_js.is_none() {
                    files.push(Artifact::FirebaseMessaging.file_name());
                }
                Err(FirebaseMsgError::DependencyNotFound {
                    dependency: FIREBASE_DEPENDENCY.to_string(),
                    files,
                })
            }
        }
    }

    /// Attempt every artifact; fail afterwards if any of them failed.
    fn write_artifacts(
        &self,
        target_dir: &Path,
        plan: [(Artifact, Payload); 4],
    ) -> FirebaseMsgResult<Vec<WrittenArtifact>> {
        let mut written = Vec::with_capacity(plan.len());
        let mut failures = Vec::new();

        for (artifact, payload) in plan {
            let path = target_dir.join(artifact.file_name());
            let (result, copied_from) = match payload {
                Payload::Generated(content) => {
                    (self.file_system.write(&path, content.as_bytes()), None)
                }
                Payload::CopyOf(source) => {
                    (self.file_system.copy(&source, &path), Some(source))
                }
            };

            match result {
                Ok(()) => written.push(WrittenArtifact {
                    artifact,
                    path,
                    copied_from,
                }),
                Err(source) => failures.push(ArtifactFailure {
                    file_name: artifact.file_name(),
                    source,
                }),
            }
        }

        if failures.is_empty() {
            Ok(written)
        } else {
            Err(FirebaseMsgError::WriteFailure {
                dir: target_dir.to_path_buf(),
                failures,
            })
        }
    }
}

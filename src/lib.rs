//! pwa-firebase-msg - post-install step for Capacitor PWA Firebase messaging
//!
//! Reads the `PWAFirebaseMsg` block of `capacitor.config.json`, checks that
//! the Firebase credentials are either fully configured or absent, and drops
//! a generated service worker, `firebase.config.json` and the two Firebase
//! SDK scripts into the web app's output directory.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    PostInstallOptions, PostInstallOutcome, PostInstallResult, PostInstallUseCase,
    WrittenArtifact,
};
pub use config::{CapacitorConfig, ConfigWarning, Verbosity};
pub use domain::entities::{Credentials, CREDENTIAL_KEYS};
pub use domain::policies::{validate_credentials, CredentialStatus};
pub use domain::services::{find_dependency_file, render_service_worker};
pub use domain::value_objects::{describe_artifacts, Artifact};
pub use error::{FirebaseMsgError, FirebaseMsgResult};
pub use infrastructure::LocalFs;

/// Run the post-install step against the local file system.
pub fn run(options: &PostInstallOptions) -> FirebaseMsgResult<PostInstallResult> {
    PostInstallUseCase::new(LocalFs::new()).execute(options)
}

//! Post-install Use Case Module
//!
//! Generates the Firebase messaging service worker for a Capacitor web app.

mod options;
mod result;
mod use_case;


pub use options::PostInstallOptions;
pub use result::{PostInstallOutcome, PostInstallResult, WrittenArtifact};
pub use use_case::PostInstallUseCase;

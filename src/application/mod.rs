//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PostInstallUseCase` - Validate configuration, locate the SDK, write artifacts

pub mod post_install;

pub use post_install::{
    PostInstallOptions, PostInstallOutcome, PostInstallResult, PostInstallUseCase,
    WrittenArtifact,
};

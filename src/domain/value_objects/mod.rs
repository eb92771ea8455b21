//! Value Objects

pub mod artifact;
pub mod path;

pub use artifact::{describe_artifacts, Artifact, FIREBASE_DEPENDENCY};

//! Business rules

pub mod credential_policy;

pub use credential_policy::{validate_credentials, CredentialStatus};

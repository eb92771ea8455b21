//! Domain Entities

pub mod credentials;

pub use credentials::{Credentials, RawCredentials, CREDENTIAL_KEYS};

//! All-or-nothing credential policy
//!
//! Either every credential field is configured and messaging is generated,
//! or none is and the plugin is treated as intentionally disabled. Anything
//! in between is a configuration error naming the missing fields.

use crate::domain::entities::{Credentials, RawCredentials, CREDENTIAL_KEYS};
use crate::error::{FirebaseMsgError, FirebaseMsgResult};

/// Result of checking a credential block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialStatus {
    /// All eight fields present
    Complete(Credentials),
    /// No field present; nothing should be generated
    Disabled,
}

pub fn validate_credentials(raw: RawCredentials) -> FirebaseMsgResult<CredentialStatus> {
    let missing = raw.missing_keys()?;

    if missing.len() == CREDENTIAL_KEYS.len() {
        return Ok(CredentialStatus::Disabled);
    }
    if !missing.is_empty() {
        return Err(FirebaseMsgError::PartialCredentials { missing });
    }

    raw.into_complete()
        .map(CredentialStatus::Complete)
        .ok_or(FirebaseMsgError::PartialCredentials {
            missing: CREDENTIAL_KEYS.to_vec(),
        })
}

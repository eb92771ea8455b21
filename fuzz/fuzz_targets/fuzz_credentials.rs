#![no_main]

use libfuzzer_sys::fuzz_target;
use pwa_firebase_msg::domain::entities::RawCredentials;
use pwa_firebase_msg::{validate_credentials, CredentialStatus, FirebaseMsgError};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = serde_json::from_slice::<RawCredentials>(data) else {
        return;
    };

    // Outcome must agree with the missing-key count
    let missing = raw.missing_keys();
    match (validate_credentials(raw), missing) {
        (Ok(CredentialStatus::Complete(_)), Ok(m)) => assert!(m.is_empty()),
        (Ok(CredentialStatus::Disabled), Ok(m)) => assert_eq!(m.len(), 8),
        (Err(FirebaseMsgError::PartialCredentials { missing }), Ok(m)) => assert_eq!(missing, m),
        (Err(FirebaseMsgError::InvalidCredentialField { .. }), Err(_)) => {}
        (outcome, m) => panic!("inconsistent: {outcome:?} vs {m:?}"),
    }
});

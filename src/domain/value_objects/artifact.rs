//! Output artifact names
//!
//! The four files the post-install step drops into the web directory. Names
//! are fixed: the generated service worker imports the two SDK files by
//! these exact relative paths.

/// npm package that ships the SDK files.
pub const FIREBASE_DEPENDENCY: &str = "firebase";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    ServiceWorker,
    FirebaseConfig,
    FirebaseApp,
    FirebaseMessaging,
}

impl Artifact {
    /// Every artifact in the order it is produced and reported.
    pub const ALL: [Artifact; 4] = [
        Artifact::ServiceWorker,
        Artifact::FirebaseConfig,
        Artifact::FirebaseApp,
        Artifact::FirebaseMessaging,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::ServiceWorker => "capacitor-pwa-firebase-msg-sw.js",
            Artifact::FirebaseConfig => "firebase.config.json",
            Artifact::FirebaseApp => "firebase-app.js",
            Artifact::FirebaseMessaging => "firebase-messaging.js",
        }
    }

    /// True for the files copied out of `node_modules/firebase`.
    pub fn is_vendored(self) -> bool {
        matches!(self, Artifact::FirebaseApp | Artifact::FirebaseMessaging)
    }
}

impl std::fmt::Display for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// "a, b, c and d" as printed in the success line.
pub fn describe_artifacts(artifacts: &[Artifact]) -> String {
    let names: Vec<&str> = artifacts.iter().map(|a| a.file_name()).collect();
    match names.split_last() {
        None => String::new(),
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_all_artifacts() {
        assert_eq!(
            describe_artifacts(&Artifact::ALL),
            "capacitor-pwa-firebase-msg-sw.js, firebase.config.json, firebase-app.js and firebase-messaging.js"
        );
    }

    #[test]
    fn describe_short_lists() {
        assert_eq!(describe_artifacts(&[]), "");
        assert_eq!(
            describe_artifacts(&[Artifact::FirebaseApp]),
            "firebase-app.js"
        );
        assert_eq!(
            describe_artifacts(&[Artifact::FirebaseApp, Artifact::FirebaseMessaging]),
            "firebase-app.js and firebase-messaging.js"
        );
    }

    #[test]
    fn only_sdk_files_are_vendored() {
        let vendored: Vec<_> = Artifact::ALL.iter().filter(|a| a.is_vendored()).collect();
        assert_eq!(vendored, vec![&Artifact::FirebaseApp, &Artifact::FirebaseMessaging]);
    }
}

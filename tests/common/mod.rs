//! Common test utilities for end-to-end CLI tests.
//!
//! `TestEnv` lays out a throwaway Capacitor project:
//!
//! ```text
//! <root>/capacitor.config.json
//! <root>/www/
//! <root>/node_modules/firebase/firebase-app.js
//! <root>/node_modules/firebase/firebase-messaging.js
//! <root>/node_modules/capacitor-pwa-firebase-msg/   <- working directory
//! ```

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{json, Value};
use tempfile::TempDir;

pub const APP_JS: &str = "/* firebase-app sdk */\nvar firebase = {};\n";
pub const MESSAGING_JS: &str = "/* firebase-messaging sdk */\nfirebase.messaging = function () {};\n";

pub const ARTIFACTS: [&str; 4] = [
    "capacitor-pwa-firebase-msg-sw.js",
    "firebase.config.json",
    "firebase-app.js",
    "firebase-messaging.js",
];

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// The eight-field credential block used across scenarios.
pub fn full_credentials() -> Value {
    json!({
        "apiKey": "a",
        "authDomain": "b",
        "databaseURL": "c",
        "projectId": "d",
        "storageBucket": "e",
        "messagingSenderId": "f",
        "appId": "g",
        "vapidKey": "h"
    })
}

pub fn full_config() -> Value {
    json!({
        "webDir": "www",
        "plugins": { "PWAFirebaseMsg": full_credentials() }
    })
}

/// Isolated project directory plus helpers to run the binary in it.
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Project with `www/`, both SDK files and the full configuration.
    pub fn installed() -> Self {
        let env = Self::empty();
        env.create_dir("www");
        env.install_firebase();
        env.write_config(&full_config());
        env
    }

    /// Project with only the package working directory.
    pub fn empty() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let env = Self {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_pwa-firebase-msg")),
        };
        env.create_dir("node_modules/capacitor-pwa-firebase-msg");
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn package_dir(&self) -> PathBuf {
        self.path("node_modules/capacitor-pwa-firebase-msg")
    }

    pub fn create_dir(&self, relative: &str) {
        fs::create_dir_all(self.path(relative)).unwrap();
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn install_firebase(&self) {
        self.write_file("node_modules/firebase/firebase-app.js", APP_JS);
        self.write_file("node_modules/firebase/firebase-messaging.js", MESSAGING_JS);
    }

    pub fn write_config(&self, config: &Value) {
        self.write_file(
            "capacitor.config.json",
            &serde_json::to_string_pretty(config).unwrap(),
        );
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn web_file_exists(&self, name: &str) -> bool {
        self.path("www").join(name).exists()
    }

    /// Run from the package directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(&self.package_dir(), args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from(&self.package_dir(), args, env_vars)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("PWA_FIREBASE_MSG_NO_COLOR", "1")
            .env_remove("PWA_FIREBASE_MSG_CONFIG")
            .env_remove("PWA_FIREBASE_MSG_PROJECT_ROOT")
            .env_remove("PWA_FIREBASE_MSG_VERBOSITY")
            .env_remove("GITHUB_ACTIONS")
            .env_remove("CI");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute pwa-firebase-msg");
        to_result(output)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

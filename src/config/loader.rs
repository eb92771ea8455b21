//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::domain::entities::{RawCredentials, CREDENTIAL_KEYS};
use crate::error::{FirebaseMsgError, FirebaseMsgResult};

use super::types::{CapacitorConfig, EnvOverrides, Verbosity};

pub const ENV_CONFIG: &str = "PWA_FIREBASE_MSG_CONFIG";
pub const ENV_PROJECT_ROOT: &str = "PWA_FIREBASE_MSG_PROJECT_ROOT";
pub const ENV_VERBOSITY: &str = "PWA_FIREBASE_MSG_VERBOSITY";

/// Plugin key that looks like a misspelled credential key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub suggestion: String,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown key '{}' in {} (did you mean '{}'?)",
            self.key,
            self.file.display(),
            self.suggestion
        )
    }
}

/// Read and parse the build configuration.
pub fn load(path: &Path) -> FirebaseMsgResult<CapacitorConfig> {
    let content = fs::read_to_string(path).map_err(|source| FirebaseMsgError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config_str(&content, path)
}

/// Parse the build configuration. `path` is only used in error messages.
pub fn parse_config_str(content: &str, path: &Path) -> FirebaseMsgResult<CapacitorConfig> {
    serde_json::from_str(content).map_err(|e| FirebaseMsgError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Take a plugin block as-is, warning about keys that look like a
/// misspelled credential key. Other extra keys pass through silently.
pub fn parse_plugin_block(
    block: &Map<String, Value>,
    config_path: &Path,
) -> (RawCredentials, Vec<ConfigWarning>) {
    let raw = RawCredentials::from(block.clone());

    let warnings = raw
        .keys()
        .filter(|key| !CREDENTIAL_KEYS.contains(key))
        .filter_map(|key| {
            suggest_key(key).map(|suggestion| ConfigWarning {
                key: key.to_string(),
                file: config_path.to_path_buf(),
                suggestion,
            })
        })
        .collect();

    (raw, warnings)
}

/// Read `PWA_FIREBASE_MSG_*` overrides from the process environment.
pub fn env_overrides() -> EnvOverrides {
    env_overrides_from(|key| std::env::var(key).ok())
}

/// Read overrides through `get_env`. Empty values are treated as unset.
pub fn env_overrides_from(get_env: impl Fn(&str) -> Option<String>) -> EnvOverrides {
    let get = |key: &str| get_env(key).filter(|v| !v.trim().is_empty());
    let mut overrides = EnvOverrides {
        config: get(ENV_CONFIG).map(PathBuf::from),
        project_root: get(ENV_PROJECT_ROOT).map(PathBuf::from),
        ..EnvOverrides::default()
    };

    if let Some(value) = get(ENV_VERBOSITY) {
        match Verbosity::parse(&value) {
            Some(v) => overrides.verbosity = Some(v),
            None => overrides.warnings.push(format!(
                "Invalid {} value '{}', expected one of: quiet, normal, verbose, debug",
                ENV_VERBOSITY, value
            )),
        }
    }

    overrides
}

fn suggest_key(unknown: &str) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for candidate in CREDENTIAL_KEYS {
        let dist = levenshtein(&unknown.to_lowercase(), &candidate.to_lowercase());
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

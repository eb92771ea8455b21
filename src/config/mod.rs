//! Configuration module
//!
//! Two sources feed a run:
//! 1. `capacitor.config.json` - web directory and the plugin credential block
//! 2. `PWA_FIREBASE_MSG_*` environment variables - path and verbosity
//!    overrides, below CLI flags and above built-in defaults

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{
    env_overrides, env_overrides_from, load, parse_config_str, parse_plugin_block,
    ConfigWarning, ENV_CONFIG, ENV_PROJECT_ROOT, ENV_VERBOSITY,
};
pub use types::{
    CapacitorConfig, EnvOverrides, Verbosity, CONFIG_FILE_NAME, DEFAULT_PLUGIN_NAME,
};

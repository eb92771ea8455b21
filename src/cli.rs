use std::path::{Path, PathBuf};

use clap::Parser;
use pwa_firebase_msg::config::EnvOverrides;
use pwa_firebase_msg::{PostInstallOptions, Verbosity};

/// Generate the Firebase messaging service worker for a Capacitor web app
#[derive(Parser, Debug)]
#[command(name = "pwa-firebase-msg")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Run from node_modules/<package> after install; the project root defaults to two levels up."
)]
pub struct Cli {
    /// Path to capacitor.config.json (default: <project-root>/capacitor.config.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Project root that webDir is relative to (default: ../..)
    #[arg(long)]
    pub project_root: Option<PathBuf>,

    /// Directory to start the node_modules lookup from (default: current directory)
    #[arg(long)]
    pub search_from: Option<PathBuf>,

    /// Plugin block name under `plugins`
    #[arg(long, default_value = pwa_firebase_msg::config::DEFAULT_PLUGIN_NAME)]
    pub plugin: String,

    /// Emit NDJSON events instead of text
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Options for this run: CLI flags over environment over defaults.
    pub fn post_install_options(&self, cwd: &Path, env: &EnvOverrides) -> PostInstallOptions {
        let mut options = PostInstallOptions::for_working_dir(cwd).with_plugin(self.plugin.clone());

        if let Some(root) = self.project_root.as_ref().or(env.project_root.as_ref()) {
            options = options.with_project_root(root);
        }
        if let Some(config) = self.config.as_ref().or(env.config.as_ref()) {
            options = options.with_config_path(config);
        }
        if let Some(start) = &self.search_from {
            options = options.with_search_from(start);
        }

        options.resolved_against(cwd)
    }

    pub fn verbosity(&self, env: &EnvOverrides) -> Verbosity {
        if self.quiet {
            return Verbosity::Quiet;
        }
        match self.verbose {
            0 => env.verbosity.unwrap_or_default(),
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

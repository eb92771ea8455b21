//! pwa-firebase-msg - Capacitor PWA Firebase messaging post-install step
//!
//! Usage: pwa-firebase-msg [OPTIONS]
//!
//! Run from `node_modules/<package>` after `npm install`. Exits 0 when the
//! service worker was generated (or messaging is not configured) and 1 on
//! any configuration, lookup or write error.

use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod ui;

use cli::Cli;
use ui::output::Reporter;

fn main() {
    let cli = Cli::parse();
    let env = pwa_firebase_msg::config::env_overrides();
    let reporter = Reporter::new(
        ui::terminal::detect_capabilities(),
        cli.verbosity(&env),
        cli.json,
    );

    if let Err(err) = run(&cli, &env, &reporter) {
        reporter.fatal(&err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, env: &pwa_firebase_msg::config::EnvOverrides, reporter: &Reporter) -> Result<()> {
    reporter.env_warnings(&env.warnings);

    let cwd = std::env::current_dir().context("unable to determine the current directory")?;
    let options = cli.post_install_options(&cwd, env);
    reporter.options(&options);

    let result = pwa_firebase_msg::run(&options)?;
    reporter.result(&result, &options.plugin);

    Ok(())
}

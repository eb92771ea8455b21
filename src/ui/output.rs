//! Console reporting
//!
//! Text mode prints bracket-tagged lines: progress and success on stdout,
//! warnings and errors on stderr. JSON mode prints one NDJSON event per
//! line on stdout instead.

use std::io::{self, Write};

use pwa_firebase_msg::config::CONFIG_FILE_NAME;
use pwa_firebase_msg::{
    describe_artifacts, ConfigWarning, FirebaseMsgError, PostInstallOptions, PostInstallOutcome,
    PostInstallResult, Verbosity,
};
use serde_json::json;

use crate::ui::ci::github_actions_error;
use crate::ui::json::write_event;
use crate::ui::terminal::TerminalCapabilities;
use crate::ui::text::ColoredText;
use crate::ui::theme::tags;

pub const REINSTALL_HINT: &str =
    "When the errors are fixed, reinstall this package: npm i capacitor-pwa-firebase-msg";

pub struct Reporter {
    caps: TerminalCapabilities,
    verbosity: Verbosity,
    json: bool,
}

impl Reporter {
    pub fn new(caps: TerminalCapabilities, verbosity: Verbosity, json: bool) -> Self {
        Self {
            caps,
            verbosity,
            json,
        }
    }

    fn color(&self) -> bool {
        self.caps.supports_color
    }

    /// Ignored environment values.
    pub fn env_warnings(&self, warnings: &[String]) {
        for warning in warnings {
            if self.json {
                self.emit(json!({ "event": "warning", "message": warning }));
            } else {
                eprintln!("{}", tagged_line(ColoredText::warning(tags::WARNING), warning, self.color()));
            }
        }
    }

    /// Resolved paths, shown at debug verbosity.
    pub fn options(&self, options: &PostInstallOptions) {
        if self.json || self.verbosity != Verbosity::Debug {
            return;
        }
        for line in option_lines(options) {
            println!("{}", tagged_line(ColoredText::dim(tags::DEBUG), &line, self.color()));
        }
    }

    pub fn result(&self, result: &PostInstallResult, plugin: &str) {
        self.config_warnings(&result.warnings);

        if self.json {
            self.emit(result_event(result, plugin));
            return;
        }
        if self.verbosity == Verbosity::Quiet {
            return;
        }
        for line in result_lines(result, plugin, self.verbosity, self.color()) {
            println!("{}", line);
        }
    }

    fn config_warnings(&self, warnings: &[ConfigWarning]) {
        for warning in warnings {
            if self.json {
                self.emit(json!({
                    "event": "warning",
                    "key": warning.key,
                    "file": warning.file.display().to_string(),
                    "suggestion": warning.suggestion,
                }));
            } else if self.verbosity != Verbosity::Quiet {
                eprintln!(
                    "{}",
                    tagged_line(ColoredText::warning(tags::WARNING), &warning.to_string(), self.color())
                );
            }
        }
    }

    pub fn fatal(&self, err: &anyhow::Error) {
        let lib_err = err.downcast_ref::<FirebaseMsgError>();

        if self.json {
            let mut event = json!({
                "event": "error",
                "kind": lib_err.map(FirebaseMsgError::kind).unwrap_or("internal"),
                "message": error_message(err),
                "hint": REINSTALL_HINT,
            });
            if let Some(FirebaseMsgError::MissingPluginConfig { available, .. }) = lib_err {
                event["available_plugins"] = json!(available);
            }
            self.emit(event);
            return;
        }

        if self.caps.is_ci && self.caps.is_github_actions {
            println!("{}", github_actions_error(&error_message(err), "pwa-firebase-msg"));
        }
        for line in error_lines(err, self.verbosity, self.color()) {
            eprintln!("{}", line);
        }
    }

    fn emit(&self, event: serde_json::Value) {
        let mut out = io::stdout().lock();
        let _ = write_event(&mut out, &event);
        let _ = out.flush();
    }
}

fn tagged_line(tag: ColoredText, message: &str, color: bool) -> String {
    format!("{} {}", tag.render(color), message)
}

fn option_lines(options: &PostInstallOptions) -> Vec<String> {
    vec![
        format!("config: {}", options.config_path().display()),
        format!("project root: {}", options.project_root.display()),
        format!("node_modules search from: {}", options.search_from.display()),
        format!("plugin: {}", options.plugin),
    ]
}

fn result_lines(
    result: &PostInstallResult,
    plugin: &str,
    verbosity: Verbosity,
    color: bool,
) -> Vec<String> {
    match &result.outcome {
        PostInstallOutcome::Generated {
            target_dir,
            written,
        } => {
            let mut lines = Vec::new();
            if verbosity >= Verbosity::Verbose {
                for item in written {
                    let detail = match &item.copied_from {
                        Some(source) => {
                            format!("{} (from {})", item.path.display(), source.display())
                        }
                        None => item.path.display().to_string(),
                    };
                    lines.push(format!("  {}", ColoredText::dim(detail).render(color)));
                }
            }
            lines.push(tagged_line(
                ColoredText::success(tags::SUCCESS),
                &format!(
                    "{} saved to {}",
                    describe_artifacts(&result.artifacts()),
                    target_dir.display()
                ),
                color,
            ));
            lines
        }
        PostInstallOutcome::Disabled => vec![tagged_line(
            ColoredText::info(tags::INFO),
            &format!(
                "Firebase messaging is not configured under plugins.{}; no files generated",
                plugin
            ),
            color,
        )],
    }
}

fn result_event(result: &PostInstallResult, plugin: &str) -> serde_json::Value {
    match &result.outcome {
        PostInstallOutcome::Generated {
            target_dir,
            written,
        } => json!({
            "event": "success",
            "target_dir": target_dir.display().to_string(),
            "files": written
                .iter()
                .map(|w| w.artifact.file_name())
                .collect::<Vec<_>>(),
        }),
        PostInstallOutcome::Disabled => json!({
            "event": "disabled",
            "plugin": plugin,
        }),
    }
}

fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<FirebaseMsgError>() {
        Some(
            lib_err @ (FirebaseMsgError::PartialCredentials { .. }
            | FirebaseMsgError::InvalidCredentialField { .. }),
        ) => format!("{}. Check your {}", lib_err, CONFIG_FILE_NAME),
        Some(lib_err) => lib_err.to_string(),
        None => format!("{:#}", err),
    }
}

fn error_lines(err: &anyhow::Error, verbosity: Verbosity, color: bool) -> Vec<String> {
    let tag = || ColoredText::error(tags::ERROR);
    let mut lines = vec![tagged_line(tag(), &error_message(err), color)];
    if verbosity >= Verbosity::Verbose {
        if let Some(detail) = error_detail(err) {
            lines.push(format!("  {}", ColoredText::dim(detail).render(color)));
        }
    }
    lines.push(tagged_line(tag(), REINSTALL_HINT, color));
    lines
}

/// Extra context shown under `-v`.
fn error_detail(err: &anyhow::Error) -> Option<String> {
    match err.downcast_ref::<FirebaseMsgError>()? {
        FirebaseMsgError::MissingPluginConfig { config, available, .. } if available.is_empty() => {
            Some(format!("no plugins are configured in {}", config.display()))
        }
        FirebaseMsgError::MissingPluginConfig { config, available, .. } => Some(format!(
            "plugins configured in {}: {}",
            config.display(),
            available.join(", ")
        )),
        _ => None,
    }
}

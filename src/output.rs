//! # Output Configuration
//!
//! Controls how the CLI prints results: emoji markers on capable terminals,
//! plain bracketed markers otherwise.
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;
use std::fmt::Write;

use crate::sync::SyncReport;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `color_flag` is the value of `--color`: "always", "never", or "auto".
    /// In auto mode colors are off when `NO_COLOR` is set, `CLICOLOR=0`,
    /// `TERM=dumb`, or stdout is not a TTY (unless `CLICOLOR_FORCE=1`).
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    pub fn plain() -> Self {
        Self { use_color: false }
    }

    /// Pick the emoji or its plain text alternative.
    pub fn marker<'a>(&self, emoji: &'a str, plain: &'a str) -> &'a str {
        if self.use_color {
            emoji
        } else {
            plain
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Human-readable summary of a sync run.
pub fn render_summary(report: &SyncReport, config: &OutputConfig) -> String {
    let mut out = String::new();
    let access = if report.authenticated {
        "token"
    } else {
        "ssh"
    };

    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "{} Mirrored {} ({})",
        config.marker("✅", "[OK]"),
        report.clone_url,
        access
    );

    match (&report.selection, &report.prune) {
        (Some(selection), Some(prune)) => {
            let _ = writeln!(out, "   {} subprojects selected", selection.len());
            let _ = writeln!(
                out,
                "   removed {} wraps, {} folders, {} overlays",
                prune.removed_wraps.len(),
                prune.removed_folders.len(),
                prune.removed_overlays.len()
            );
            if !prune.rewritten_wraps.is_empty() {
                let _ = writeln!(
                    out,
                    "   {} wraps switched to token access",
                    prune.rewritten_wraps.len()
                );
            }
            if !report.ignore_removed.is_empty() {
                let _ = writeln!(
                    out,
                    "   {} ignore patterns dropped",
                    report.ignore_removed.len()
                );
            }
            if !prune.unmatched.is_empty() {
                let _ = writeln!(
                    out,
                    "{} Not in the mirror: {}",
                    config.marker("⚠️ ", "[WARN]"),
                    prune.unmatched.join(", ")
                );
            }
        }
        _ => {
            let _ = writeln!(out, "   no selection file, all subprojects kept");
        }
    }

    if report.cache_preserved {
        let _ = writeln!(out, "   package cache preserved");
    }
    if report.staged {
        let _ = writeln!(out, "   changes staged with git add");
    }
    out
}

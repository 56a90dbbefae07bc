//! # Info Command Implementation
//!
//! Shows what a sync would use: the (redacted) clone URL, whether wraps would
//! be rewritten for token access, the selection with its resolved folder
//! names, and whether a package cache is present.
//!
//! This command is read-only. It fails exactly where a sync would fail while
//! loading its configuration, which makes it a cheap preflight check.

use anyhow::Result;
use clap::Args;

use subproject_sync::config::SyncConfig;
use subproject_sync::output::OutputConfig;
use subproject_sync::sync::Plan;

use super::ProjectArgs;

/// Show what a sync would use without changing anything
#[derive(Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Execute the `info` command.
pub fn execute(args: InfoArgs, output: &OutputConfig) -> Result<()> {
    let config = args.project.to_config()?;
    let plan = Plan::load(&config)?;
    print!("{}", render(&config, &plan, output));
    Ok(())
}

fn render(config: &SyncConfig, plan: &Plan, output: &OutputConfig) -> String {
    let mut lines = vec![
        format!(
            "{} Subprojects: {}",
            output.marker("📁", "[DIR]"),
            config.subprojects_dir.display()
        ),
        format!("   Mirror: {}", plan.display_url()),
    ];

    if plan.credentials.is_authenticated() {
        lines.push("   Access: token (selected wraps are rewritten to HTTPS)".to_string());
    } else {
        lines.push("   Access: ssh (no token file)".to_string());
    }

    match &plan.selection {
        Some(selection) => {
            lines.push(format!("   Selection: {} subprojects", selection.len()));
            for name in selection.iter() {
                let folder = config.aliases.folder_name(name);
                if folder == name {
                    lines.push(format!("     - {}", name));
                } else {
                    lines.push(format!("     - {} -> {}/", name, folder));
                }
            }
        }
        None => lines.push("   Selection: none (all subprojects kept)".to_string()),
    }

    let cache = config.package_cache_dir();
    if cache.is_dir() {
        lines.push(format!("   Package cache: {} (preserved)", cache.display()));
    } else {
        lines.push("   Package cache: none".to_string());
    }

    lines.iter().map(|line| format!("{}\n", line)).collect()
}

//! Sync command implementation
//!
//! Runs the full resync pipeline against the system `git` and prints a
//! summary, or the report as JSON with `--json`.

use anyhow::{Context, Result};
use clap::Args;

use subproject_sync::mirror::DefaultGitOperations;
use subproject_sync::output::{render_summary, OutputConfig};
use subproject_sync::sync;

use super::ProjectArgs;

/// Arguments for the sync command
#[derive(Args, Debug)]
pub struct SyncArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Do not run `git add` on the result
    #[arg(long)]
    pub no_stage: bool,

    /// Print the sync report as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the sync command
pub fn execute(args: SyncArgs, output: &OutputConfig) -> Result<()> {
    let config = args.project.to_config()?.with_stage(!args.no_stage);

    if !args.quiet && !args.json {
        println!(
            "{} Syncing {}",
            output.marker("🔄", "[SYNC]"),
            config.subprojects_dir.display()
        );
    }

    let report = sync::run(&config, &DefaultGitOperations).context("Sync failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !args.quiet {
        print!("{}", render_summary(&report, output));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::project_args;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_execute_missing_project_root() {
        let args = SyncArgs {
            project: project_args(Some(PathBuf::from("/nonexistent/project"))),
            no_stage: true,
            json: false,
            quiet: true,
        };

        let result = execute(args, &OutputConfig::plain());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Project root not found"));
    }

    #[test]
    fn test_execute_unreachable_mirror_fails() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("subprojects")).unwrap();
        fs::write(temp_dir.path().join("subprojects/keep.wrap"), "").unwrap();

        let mut project = project_args(Some(temp_dir.path().to_path_buf()));
        project.mirror_url = Some(temp_dir.path().join("no-such-mirror").display().to_string());

        let args = SyncArgs {
            project,
            no_stage: true,
            json: false,
            quiet: true,
        };

        let result = execute(args, &OutputConfig::plain());
        assert!(result.is_err());
        assert!(temp_dir.path().join("subprojects/keep.wrap").exists());
    }
}

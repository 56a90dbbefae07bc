//! # CLI Command Implementations
//!
//! Each subcommand lives in its own file with an `Args` struct derived using
//! `clap` and an `execute` function that calls into the `subproject_sync`
//! library.
//!
//! [`ProjectArgs`] holds the options every project-aware command shares and
//! turns them into a [`SyncConfig`].

pub mod aliases;
pub mod completions;
pub mod info;
pub mod sync;

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use subproject_sync::config::{MirrorRemote, SyncConfig};
use subproject_sync::defaults;

/// Options locating the project and the mirror
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR", env = "SUBPROJECT_SYNC_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Subprojects directory, relative to the project root
    #[arg(long, value_name = "DIR", default_value = defaults::SUBPROJECTS_DIR)]
    pub subprojects_dir: PathBuf,

    /// Access token file, relative to the project root
    #[arg(long, value_name = "FILE", default_value = defaults::TOKEN_FILE)]
    pub token_file: PathBuf,

    /// Selection file, relative to the project root
    #[arg(long, value_name = "FILE", default_value = defaults::SELECTION_FILE)]
    pub selection_file: PathBuf,

    /// Host serving the mirror
    #[arg(long, value_name = "HOST", default_value = defaults::MIRROR_HOST)]
    pub host: String,

    /// Account owning the mirror
    #[arg(long, value_name = "NAME", default_value = defaults::MIRROR_OWNER)]
    pub owner: String,

    /// Mirror repository name
    #[arg(long, value_name = "NAME", default_value = defaults::MIRROR_REPO)]
    pub repo: String,

    /// Clone from this URL instead of the one derived from host/owner/repo
    #[arg(long, value_name = "URL", env = "SUBPROJECT_SYNC_MIRROR_URL")]
    pub mirror_url: Option<String>,
}

impl ProjectArgs {
    /// Build the sync configuration these arguments describe.
    pub fn to_config(&self) -> Result<SyncConfig> {
        let project_root = match &self.project_root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("Failed to get current directory")?,
        };

        if !project_root.is_dir() {
            anyhow::bail!("Project root not found: {}", project_root.display());
        }

        Ok(SyncConfig::new(project_root)
            .with_subprojects_dir(&self.subprojects_dir)
            .with_token_file(&self.token_file)
            .with_selection_file(&self.selection_file)
            .with_remote(MirrorRemote::new(&self.host, &self.owner, &self.repo))
            .with_mirror_url(self.mirror_url.clone()))
    }
}

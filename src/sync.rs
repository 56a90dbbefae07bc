//! # Sync Pipeline
//!
//! Runs a complete resync of the subprojects directory:
//!
//! 1.  **Plan**: load the token and selection files (pure reads) and decide the
//!     clone URL.
//! 2.  **Park cache**: move `packagecache` out of the way.
//! 3.  **Fetch**: replace the subprojects directory with a stripped clone of
//!     the mirror.
//! 4.  **Prune** and **reconcile** the ignore-list, only when a selection file
//!     exists.
//! 5.  **Restore cache**.
//! 6.  **Stage** the subprojects directory with `git add`.
//!
//! Every step after planning is fatal on failure. The parked cache is put
//! back on every exit path, see [`ScratchCache`].

use std::path::Path;

use log::info;
use serde::Serialize;

use crate::config::SyncConfig;
use crate::credentials::{redact_url, Credentials};
use crate::error::Result;
use crate::ignore_list::IgnoreReconciler;
use crate::mirror::{self, GitOperations};
use crate::prune::{self, PruneReport};
use crate::scratch::ScratchCache;
use crate::selection::Selection;

/// Inputs of a sync run, resolved before anything is modified.
#[derive(Debug, Clone)]
pub struct Plan {
    pub credentials: Credentials,
    pub selection: Option<Selection>,
    clone_url: String,
}

impl Plan {
    /// Read the token and selection files for `config`.
    pub fn load(config: &SyncConfig) -> Result<Self> {
        let credentials = Credentials::load(&config.token_file)?;
        let selection = Selection::load(&config.selection_file)?;
        let clone_url = config
            .mirror_url_override
            .clone()
            .unwrap_or_else(|| credentials.clone_url(&config.remote));

        Ok(Self {
            credentials,
            selection,
            clone_url,
        })
    }

    /// URL the mirror is cloned from. May embed the token.
    pub fn clone_url(&self) -> &str {
        &self.clone_url
    }

    /// Clone URL safe for display.
    pub fn display_url(&self) -> String {
        redact_url(&self.clone_url)
    }
}

/// Outcome of a sync run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncReport {
    /// Redacted clone URL.
    pub clone_url: String,
    pub authenticated: bool,
    /// Selected canonical names, `None` when everything is kept.
    pub selection: Option<Vec<String>>,
    pub cache_preserved: bool,
    pub prune: Option<PruneReport>,
    /// Folders whose ignore patterns were dropped.
    pub ignore_removed: Vec<String>,
    pub staged: bool,
}

/// Run the whole pipeline for `config`.
pub fn run(config: &SyncConfig, git: &dyn GitOperations) -> Result<SyncReport> {
    let plan = Plan::load(config)?;
    execute(config, &plan, git)
}

/// Run the modifying steps of the pipeline for an already loaded `plan`.
pub fn execute(config: &SyncConfig, plan: &Plan, git: &dyn GitOperations) -> Result<SyncReport> {
    let reconciler = IgnoreReconciler::new()?;
    let mut report = SyncReport {
        clone_url: plan.display_url(),
        authenticated: plan.credentials.is_authenticated(),
        selection: plan
            .selection
            .as_ref()
            .map(|s| s.iter().map(str::to_string).collect()),
        ..SyncReport::default()
    };

    let cache = ScratchCache::park(&config.package_cache_dir(), &config.project_root)?;
    report.cache_preserved = cache.is_parked();

    mirror::fetch(git, plan.clone_url(), &config.subprojects_dir)?;

    if let Some(selection) = &plan.selection {
        let rewrite = plan.credentials.wrap_rewrite(&config.remote);
        let pruned = prune::prune(
            &config.subprojects_dir,
            selection,
            &config.aliases,
            rewrite.as_ref(),
        )?;
        report.prune = Some(pruned);

        let folders = selection.resolve_folders(&config.aliases);
        if let Some(reconciled) = reconciler.reconcile_file(&config.ignore_file(), &folders)? {
            report.ignore_removed = reconciled.removed;
        }
    } else {
        info!("No selection file, keeping every subproject");
    }

    cache.restore()?;

    if config.stage {
        let path = relative_to(&config.subprojects_dir, &config.project_root);
        git.stage(&config.project_root, path)?;
        report.staged = true;
        info!("Staged {}", path.display());
    }

    Ok(report)
}

fn relative_to<'a>(path: &'a Path, base: &Path) -> &'a Path {
    path.strip_prefix(base).unwrap_or(path)
}

//! # Mirror Fetching
//!
//! Replaces the local subprojects directory with a fresh clone of the mirror
//! repository. The clone is stripped of its own `.git` directory, since the
//! vendored tree is tracked by the enclosing project, and of the `private`
//! folder, which is not meant to be redistributed.
//!
//! ## Design
//!
//! Git access goes through the [`GitOperations`] trait so the rest of the
//! pipeline can run against a fake mirror in tests. [`DefaultGitOperations`]
//! shells out to the system `git`.
//!
//! The clone is made into a staging directory next to the target and only
//! swapped in once it succeeded and has been stripped. A failed clone leaves
//! the previous tree untouched.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::credentials::redact_url;
use crate::defaults;
use crate::error::{Error, Result};

const STAGING_PREFIX: &str = ".subproject-sync-incoming-";

/// Trait for git operations - allows mocking in tests
pub trait GitOperations {
    /// Clone `url` into `target_dir`, which does not exist yet.
    fn clone_repo(&self, url: &str, target_dir: &Path) -> Result<()>;

    /// Register `path` with the index of the work tree at `work_tree`.
    fn stage(&self, work_tree: &Path, path: &Path) -> Result<()>;
}

/// The default implementation of `GitOperations`, which uses the system's
/// `git` command.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultGitOperations;

impl GitOperations for DefaultGitOperations {
    fn clone_repo(&self, url: &str, target_dir: &Path) -> Result<()> {
        crate::git::clone(url, target_dir)
    }

    fn stage(&self, work_tree: &Path, path: &Path) -> Result<()> {
        crate::git::add(work_tree, path)
    }
}

/// Replace `subprojects_dir` with a stripped clone of `url`.
pub fn fetch(git: &dyn GitOperations, url: &str, subprojects_dir: &Path) -> Result<()> {
    let parent = match subprojects_dir.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let name = subprojects_dir
        .file_name()
        .unwrap_or(defaults::SUBPROJECTS_DIR.as_ref());

    let staging = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(parent)
        .map_err(|e| Error::fs(parent, e))?;
    let incoming = staging.path().join(name);

    info!("Cloning {}", redact_url(url));
    git.clone_repo(url, &incoming)?;

    strip(&incoming)?;
    replace(&incoming, subprojects_dir)?;

    staging.close().map_err(|e| Error::fs(parent, e))?;
    Ok(())
}

/// Remove the clone's version-control metadata and private content.
fn strip(tree: &Path) -> Result<()> {
    for entry in [".git", defaults::PRIVATE_DIR] {
        let path = tree.join(entry);
        if path.is_dir() {
            fs::remove_dir_all(&path).map_err(|e| Error::fs(&path, e))?;
            debug!("Removed {}", path.display());
        } else if path.exists() {
            // `.git` is a file for worktrees and submodules.
            fs::remove_file(&path).map_err(|e| Error::fs(&path, e))?;
            debug!("Removed {}", path.display());
        }
    }
    Ok(())
}

fn replace(incoming: &Path, target: &Path) -> Result<()> {
    if target.exists() {
        fs::remove_dir_all(target).map_err(|e| Error::fs(target, e))?;
        debug!("Removed previous {}", target.display());
    }
    fs::rename(incoming, target).map_err(|e| Error::fs(target, e))?;
    info!("Mirror installed at {}", target.display());
    Ok(())
}

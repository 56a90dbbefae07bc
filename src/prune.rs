//! # Selection Pruning
//!
//! Cuts a freshly mirrored subprojects tree down to the selected subprojects.
//! Three kinds of artifact are filtered, each keyed differently:
//!
//! | artifact                   | location                      | key            |
//! |----------------------------|-------------------------------|----------------|
//! | wrap file                  | `<root>/<name>.wrap`          | canonical name |
//! | vendored folder            | `<root>/<folder>/`            | folder alias   |
//! | package-file overlay       | `<root>/packagefiles/<name>/` | canonical name |
//!
//! `packagefiles` itself is never removed by name; its children are filtered
//! and the directory is dropped only once it is empty.
//!
//! Retained wrap files get their mirror URLs rewritten when a [`UrlRewrite`]
//! is supplied.
//!
//! Selection entries the mirror does not carry are tolerated. They are listed
//! in [`PruneReport::unmatched`] so typos show up in the summary.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;

use crate::aliases::AliasTable;
use crate::credentials::UrlRewrite;
use crate::defaults;
use crate::error::{Error, Result};
use crate::selection::Selection;

/// Everything the pruner removed or changed, by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PruneReport {
    pub kept_wraps: Vec<String>,
    pub removed_wraps: Vec<String>,
    pub rewritten_wraps: Vec<String>,
    pub kept_folders: Vec<String>,
    pub removed_folders: Vec<String>,
    pub kept_overlays: Vec<String>,
    pub removed_overlays: Vec<String>,
    pub removed_package_files_dir: bool,
    /// Selected names with no wrap, folder or overlay in the mirror.
    pub unmatched: Vec<String>,
}

/// Prune `subprojects_dir` down to `selection`.
pub fn prune(
    subprojects_dir: &Path,
    selection: &Selection,
    aliases: &AliasTable,
    rewrite: Option<&UrlRewrite>,
) -> Result<PruneReport> {
    let folders = selection.resolve_folders(aliases);
    let mut report = PruneReport::default();

    prune_wraps(subprojects_dir, selection, rewrite, &mut report)?;
    prune_folders(subprojects_dir, &folders, &mut report)?;
    prune_overlays(
        &subprojects_dir.join(defaults::PACKAGE_FILES_DIR),
        selection,
        &mut report,
    )?;

    for name in selection.iter() {
        let folder = aliases.folder_name(name);
        let found = report.kept_wraps.iter().any(|w| w == name)
            || report.kept_folders.iter().any(|f| f == folder)
            || report.kept_overlays.iter().any(|o| o == name);
        if !found {
            debug!("Selected subproject '{}' is not in the mirror", name);
            report.unmatched.push(name.to_string());
        }
    }

    info!(
        "Pruned {} wraps, {} folders, {} overlays",
        report.removed_wraps.len(),
        report.removed_folders.len(),
        report.removed_overlays.len()
    );
    Ok(report)
}

/// Pass 1: wrap files at the root, keyed by stem.
fn prune_wraps(
    root: &Path,
    selection: &Selection,
    rewrite: Option<&UrlRewrite>,
    report: &mut PruneReport,
) -> Result<()> {
    for path in sorted_entries(root)? {
        let is_wrap = path.extension().and_then(|e| e.to_str()) == Some(defaults::WRAP_EXTENSION);
        if !is_wrap || !path.is_file() {
            continue;
        }
        let stem = entry_name(path.file_stem());

        if !selection.contains(&stem) {
            remove_path(&path)?;
            debug!("Removed wrap {}", stem);
            report.removed_wraps.push(stem);
            continue;
        }

        if let Some(rewrite) = rewrite {
            let content = fs::read_to_string(&path).map_err(|e| Error::fs(&path, e))?;
            if let Some(rewritten) = rewrite.apply(&content) {
                fs::write(&path, rewritten).map_err(|e| Error::fs(&path, e))?;
                debug!("Rewrote mirror URLs in {}", path.display());
                report.rewritten_wraps.push(stem.clone());
            }
        }
        report.kept_wraps.push(stem);
    }
    Ok(())
}

/// Pass 2: top-level directories, keyed by folder alias.
fn prune_folders(root: &Path, folders: &BTreeSet<String>, report: &mut PruneReport) -> Result<()> {
    for path in sorted_entries(root)? {
        if !path.is_dir() {
            continue;
        }
        let name = entry_name(path.file_name());
        if name == defaults::PACKAGE_FILES_DIR {
            continue;
        }

        if folders.contains(&name) {
            report.kept_folders.push(name);
        } else {
            remove_path(&path)?;
            debug!("Removed folder {}", name);
            report.removed_folders.push(name);
        }
    }
    Ok(())
}

/// Pass 3: children of `packagefiles`, keyed by canonical name.
fn prune_overlays(package_files: &Path, selection: &Selection, report: &mut PruneReport) -> Result<()> {
    if !package_files.is_dir() {
        return Ok(());
    }

    for path in sorted_entries(package_files)? {
        let name = entry_name(path.file_name());
        if selection.contains(&name) {
            report.kept_overlays.push(name);
        } else {
            remove_path(&path)?;
            debug!("Removed overlay {}", name);
            report.removed_overlays.push(name);
        }
    }

    if report.kept_overlays.is_empty() {
        fs::remove_dir(package_files).map_err(|e| Error::fs(package_files, e))?;
        debug!("Removed empty {}", package_files.display());
        report.removed_package_files_dir = true;
    }
    Ok(())
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| Error::fs(dir, e))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::fs(dir, e))?;
    entries.sort();
    Ok(entries)
}

fn entry_name(name: Option<&std::ffi::OsStr>) -> String {
    name.map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Remove a file, symlink or directory tree without following symlinks.
fn remove_path(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| Error::fs(path, e))?;
    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|e| Error::fs(path, e))
}

//! # Ignore-List Reconciliation
//!
//! The mirror ships a `.gitignore` with one `/<folder>-*/` line per vendored
//! subproject, covering the unpacked source trees Meson creates next to the
//! wrap files. After pruning, lines for folders that are gone are removed so
//! the ignore-list only describes what the project actually vendors.
//!
//! Lines are trimmed. Lines of any other shape pass through unchanged and in
//! order. Trailing blank lines are dropped so repeated runs converge.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, warn};
use regex::Regex;

use crate::error::{Error, Result};

const FOLDER_PATTERN: &str = r"^/(.*)-\*/$";

/// Result of reconciling an ignore-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    /// New file content, one `\n` per line.
    pub content: String,
    /// Folder captures whose lines were dropped.
    pub removed: Vec<String>,
}

/// Filters folder lines of an ignore-list against a set of folder names.
#[derive(Debug, Clone)]
pub struct IgnoreReconciler {
    pattern: Regex,
}

impl IgnoreReconciler {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(FOLDER_PATTERN).map_err(Error::Regex)?;
        Ok(Self { pattern })
    }

    /// Folder named by `line` if it has the `/<folder>-*/` shape.
    pub fn folder_of<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(line)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
    }

    /// Reconcile ignore-list `content` against `folders`.
    pub fn reconcile(&self, content: &str, folders: &BTreeSet<String>) -> Reconciled {
        let mut kept: Vec<&str> = Vec::new();
        let mut removed = Vec::new();

        for line in content.lines().map(str::trim) {
            match self.folder_of(line) {
                Some(folder) if !folders.contains(folder) => removed.push(folder.to_string()),
                _ => kept.push(line),
            }
        }

        while kept.last().is_some_and(|line| line.is_empty()) {
            kept.pop();
        }

        let content = kept.iter().map(|line| format!("{}\n", line)).collect();
        Reconciled { content, removed }
    }

    /// Reconcile the ignore-list at `path` in place.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    pub fn reconcile_file(
        &self,
        path: &Path,
        folders: &BTreeSet<String>,
    ) -> Result<Option<Reconciled>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("No ignore-list at {}, skipping", path.display());
                return Ok(None);
            }
            Err(e) => return Err(Error::fs(path, e)),
        };

        let reconciled = self.reconcile(&content, folders);
        fs::write(path, &reconciled.content).map_err(|e| Error::fs(path, e))?;
        debug!(
            "Dropped {} ignore patterns from {}",
            reconciled.removed.len(),
            path.display()
        );
        Ok(Some(reconciled))
    }
}

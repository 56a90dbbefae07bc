//! # Scratch Cache Holder
//!
//! The mirror fetch deletes the whole subprojects directory, including the
//! package download cache that Meson keeps at `subprojects/packagecache`. That
//! cache can be large and slow to rebuild, so it is moved aside for the
//! duration of the sync and moved back afterwards.
//!
//! [`ScratchCache`] is a guard: parking happens on construction and restoring
//! happens either through [`ScratchCache::restore`] or, on early return, in
//! `Drop`. The scratch directory is created inside the project root so both
//! moves are plain renames on the same filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};
use tempfile::TempDir;

use crate::error::{Error, Result};

const SCRATCH_PREFIX: &str = ".subproject-sync-scratch-";

/// Guard holding the package cache outside the subprojects tree.
#[derive(Debug)]
pub struct ScratchCache {
    original: PathBuf,
    parked: Option<PathBuf>,
    scratch: Option<TempDir>,
}

impl ScratchCache {
    /// Move `cache_dir`, if it exists, into a fresh scratch directory under
    /// `scratch_parent`.
    pub fn park(cache_dir: &Path, scratch_parent: &Path) -> Result<Self> {
        let scratch = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempdir_in(scratch_parent)
            .map_err(|e| Error::Cache {
                message: format!(
                    "Failed to create scratch directory in '{}': {}",
                    scratch_parent.display(),
                    e
                ),
            })?;

        let parked = if cache_dir.exists() {
            let name = cache_dir.file_name().unwrap_or(cache_dir.as_os_str());
            let target = scratch.path().join(name);
            fs::rename(cache_dir, &target).map_err(|e| Error::Cache {
                message: format!(
                    "Failed to move '{}' to '{}': {}",
                    cache_dir.display(),
                    target.display(),
                    e
                ),
            })?;
            info!("Parked package cache at {}", target.display());
            Some(target)
        } else {
            debug!("No package cache at {}", cache_dir.display());
            None
        };

        Ok(Self {
            original: cache_dir.to_path_buf(),
            parked,
            scratch: Some(scratch),
        })
    }

    /// Whether a cache was found and moved aside.
    pub fn is_parked(&self) -> bool {
        self.parked.is_some()
    }

    /// Current location of the parked cache.
    pub fn parked_path(&self) -> Option<&Path> {
        self.parked.as_deref()
    }

    /// Move the cache back and discard the scratch directory.
    pub fn restore(mut self) -> Result<()> {
        self.restore_in_place()?;
        self.discard_scratch();
        Ok(())
    }

    fn restore_in_place(&mut self) -> Result<()> {
        let Some(parked) = self.parked.take() else {
            return Ok(());
        };

        if let Err(e) = self.move_back(&parked) {
            self.parked = Some(parked);
            return Err(e);
        }
        info!("Restored package cache to {}", self.original.display());
        Ok(())
    }

    fn move_back(&self, parked: &Path) -> Result<()> {
        if self.original.is_dir() {
            warn!(
                "Replacing mirrored {} with the local package cache",
                self.original.display()
            );
            fs::remove_dir_all(&self.original).map_err(|e| Error::fs(&self.original, e))?;
        } else if self.original.exists() {
            fs::remove_file(&self.original).map_err(|e| Error::fs(&self.original, e))?;
        }

        // A failed fetch may have left no subprojects directory behind.
        if let Some(parent) = self.original.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::fs(parent, e))?;
        }

        fs::rename(parked, &self.original).map_err(|e| Error::Cache {
            message: format!(
                "Failed to move '{}' back to '{}': {}",
                parked.display(),
                self.original.display(),
                e
            ),
        })
    }

    fn discard_scratch(&mut self) {
        let Some(scratch) = self.scratch.take() else {
            return;
        };

        if let Some(parked) = &self.parked {
            // Never delete a cache we failed to put back.
            #[allow(deprecated)]
            let kept = scratch.into_path();
            error!(
                "Package cache could not be restored and was left at {} (scratch {})",
                parked.display(),
                kept.display()
            );
        } else if let Err(e) = scratch.close() {
            warn!("Failed to remove scratch directory: {}", e);
        }
    }
}

impl Drop for ScratchCache {
    fn drop(&mut self) {
        if let Err(e) = self.restore_in_place() {
            error!("{}", e);
        }
        self.discard_scratch();
    }
}

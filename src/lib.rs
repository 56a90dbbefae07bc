//! # Subproject Sync Library
//!
//! Keeps a project's vendored Meson subprojects in step with a curated mirror
//! repository. A sync replaces the local `subprojects/` directory with a fresh
//! clone of the mirror, then prunes it down to the subprojects listed in the
//! project's `subprojects.txt`.
//!
//! ## Quick Example
//!
//! ```
//! use std::collections::BTreeSet;
//! use subproject_sync::aliases::AliasTable;
//! use subproject_sync::ignore_list::IgnoreReconciler;
//! use subproject_sync::selection::Selection;
//!
//! let selection = Selection::parse("gtest\nzlib\n");
//! let folders = selection.resolve_folders(&AliasTable::builtin());
//! assert!(folders.contains("googletest"));
//!
//! let reconciler = IgnoreReconciler::new().unwrap();
//! let result = reconciler.reconcile("/googletest-*/\n/xz-*/\n", &folders);
//! assert_eq!(result.content, "/googletest-*/\n");
//! ```
//!
//! ## Core Concepts
//!
//! - **Aliases (`aliases`)**: canonical subproject names that the mirror
//!   vendors under a different folder name.
//! - **Configuration (`config`, `credentials`, `selection`)**: project paths,
//!   mirror coordinates, the optional access token and the optional selection.
//! - **Mirror (`mirror`, `git`)**: cloning the mirror and stripping it of
//!   metadata that must not be vendored.
//! - **Pruning (`prune`, `ignore_list`)**: removing unselected wraps, folders
//!   and overlays, and the matching ignore patterns.
//! - **Scratch cache (`scratch`)**: keeping the package download cache alive
//!   across the destructive resync.
//!
//! ## Execution Flow
//!
//! The entry point is [`sync::run`]:
//!
//! 1.  Load the token and selection files.
//! 2.  Park the package cache.
//! 3.  Fetch the mirror.
//! 4.  Prune and reconcile the ignore-list (with a selection only).
//! 5.  Restore the package cache.
//! 6.  Stage the result with `git add`.

pub mod aliases;
pub mod config;
pub mod credentials;
pub mod defaults;
pub mod error;
pub mod git;
pub mod ignore_list;
pub mod mirror;
pub mod output;
pub mod prune;
pub mod scratch;
pub mod selection;
pub mod sync;

//! # Sync Configuration
//!
//! A sync run is configured entirely by the project layout, two optional
//! project-local files and the coordinates of the mirror repository:
//!
//! - `<root>/token.txt`: access token. Its presence switches cloning to HTTPS
//!   with embedded credentials and enables wrap URL rewriting.
//! - `<root>/subprojects.txt`: one canonical subproject name per line. Its
//!   presence enables pruning.
//!
//! [`SyncConfig`] carries the resolved paths. The CLI builds it from flags and
//! environment variables; everything else in the crate takes it by reference.

use std::path::{Path, PathBuf};

use crate::aliases::AliasTable;
use crate::defaults;

/// Coordinates of the mirror repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorRemote {
    pub host: String,
    pub owner: String,
    pub repo: String,
}

impl MirrorRemote {
    pub fn new(host: impl Into<String>, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Unauthenticated SSH prefix for every repository of the owner,
    /// e.g. `git@github.com:owner/`.
    pub fn ssh_prefix(&self) -> String {
        format!("git@{}:{}/", self.host, self.owner)
    }

    /// HTTPS prefix for every repository of the owner with `token` embedded
    /// as basic-auth credentials.
    pub fn https_prefix(&self, token: &str) -> String {
        format!("https://{}:{}@{}/{}/", self.owner, token, self.host, self.owner)
    }

    /// SSH clone URL of the mirror.
    pub fn ssh_url(&self) -> String {
        format!("{}{}.git", self.ssh_prefix(), self.repo)
    }

    /// HTTPS clone URL of the mirror with `token` embedded.
    pub fn https_url(&self, token: &str) -> String {
        format!("{}{}.git", self.https_prefix(token), self.repo)
    }
}

impl Default for MirrorRemote {
    fn default() -> Self {
        Self::new(
            defaults::MIRROR_HOST,
            defaults::MIRROR_OWNER,
            defaults::MIRROR_REPO,
        )
    }
}

/// Resolved configuration for a single sync run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Root of the enclosing project; git commands run here.
    pub project_root: PathBuf,
    /// Vendored subprojects directory.
    pub subprojects_dir: PathBuf,
    /// Optional access token file.
    pub token_file: PathBuf,
    /// Optional selection file.
    pub selection_file: PathBuf,
    /// Mirror repository coordinates.
    pub remote: MirrorRemote,
    /// Clone URL used instead of the one derived from `remote`.
    pub mirror_url_override: Option<String>,
    /// Canonical name to folder name mapping.
    pub aliases: AliasTable,
    /// Register the result with `git add` once done.
    pub stage: bool,
}

impl SyncConfig {
    /// Configuration with every default applied under `project_root`.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        Self {
            subprojects_dir: project_root.join(defaults::SUBPROJECTS_DIR),
            token_file: project_root.join(defaults::TOKEN_FILE),
            selection_file: project_root.join(defaults::SELECTION_FILE),
            project_root,
            remote: MirrorRemote::default(),
            mirror_url_override: None,
            aliases: AliasTable::builtin(),
            stage: true,
        }
    }

    /// Place the subprojects directory at `path`, relative to the project root
    /// unless absolute.
    pub fn with_subprojects_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.subprojects_dir = self.project_root.join(path);
        self
    }

    pub fn with_token_file(mut self, path: impl AsRef<Path>) -> Self {
        self.token_file = self.project_root.join(path);
        self
    }

    pub fn with_selection_file(mut self, path: impl AsRef<Path>) -> Self {
        self.selection_file = self.project_root.join(path);
        self
    }

    pub fn with_remote(mut self, remote: MirrorRemote) -> Self {
        self.remote = remote;
        self
    }

    pub fn with_mirror_url(mut self, url: Option<String>) -> Self {
        self.mirror_url_override = url;
        self
    }

    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn with_stage(mut self, stage: bool) -> Self {
        self.stage = stage;
        self
    }

    /// Location of the package download cache.
    pub fn package_cache_dir(&self) -> PathBuf {
        self.subprojects_dir.join(defaults::PACKAGE_CACHE_DIR)
    }

    /// Location of the overlay directory.
    pub fn package_files_dir(&self) -> PathBuf {
        self.subprojects_dir.join(defaults::PACKAGE_FILES_DIR)
    }

    /// Location of the generated ignore-list.
    pub fn ignore_file(&self) -> PathBuf {
        self.subprojects_dir.join(defaults::IGNORE_FILE)
    }
}

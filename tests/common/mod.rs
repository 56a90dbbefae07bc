//! Shared test utilities for the CLI E2E tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//! ```

use assert_fs::prelude::*;
use std::path::Path;
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::{git, MirrorFixture, ProjectFixture};
}

/// A minimal mirror layout: `(path, content)` pairs.
#[allow(dead_code)]
pub const MIRROR_FILES: &[(&str, &str)] = &[
    (
        "gtest.wrap",
        "[wrap-git]\nurl = git@github.com:Fingolfin1196/googletest.git\n",
    ),
    (
        "zlib.wrap",
        "[wrap-git]\nurl = git@github.com:Fingolfin1196/zlib.git\n",
    ),
    ("liblzma.wrap", "[wrap-file]\nsource_url = https://example.com/xz.tar.gz\n"),
    ("googletest/meson.build", "project('gtest')\n"),
    ("zlib/meson.build", "project('zlib')\n"),
    ("xz/meson.build", "project('xz')\n"),
    ("packagefiles/zlib/meson.build", "project('zlib')\n"),
    ("packagefiles/liblzma/meson.build", "project('xz')\n"),
    ("private/internal.txt", "do not vendor\n"),
    (".gitignore", "/googletest-*/\n/zlib-*/\n/xz-*/\n/packagecache/\n"),
];

/// Run git in `dir`, panicking on failure.
#[allow(dead_code)]
pub fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .current_dir(dir)
        .args(args)
        .env("GIT_AUTHOR_NAME", "test")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_NAME", "test")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .status()
        .expect("failed to run git");
    assert!(status.success(), "git {:?} failed", args);
}

/// A local git repository standing in for the mirror.
#[allow(dead_code)]
pub struct MirrorFixture {
    pub temp: assert_fs::TempDir,
}

#[allow(dead_code)]
impl MirrorFixture {
    pub fn new() -> Self {
        let temp = assert_fs::TempDir::new().unwrap();
        for (path, content) in MIRROR_FILES {
            temp.child(path).write_str(content).unwrap();
        }
        git(temp.path(), &["init", "--quiet"]);
        git(temp.path(), &["add", "."]);
        git(temp.path(), &["commit", "--quiet", "-m", "mirror"]);
        Self { temp }
    }

    pub fn url(&self) -> String {
        self.temp.path().display().to_string()
    }
}

/// A project directory, optionally a git work tree.
#[allow(dead_code)]
pub struct ProjectFixture {
    pub temp: assert_fs::TempDir,
}

#[allow(dead_code)]
impl ProjectFixture {
    pub fn new() -> Self {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("subprojects").create_dir_all().unwrap();
        Self { temp }
    }

    pub fn with_git(self) -> Self {
        git(self.temp.path(), &["init", "--quiet"]);
        self
    }

    pub fn with_selection(self, content: &str) -> Self {
        self.temp.child("subprojects.txt").write_str(content).unwrap();
        self
    }

    pub fn with_token(self, token: &str) -> Self {
        self.temp.child("token.txt").write_str(token).unwrap();
        self
    }

    pub fn with_cache(self) -> Self {
        self.temp
            .child("subprojects/packagecache/zlib-1.3.tar.gz")
            .write_str("cached archive")
            .unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp.child(path)
    }
}

//! Canonical subproject names and the folder names the mirror uses for them.
//!
//! Most subprojects are vendored under a folder with the same name as their
//! wrap file. A handful use the upstream project's own directory name instead;
//! the [`AliasTable`] records those exceptions. Lookups for names without an
//! entry return the name unchanged.

use std::collections::BTreeSet;

/// Aliases shipped with the tool, as `(canonical, folder)` pairs.
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("boost-preprocessor", "preprocessor-boost"),
    ("combblas", "CombBLAS"),
    ("google-benchmark", "benchmark"),
    ("gtest", "googletest"),
    ("liblzma", "xz"),
    ("nlohmann-json", "json"),
    ("suitesparse", "SuiteSparse"),
];

/// Read-only mapping from canonical subproject name to mirror folder name.
#[derive(Debug, Clone, Copy)]
pub struct AliasTable {
    entries: &'static [(&'static str, &'static str)],
}

impl AliasTable {
    /// The table of aliases used by the mirror.
    pub const fn builtin() -> Self {
        Self {
            entries: BUILTIN_ALIASES,
        }
    }

    /// Build a table from a static slice of `(canonical, folder)` pairs.
    pub const fn from_static(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Folder name used inside the mirror for `canonical`.
    pub fn folder_name<'a>(&self, canonical: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(name, _)| *name == canonical)
            .map(|(_, folder)| *folder)
            .unwrap_or(canonical)
    }

    /// Map every canonical name through the table.
    pub fn resolve<'a, I>(&self, names: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        names
            .into_iter()
            .map(|name| self.folder_name(name).to_string())
            .collect()
    }

    /// Iterate over the explicit aliases.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}

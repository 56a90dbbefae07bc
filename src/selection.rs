//! Loading the set of subprojects a project keeps.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use crate::aliases::AliasTable;
use crate::error::{Error, Result};

/// Canonical names of the subprojects to keep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    names: BTreeSet<String>,
}

impl Selection {
    /// Load the selection file at `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist, meaning every
    /// subproject is kept.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let selection = Self::parse(&content);
                debug!(
                    "Loaded {} selected subprojects from {}",
                    selection.len(),
                    path.display()
                );
                Ok(Some(selection))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(Error::ConfigRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// One name per line; surrounding whitespace is trimmed and blank lines
    /// are skipped.
    pub fn parse(content: &str) -> Self {
        content.lines().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Folder names inside the mirror for the selected subprojects.
    pub fn resolve_folders(&self, aliases: &AliasTable) -> BTreeSet<String> {
        aliases.resolve(&self.names)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for Selection {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

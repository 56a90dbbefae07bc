//! Default values for subproject-sync configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

/// Directory, relative to the project root, that holds the vendored subprojects.
pub const SUBPROJECTS_DIR: &str = "subprojects";

/// Optional token file at the project root.
pub const TOKEN_FILE: &str = "token.txt";

/// Optional selection file at the project root.
pub const SELECTION_FILE: &str = "subprojects.txt";

/// Package download cache kept inside the subprojects directory.
pub const PACKAGE_CACHE_DIR: &str = "packagecache";

/// Shared overlay directory inside the subprojects directory.
pub const PACKAGE_FILES_DIR: &str = "packagefiles";

/// Mirror subfolder that is never redistributed.
pub const PRIVATE_DIR: &str = "private";

/// Generated ignore-list inside the subprojects directory.
pub const IGNORE_FILE: &str = ".gitignore";

/// Extension of wrap descriptor files.
pub const WRAP_EXTENSION: &str = "wrap";

/// Host serving the mirror repository.
pub const MIRROR_HOST: &str = "github.com";

/// Account owning the mirror repository.
pub const MIRROR_OWNER: &str = "Fingolfin1196";

/// Name of the mirror repository.
pub const MIRROR_REPO: &str = "tlaxcaltin";

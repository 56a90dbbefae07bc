use std::path::Path;
use std::process::Command;

use log::debug;

use crate::credentials::redact_url;
use crate::error::Error;

/// Clone `url` into `target_dir`.
///
/// This uses the system git command, which automatically handles:
/// - SSH keys from ~/.ssh/
/// - Git credential helpers
/// - Tokens embedded in HTTPS URLs
///
/// `target_dir` must not exist or be empty. The URL never appears unredacted
/// in the returned error.
pub fn clone(url: &str, target_dir: &Path) -> Result<(), Error> {
    let shown_url = redact_url(url);
    debug!("git clone {} {}", shown_url, target_dir.display());

    let output = Command::new("git")
        .args(["clone", "--quiet", url])
        .arg(target_dir)
        .output()
        .map_err(|e| Error::GitClone {
            url: shown_url.clone(),
            message: e.to_string(),
            hint: Some("Make sure git is installed and on PATH".to_string()),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).replace(url, &shown_url);

        let hint = if stderr.contains("Authentication failed")
            || stderr.contains("Permission denied")
            || stderr.contains("Could not read from remote repository")
        {
            Some(
                "Check that your SSH key is loaded, or put a valid access token in token.txt"
                    .to_string(),
            )
        } else {
            None
        };

        return Err(Error::GitClone {
            url: shown_url,
            message: stderr.trim().to_string(),
            hint,
        });
    }

    Ok(())
}

/// Stage `path` in the git work tree rooted at `work_tree`.
pub fn add(work_tree: &Path, path: &Path) -> Result<(), Error> {
    debug!("git add {} (in {})", path.display(), work_tree.display());

    let command = format!("add {}", path.display());
    let output = Command::new("git")
        .current_dir(work_tree)
        .arg("add")
        .arg(path)
        .output()
        .map_err(|e| Error::GitCommand {
            command: command.clone(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(Error::GitCommand {
            command,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}

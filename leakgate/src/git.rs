// leakgate/src/git.rs
//! Minimal git plumbing for the scanner.
//!
//! The scan reads staged content from the index (`git show :<path>`),
//! not from the working tree, so what gets scanned is exactly what a
//! commit would record. Deleted files never show up thanks to the
//! `--diff-filter` below.

use anyhow::{bail, Context, Result};
use log::{debug, warn};
use std::process::Command;

use leakgate_core::Addition;

/// Collects the staged files (added, copied or modified) with their
/// staged content.
///
/// A file that cannot be read from the index is skipped with a warning
/// rather than aborting the whole scan.
pub fn staged_additions() -> Result<Vec<Addition>> {
    let output = Command::new("git")
        .args(["diff", "--cached", "--name-only", "--diff-filter=ACM", "-z"])
        .output()
        .context("Failed to run git; is it installed and on PATH?")?;
    if !output.status.success() {
        bail!(
            "git diff --cached failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let mut additions = Vec::new();
    for raw_path in output.stdout.split(|&b| b == 0).filter(|p| !p.is_empty()) {
        let path = String::from_utf8_lossy(raw_path).into_owned();
        match staged_content(&path) {
            Ok(data) => additions.push(Addition::new(path, data)),
            Err(e) => warn!("Skipping {}: {:#}", path, e),
        }
    }
    debug!("Collected {} staged addition(s).", additions.len());
    Ok(additions)
}

/// Reads one file's content from the index. The `:<path>` pathspec is
/// interpreted relative to the repository root, matching the paths
/// printed by `git diff --name-only`.
fn staged_content(path: &str) -> Result<Vec<u8>> {
    let output = Command::new("git")
        .args(["show", &format!(":{}", path)])
        .output()
        .context("Failed to run git show")?;
    if !output.status.success() {
        bail!(
            "git show :{} failed: {}",
            path,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(output.stdout)
}

/// Resolves the repository's hooks directory, honoring `core.hooksPath`.
pub fn hooks_dir() -> Result<std::path::PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--git-path", "hooks"])
        .output()
        .context("Failed to run git; is it installed and on PATH?")?;
    if !output.status.success() {
        bail!("not inside a git repository");
    }
    let dir = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(std::path::PathBuf::from(dir))
}

// leakgate/src/commands/install.rs
//! Install command implementation: wires leakgate into the repository's
//! pre-commit hook.

use anyhow::{bail, Context, Result};
use log::info;
use std::fs;

use crate::cli::InstallCommand;
use crate::commands::EXIT_CLEAN;
use crate::git;

// Looked up on PATH at commit time, so the hook survives upgrades of
// the installed binary.
const HOOK_SCRIPT: &str = "#!/bin/sh\n# Installed by leakgate: scan staged changes before each commit.\nexec leakgate scan --staged\n";

pub fn run_install(args: InstallCommand) -> Result<i32> {
    let hooks_dir = git::hooks_dir()?;
    fs::create_dir_all(&hooks_dir)
        .with_context(|| format!("Failed to create hooks directory {}", hooks_dir.display()))?;

    let hook_path = hooks_dir.join("pre-commit");
    if hook_path.exists() && !args.force {
        bail!(
            "a pre-commit hook already exists at {}; rerun with --force to overwrite it",
            hook_path.display()
        );
    }

    fs::write(&hook_path, HOOK_SCRIPT)
        .with_context(|| format!("Failed to write {}", hook_path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&hook_path, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("Failed to mark {} executable", hook_path.display()))?;
    }

    info!("Installed pre-commit hook at {}", hook_path.display());
    println!("Installed pre-commit hook at {}", hook_path.display());
    Ok(EXIT_CLEAN)
}

use std::path::{Path, PathBuf};

use anyhow::Result;
use remote_edit::infrastructure::discover_workspace_root;

/// Workspace root for this invocation.
///
/// `-C <dir>` wins (relative to the current directory); otherwise the
/// nearest ancestor holding `.remote-edit.toml` or `.git`.
pub fn resolve_workspace_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(resolve_from(&cwd, explicit))
}

fn resolve_from(cwd: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => cwd.join(dir),
        None => discover_workspace_root(cwd),
    }
}

//! Local Path Mapper
//!
//! Maps remote paths to local materialization targets and local files to
//! remote upload targets. Only `ensure_local_dir` touches the file system,
//! and only through the `FileSystem` port.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::domain::ports::{FileSystem, FsResult};
use crate::domain::value_objects::{RemotePathSpec, REMOTE_SEPARATOR};

/// A relative remote path that would materialize outside the workspace
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("remote path '{path}' escapes workspace root '{}'", root.display())]
pub struct PathEscape {
    pub path: String,
    pub root: PathBuf,
}

/// Where a downloaded file lands locally
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalTarget {
    /// Mirrored into the workspace tree
    Derived(PathBuf),
    /// Absolute remote paths have no mirroring convention; the user picks a folder
    UserSelected,
}

/// Remote and local locations for one download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapping {
    pub remote: RemotePathSpec,
    /// Full remote file path handed to the transfer client
    pub remote_file: String,
    pub local: LocalTarget,
}

/// Join `path` onto a remote root directory with exactly one separator.
///
/// An empty root leaves the path untouched; a root made only of
/// separators is the remote filesystem root.
pub fn join_remote(root: &str, path: &str) -> String {
    if root.is_empty() {
        return path.to_string();
    }
    let trimmed = root.trim_end_matches(REMOTE_SEPARATOR);
    format!("{}{}{}", trimmed, REMOTE_SEPARATOR, path)
}

/// Compute the remote file path and local target for a download.
pub fn map_download(
    workspace_root: &Path,
    remote_root: &str,
    remote_path: &str,
) -> Result<PathMapping, PathEscape> {
    let remote = RemotePathSpec::parse(remote_path);

    if remote.is_absolute() {
        return Ok(PathMapping {
            remote_file: remote.raw().to_string(),
            remote,
            local: LocalTarget::UserSelected,
        });
    }

    let local_dir = resolve_local_dir(workspace_root, &remote)?;
    Ok(PathMapping {
        remote_file: join_remote(remote_root, remote.raw()),
        remote,
        local: LocalTarget::Derived(local_dir),
    })
}

/// `join(workspace_root, directory component)` for a relative remote path.
pub fn resolve_local_dir(
    workspace_root: &Path,
    remote: &RemotePathSpec,
) -> Result<PathBuf, PathEscape> {
    let mut dir = workspace_root.to_path_buf();
    for segment in remote.directory_segments() {
        if segment == ".." {
            return Err(PathEscape {
                path: remote.raw().to_string(),
                root: workspace_root.to_path_buf(),
            });
        }
        if segment != "." {
            dir.push(segment);
        }
    }
    Ok(dir)
}

/// Create `dir` and any missing ancestors. Existing directories are left alone.
pub fn ensure_local_dir<FS: FileSystem + ?Sized>(fs: &FS, dir: &Path) -> FsResult<()> {
    if fs.exists(dir) {
        return Ok(());
    }
    tracing::debug!(dir = %dir.display(), "creating local directory");
    fs.create_dir_all(dir)
}

/// Remote target for a workspace-relative local file.
///
/// Every platform separator becomes the remote separator.
pub fn remote_target_for(root_dir: &str, relative: &Path) -> String {
    join_remote(root_dir, &to_remote_separators(relative))
}

/// Render a local relative path with `/` between all components.
///
/// Only normal components survive, so the result never climbs with `..`.
pub fn to_remote_separators(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir
            | Component::CurDir
            | Component::RootDir
            | Component::Prefix(_) => None,
        })
        .collect::<Vec<_>>()
        .join(REMOTE_SEPARATOR)
}

//! Local workspace and active document.

use std::path::{Component, Path, PathBuf};

use crate::config::PROJECT_CONFIG_FILE;
use crate::domain::ports::{ActiveDocument, Workspace};

/// Environment variable naming the document to upload when no file is given
pub const ACTIVE_FILE_ENV: &str = "REMOTE_EDIT_ACTIVE_FILE";

/// Discover the workspace root from an invocation directory.
///
/// Walks upward from `start`; the first directory holding
/// `.remote-edit.toml` or `.git` wins. Falls back to `start`.
pub fn discover_workspace_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(PROJECT_CONFIG_FILE).is_file() {
            return dir.to_path_buf();
        }
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}

/// Workspace rooted at a local directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalWorkspace {
    root: PathBuf,
}

impl LocalWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Workspace for the nearest marked ancestor of `start`
    pub fn discover(start: &Path) -> Self {
        Self::new(discover_workspace_root(start))
    }
}

impl Workspace for LocalWorkspace {
    fn root_path(&self) -> &Path {
        &self.root
    }

    /// Files outside the workspace map to their bare file name.
    ///
    /// The result never climbs above the workspace root.
    fn relative_path(&self, abs_path: &Path) -> PathBuf {
        let path = normalize_lexically(abs_path);
        if path.is_relative() {
            return within_root(path).unwrap_or_else(|| file_name_of(abs_path));
        }
        if let Ok(rel) = path.strip_prefix(normalize_lexically(&self.root)) {
            if let Some(rel) = within_root(rel.to_path_buf()) {
                return rel;
            }
        }
        // Tolerate symlinked roots such as /var -> /private/var
        if let (Ok(root), Ok(real)) = (self.root.canonicalize(), abs_path.canonicalize()) {
            if let Ok(rel) = real.strip_prefix(&root) {
                return rel.to_path_buf();
            }
        }
        file_name_of(&path)
    }
}

/// Resolve `.` and `..` without touching the filesystem.
///
/// `..` at the root stays at the root; leading `..` of a relative path is kept.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(Component::ParentDir.as_os_str()),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn within_root(rel: PathBuf) -> Option<PathBuf> {
    (!rel.components().any(|c| c == Component::ParentDir)).then_some(rel)
}

fn file_name_of(path: &Path) -> PathBuf {
    path.file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| path.to_path_buf())
}

/// The document chosen for upload, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFile(Option<PathBuf>);

impl ActiveFile {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self(path)
    }

    pub fn none() -> Self {
        Self(None)
    }

    /// Explicit path first, then `REMOTE_EDIT_ACTIVE_FILE`.
    ///
    /// Relative paths resolve against `cwd`.
    pub fn resolve(
        explicit: Option<PathBuf>,
        cwd: &Path,
        get_env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let path = explicit.or_else(|| {
            get_env(ACTIVE_FILE_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        });
        Self(path.map(|p| if p.is_relative() { cwd.join(p) } else { p }))
    }
}

impl ActiveDocument for ActiveFile {
    fn active_file(&self) -> Option<PathBuf> {
        self.0.clone()
    }
}

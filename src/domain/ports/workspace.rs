//! Workspace and Active Document Ports

use std::path::{Path, PathBuf};

/// Local base directory mirroring the remote tree
pub trait Workspace {
    fn root_path(&self) -> &Path;

    /// Path of `abs_path` relative to the workspace root
    fn relative_path(&self, abs_path: &Path) -> PathBuf;
}

/// The document the user is currently editing
pub trait ActiveDocument {
    fn active_file(&self) -> Option<PathBuf>;
}

//! Sync request types

use std::path::PathBuf;

use crate::domain::ports::{
    ActiveDocument, ConfigSource, FolderPicker, Notifier, Prompt, Workspace,
};

/// Collaborators that live for one invocation
///
/// Configuration is resolved before the run starts and passed in here
/// rather than read from ambient state.
#[derive(Clone, Copy)]
pub struct SyncContext<'a> {
    pub config: &'a dyn ConfigSource,
    pub prompt: &'a dyn Prompt,
    pub folder_picker: &'a dyn FolderPicker,
    pub workspace: &'a dyn Workspace,
    pub active_document: &'a dyn ActiveDocument,
    pub notifier: &'a dyn Notifier,
}

/// Pre-answered values for the download flow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadRequest {
    /// Answers the remote path prompt
    pub remote_path: Option<String>,
    /// Answers the folder picker (absolute remote paths only)
    pub local_dir: Option<PathBuf>,
}

impl DownloadRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remote_path(mut self, remote_path: Option<String>) -> Self {
        self.remote_path = remote_path;
        self
    }

    pub fn with_local_dir(mut self, local_dir: Option<PathBuf>) -> Self {
        self.local_dir = local_dir;
        self
    }
}

/// Pre-answered values for the upload flow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadRequest {
    /// Answers the remote directory prompt (no root directory configured)
    pub remote_dir: Option<String>,
}

impl UploadRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remote_dir(mut self, remote_dir: Option<String>) -> Self {
        self.remote_dir = remote_dir;
        self
    }
}

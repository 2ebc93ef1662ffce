//! Sync Orchestrator
//!
//! Linear download and upload flows. Each run resolves its configuration,
//! resolves paths, performs one blocking transfer and reports the result.

use std::path::Path;

use crate::domain::ports::{EditorSurface, FileSystem, ShowOptions, TransferClient};
use crate::domain::services::{
    ensure_local_dir, join_remote, map_download, remote_target_for, LocalTarget,
};
use crate::error::{RemoteEditError, RemoteEditResult};

use super::config::resolve_config;
use super::options::{DownloadRequest, SyncContext, UploadRequest};
use super::result::SyncOutcome;

pub const REMOTE_PATH_PROMPT: &str = "Path to remote file";
pub const FOLDER_PICKER_TITLE: &str = "Select local folder";
pub const REMOTE_DIR_PROMPT: &str = "Remote directory";
pub const NO_ACTIVE_DOCUMENT_MESSAGE: &str = "No active document to upload";

/// Sync orchestrator - binds the download and upload commands
pub struct SyncOrchestrator<TC, FS, ED>
where
    TC: TransferClient,
    FS: FileSystem,
    ED: EditorSurface,
{
    transfer: TC,
    fs: FS,
    editor: ED,
}

impl<TC, FS, ED> SyncOrchestrator<TC, FS, ED>
where
    TC: TransferClient,
    FS: FileSystem,
    ED: EditorSurface,
{
    pub fn new(transfer: TC, fs: FS, editor: ED) -> Self {
        Self {
            transfer,
            fs,
            editor,
        }
    }

    /// Fetch a remote file and open it.
    pub fn run_download(
        &self,
        ctx: &SyncContext<'_>,
        request: &DownloadRequest,
    ) -> RemoteEditResult<SyncOutcome> {
        tracing::debug!("download: resolving config");
        let Some(config) = resolve_config(ctx.config, ctx.prompt, true) else {
            return Ok(cancelled("config prompt"));
        };
        let root_dir = config.root_dir.as_deref().unwrap_or_default();

        tracing::debug!("download: resolving remote path");
        let remote_path = match non_empty(request.remote_path.clone()) {
            Some(path) => path,
            None => match non_empty(ctx.prompt.ask(REMOTE_PATH_PROMPT)) {
                Some(path) => path,
                None => return Ok(cancelled("remote path prompt")),
            },
        };
        let mapping = map_download(ctx.workspace.root_path(), root_dir, &remote_path)?;

        tracing::debug!(remote_file = %mapping.remote_file, "download: resolving local path");
        let local_dir = match mapping.local {
            LocalTarget::Derived(dir) => dir,
            LocalTarget::UserSelected => {
                let picked = request
                    .local_dir
                    .clone()
                    .or_else(|| ctx.folder_picker.pick_folder(FOLDER_PICKER_TITLE));
                match picked {
                    Some(dir) => dir,
                    None => return Ok(cancelled("folder picker")),
                }
            }
        };
        self.prepare_local_dir(&local_dir)?;

        tracing::debug!(
            host = %config.host,
            local_dir = %local_dir.display(),
            "download: transferring"
        );
        let output = match self.transfer.download(
            &config.host,
            &config.user,
            &local_dir,
            &mapping.remote_file,
        ) {
            Ok(output) => output,
            Err(failure) => {
                ctx.notifier.error(&failure.reason);
                return Ok(SyncOutcome::TransferFailed {
                    reason: failure.reason,
                });
            }
        };

        let local_file = local_dir.join(mapping.remote.filename());
        tracing::debug!(local_file = %local_file.display(), "download: presenting");
        let document = self.editor.open_document(&local_file)?;
        self.editor
            .show_document(&document, ShowOptions { preview: false })?;

        Ok(SyncOutcome::Downloaded {
            remote_file: mapping.remote_file,
            local_file,
            output,
        })
    }

    /// Push the active document to the host.
    pub fn run_upload(
        &self,
        ctx: &SyncContext<'_>,
        request: &UploadRequest,
    ) -> RemoteEditResult<SyncOutcome> {
        tracing::debug!("upload: resolving config");
        let Some(config) = resolve_config(ctx.config, ctx.prompt, false) else {
            return Ok(cancelled("config prompt"));
        };

        tracing::debug!("upload: identifying local file");
        let Some(local_file) = ctx.active_document.active_file() else {
            ctx.notifier.info(NO_ACTIVE_DOCUMENT_MESSAGE);
            return Ok(SyncOutcome::NoActiveDocument);
        };

        tracing::debug!("upload: resolving remote directory");
        let remote_target = match config.root_dir.as_deref() {
            Some(root_dir) => {
                remote_target_for(root_dir, &ctx.workspace.relative_path(&local_file))
            }
            None => {
                let dir = match non_empty(request.remote_dir.clone()) {
                    Some(dir) => dir,
                    None => match non_empty(ctx.prompt.ask(REMOTE_DIR_PROMPT)) {
                        Some(dir) => dir,
                        None => return Ok(cancelled("remote directory prompt")),
                    },
                };
                join_remote(&dir, &file_name(&local_file))
            }
        };

        tracing::debug!(host = %config.host, remote_target = %remote_target, "upload: transferring");
        match self
            .transfer
            .upload(&config.host, &config.user, &local_file, &remote_target)
        {
            Ok(output) => {
                let remote = format!("{}:{}", config.destination(), remote_target);
                ctx.notifier.info(&format!("Uploaded to {}", remote));
                Ok(SyncOutcome::Uploaded {
                    local_file,
                    remote,
                    output,
                })
            }
            Err(failure) => {
                ctx.notifier.error(&failure.reason);
                Ok(SyncOutcome::TransferFailed {
                    reason: failure.reason,
                })
            }
        }
    }

    fn prepare_local_dir(&self, dir: &Path) -> RemoteEditResult<()> {
        ensure_local_dir(&self.fs, dir).map_err(|source| RemoteEditError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })
    }
}

fn cancelled(step: &str) -> SyncOutcome {
    tracing::debug!(step, "cancelled by user");
    SyncOutcome::Cancelled
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

use std::path::{Path, PathBuf};

use anyhow::Result;
use remote_edit::application::{SyncContext, UploadRequest};
use remote_edit::infrastructure::{ActiveFile, LocalWorkspace};
use remote_edit::presentation::{factory, ColorWhen, RemoteArgs};

use super::session::Session;

pub fn cmd_upload(
    file: Option<PathBuf>,
    remote: &RemoteArgs,
    remote_dir: Option<String>,
    json: bool,
    color: Option<ColorWhen>,
    workspace: Option<&Path>,
) -> Result<u8> {
    let session = Session::start(json, color, workspace, remote.as_overrides())?;

    let config = session.config_source();
    let prompt = session.prompt();
    let notifier = session.notifier();
    let local_workspace = LocalWorkspace::new(&session.workspace_root);
    let cwd = std::env::current_dir()?;
    let active_file = ActiveFile::resolve(file, &cwd, |key| std::env::var(key).ok());

    let ctx = SyncContext {
        config: &config,
        prompt: &prompt,
        folder_picker: &prompt,
        workspace: &local_workspace,
        active_document: &active_file,
        notifier: notifier.as_ref(),
    };

    // Upload never opens a document
    let editor = factory::create_editor(false, json);
    let orchestrator = factory::create_sync_orchestrator(&session.loaded, editor);

    let request = UploadRequest::new().with_remote_dir(remote_dir);
    let outcome = orchestrator.run_upload(&ctx, &request)?;

    Ok(session.finish("upload", &outcome))
}

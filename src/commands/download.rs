use std::path::{Path, PathBuf};

use anyhow::Result;
use remote_edit::application::{DownloadRequest, SyncContext};
use remote_edit::infrastructure::{ActiveFile, LocalWorkspace};
use remote_edit::presentation::{factory, ColorWhen, RemoteArgs};

use super::session::Session;

pub fn cmd_download(
    remote_path: Option<String>,
    remote: &RemoteArgs,
    dest: Option<PathBuf>,
    no_open: bool,
    json: bool,
    color: Option<ColorWhen>,
    workspace: Option<&Path>,
) -> Result<u8> {
    let session = Session::start(json, color, workspace, remote.as_overrides())?;

    let config = session.config_source();
    let prompt = session.prompt();
    let notifier = session.notifier();
    let local_workspace = LocalWorkspace::new(&session.workspace_root);
    let no_active_file = ActiveFile::none();

    let ctx = SyncContext {
        config: &config,
        prompt: &prompt,
        folder_picker: &prompt,
        workspace: &local_workspace,
        active_document: &no_active_file,
        notifier: notifier.as_ref(),
    };

    let editor = factory::create_editor(!no_open, json);
    let orchestrator = factory::create_sync_orchestrator(&session.loaded, editor);

    let request = DownloadRequest::new()
        .with_remote_path(remote_path)
        .with_local_dir(dest);
    let outcome = orchestrator.run_download(&ctx, &request)?;

    Ok(session.finish("download", &outcome))
}

//! Use Case Factory
//!
//! Creates the orchestrator and per-invocation collaborators with
//! infrastructure dependencies wired up. This is the dependency
//! injection point for the application.

use std::path::Path;

use crate::application::SyncOrchestrator;
use crate::config::{load_layered, user_config_path, with_env_overrides, LoadedConfig, RemoteConfig};
use crate::domain::ports::EditorSurface;
use crate::error::ConfigError;
use crate::infrastructure::{CommandEditor, LocalFs, PathPrinter, ScpClient};

/// Editor surface chosen at startup
pub type DynEditor = Box<dyn EditorSurface>;

/// Type alias for the concrete SyncOrchestrator with all dependencies
pub type ConcreteSyncOrchestrator = SyncOrchestrator<ScpClient, LocalFs, DynEditor>;

/// Resolve configuration for one invocation.
///
/// User file, project file, `REMOTE_EDIT_*` environment, then CLI flags.
pub fn load_config(
    workspace_root: &Path,
    cli_overrides: RemoteConfig,
) -> Result<LoadedConfig, ConfigError> {
    load_config_with(
        workspace_root,
        user_config_path().as_deref(),
        |key| std::env::var(key).ok(),
        cli_overrides,
    )
}

/// `load_config` with explicit user config path and environment (for testing)
pub fn load_config_with(
    workspace_root: &Path,
    user_config: Option<&Path>,
    get_env: impl Fn(&str) -> Option<String>,
    cli_overrides: RemoteConfig,
) -> Result<LoadedConfig, ConfigError> {
    let mut loaded = load_layered(workspace_root, user_config)?;
    loaded.config = with_env_overrides(loaded.config, get_env)?;
    loaded.config.remote.overlay(cli_overrides);
    Ok(loaded)
}

/// Pick the editor surface: `$VISUAL`/`$EDITOR` unless disabled or unset
pub fn create_editor(open_editor: bool, json: bool) -> DynEditor {
    match CommandEditor::from_env().filter(|_| open_editor) {
        Some(editor) => Box::new(editor),
        None => Box::new(PathPrinter::stdout(json)),
    }
}

/// Create a sync orchestrator with all dependencies wired up
pub fn create_sync_orchestrator(loaded: &LoadedConfig, editor: DynEditor) -> ConcreteSyncOrchestrator {
    let transfer = ScpClient::from_config(&loaded.config.remote, &loaded.config.transfer);
    SyncOrchestrator::new(transfer, LocalFs::new(), editor)
}

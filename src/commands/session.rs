use std::path::{Path, PathBuf};

use anyhow::Result;
use remote_edit::application::SyncOutcome;
use remote_edit::config::{LoadedConfig, RemoteConfig};
use remote_edit::domain::ports::Notifier;
use remote_edit::infrastructure::{InteractivePrompt, JsonNotifier, TomlConfigSource};
use remote_edit::presentation::{factory, ColorWhen};

use crate::ui::context::UiContext;
use crate::ui::notifier::ConsoleNotifier;
use crate::ui::theme::PromptTheme;

/// Per-invocation state shared by download and upload
pub struct Session {
    pub workspace_root: PathBuf,
    pub loaded: LoadedConfig,
    pub ui: UiContext,
}

impl Session {
    pub fn start(
        json: bool,
        color: Option<ColorWhen>,
        workspace: Option<&Path>,
        overrides: RemoteConfig,
    ) -> Result<Self> {
        let workspace_root = super::workspace::resolve_workspace_root(workspace)?;
        let loaded = factory::load_config(&workspace_root, overrides)?;
        let ui = UiContext::new(json, color, &loaded.config);

        tracing::debug!(
            workspace = %workspace_root.display(),
            sources = loaded.sources.len(),
            "configuration resolved"
        );
        crate::ui::output::print_config_warnings(&loaded.warnings, json, ui.color, ui.unicode);

        Ok(Self {
            workspace_root,
            loaded,
            ui,
        })
    }

    pub fn config_source(&self) -> TomlConfigSource {
        TomlConfigSource::new(self.loaded.config.remote.clone())
    }

    pub fn notifier(&self) -> Box<dyn Notifier> {
        if self.ui.json {
            Box::new(JsonNotifier::stdout())
        } else {
            Box::new(ConsoleNotifier::new(self.ui))
        }
    }

    pub fn prompt(&self) -> InteractivePrompt {
        InteractivePrompt::detect(Box::new(PromptTheme::new(self.ui.color)))
    }

    /// Report the outcome (JSON only) and map it to an exit code
    pub fn finish(&self, command: &str, outcome: &SyncOutcome) -> u8 {
        tracing::debug!(command, outcome = outcome.kind(), "finished");
        if self.ui.json {
            crate::ui::json::emit_logged(outcome_json(command, outcome));
        }
        u8::try_from(outcome.exit_code()).unwrap_or(1)
    }
}

pub fn outcome_json(command: &str, outcome: &SyncOutcome) -> serde_json::Value {
    let mut event = serde_json::json!({
        "event": "complete",
        "command": command,
        "outcome": outcome.kind(),
    });
    match outcome {
        SyncOutcome::Downloaded {
            remote_file,
            local_file,
            ..
        } => {
            event["remote_file"] = serde_json::json!(remote_file);
            event["local_file"] = serde_json::json!(local_file.display().to_string());
        }
        SyncOutcome::Uploaded {
            local_file, remote, ..
        } => {
            event["local_file"] = serde_json::json!(local_file.display().to_string());
            event["remote"] = serde_json::json!(remote);
        }
        SyncOutcome::TransferFailed { reason } => {
            event["reason"] = serde_json::json!(reason);
        }
        SyncOutcome::Cancelled | SyncOutcome::NoActiveDocument => {}
    }
    event
}

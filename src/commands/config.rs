use std::path::Path;

use anyhow::Result;
use remote_edit::config::RemoteConfig;
use remote_edit::presentation::{factory, ColorWhen};

use crate::ui::context::UiContext;

pub fn cmd_config(
    json: bool,
    color: Option<ColorWhen>,
    workspace: Option<&Path>,
) -> Result<()> {
    let workspace_root = super::workspace::resolve_workspace_root(workspace)?;
    let loaded = factory::load_config(&workspace_root, RemoteConfig::default())?;
    let ui = UiContext::new(json, color, &loaded.config);

    crate::ui::output::print_config_warnings(&loaded.warnings, json, ui.color, ui.unicode);

    if json {
        crate::ui::json::emit(crate::ui::views::config::config_json(&workspace_root, &loaded))?;
        return Ok(());
    }

    print!(
        "{}",
        crate::ui::views::config::render_config(&workspace_root, &loaded, ui.color, ui.unicode)
    );
    Ok(())
}

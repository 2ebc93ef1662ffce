use std::path::Path;

use remote_edit::config::LoadedConfig;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_config(
    workspace_root: &Path,
    loaded: &LoadedConfig,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        Icon::Config.colored(supports_color, supports_unicode),
        ColoredText::info("remote-edit config").bold().render(supports_color)
    ));
    out.push_str(&format!("Workspace: {}\n", workspace_root.display()));

    out.push_str("Sources:\n");
    if loaded.sources.is_empty() {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim("(none, using defaults)").render(supports_color)
        ));
    }
    for source in &loaded.sources {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            source.display()
        ));
    }

    let body = toml::to_string_pretty(&loaded.config).unwrap_or_default();
    out.push('\n');
    out.push_str(body.trim_end());
    out.push('\n');
    out
}

pub fn config_json(workspace_root: &Path, loaded: &LoadedConfig) -> serde_json::Value {
    serde_json::json!({
        "event": "config",
        "workspace": workspace_root.display().to_string(),
        "sources": loaded
            .sources
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>(),
        "config": serde_json::to_value(&loaded.config).unwrap_or(serde_json::Value::Null),
    })
}

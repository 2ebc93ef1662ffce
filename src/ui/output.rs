use remote_edit::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;

pub fn render_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut out = format!(
        "{} Unknown config key '{}' in {}",
        Icon::Warning.colored(supports_color, supports_unicode),
        warning.key,
        location
    );
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!("\n   Did you mean '{}'?", suggestion));
    }
    out
}

/// Unknown-key warnings: stderr lines, or NDJSON `warning` events.
pub fn print_config_warnings(
    warnings: &[ConfigWarning],
    json: bool,
    supports_color: bool,
    supports_unicode: bool,
) {
    for w in warnings {
        if json {
            crate::ui::json::emit_logged(serde_json::json!({
                "event": "warning",
                "kind": "unknown_config_key",
                "key": w.key,
                "file": w.file.display().to_string(),
                "line": w.line,
                "suggestion": w.suggestion,
            }));
        } else {
            eprintln!("{}", render_config_warning(w, supports_color, supports_unicode));
        }
    }
}

use remote_edit::{ConfigError, RemoteEditError};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Hint shown under an error, when one applies
fn error_hint(err: &anyhow::Error) -> Option<&'static str> {
    let err = err.downcast_ref::<RemoteEditError>()?;
    match err {
        RemoteEditError::PathEscape(_) => {
            Some("Remote paths containing '..' are not mirrored; use an absolute path instead.")
        }
        RemoteEditError::Config(ConfigError::Parse { .. }) => {
            Some("Fix the TOML syntax and try again.")
        }
        RemoteEditError::Editor(_) => {
            Some("Check $VISUAL / $EDITOR, or pass --no-open to print the path instead.")
        }
        _ => None,
    }
}

pub fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).bold().render(supports_color)
    );
    for cause in err.chain().skip(1) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            cause
        ));
    }
    if let Some(hint) = error_hint(err) {
        out.push_str(&format!("  {}\n", ColoredText::dim(hint).render(supports_color)));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        crate::ui::json::emit_logged(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error_with(err, caps.supports_color && !caps.is_ci, caps.supports_unicode)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use remote_edit::domain::services::PathEscape;
    use std::path::PathBuf;

    #[test]
    fn path_escape_error_has_hint() {
        let err: anyhow::Error = RemoteEditError::from(PathEscape {
            path: "../etc/passwd".to_string(),
            root: PathBuf::from("/ws"),
        })
        .into();

        insta::assert_snapshot!(format_error_with(&err, false, false).trim_end(), @r"
        [FAIL] remote path '../etc/passwd' escapes workspace root '/ws'
          Remote paths containing '..' are not mirrored; use an absolute path instead.
        ");
    }

    #[test]
    fn plain_error_lists_causes() {
        let err = anyhow::anyhow!("disk full").context("failed to save");
        let rendered = format_error_with(&err, false, true);
        assert_eq!(rendered, "✗ failed to save\n  ↳ disk full\n");
    }
}

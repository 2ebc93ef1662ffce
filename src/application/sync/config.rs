//! Connection settings for one run

use crate::domain::ports::{ConfigSource, Prompt};
use crate::domain::value_objects::{ConfigKey, SyncConfig};

/// Resolve host, user and root directory for one run.
///
/// Each key comes from `source` when set, otherwise from `prompt`.
/// The root directory is only asked for when `require_root_dir` is set;
/// otherwise a missing value stays `None`. Returns `None` as soon as a
/// required prompt is dismissed.
pub fn resolve_config(
    source: &dyn ConfigSource,
    prompt: &dyn Prompt,
    require_root_dir: bool,
) -> Option<SyncConfig> {
    let host = value_or_ask(source, prompt, ConfigKey::Host)?;
    let user = value_or_ask(source, prompt, ConfigKey::User)?;

    let root_dir = if require_root_dir {
        Some(value_or_ask(source, prompt, ConfigKey::RootDir)?)
    } else {
        source.get(ConfigKey::RootDir).filter(|v| !v.is_empty())
    };

    Some(SyncConfig {
        host,
        user,
        root_dir,
    })
}

fn value_or_ask(source: &dyn ConfigSource, prompt: &dyn Prompt, key: ConfigKey) -> Option<String> {
    if source.has(key) {
        return source.get(key);
    }
    tracing::debug!(key = %key, "config value missing, prompting");
    prompt.ask(key.prompt_text()).filter(|v| !v.is_empty())
}

//! Configuration loading and layering

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::types::Config;

/// Project configuration file name, looked up in the workspace root
pub const PROJECT_CONFIG_FILE: &str = ".remote-edit.toml";

/// Environment variable overriding the user config location
pub const USER_CONFIG_ENV: &str = "REMOTE_EDIT_USER_CONFIG_PATH";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Merged configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// Files that were read, lowest priority first
    pub sources: Vec<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = read_config(path)?;
    parse_with_warnings(&content, path)
}

fn read_config(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the user config, then the project config on top of it.
///
/// `[remote]` keys override one by one; `[transfer]` and `[output]`
/// override as whole sections when the higher layer defines them.
pub fn load_layered(
    workspace_root: &Path,
    user_config: Option<&Path>,
) -> Result<LoadedConfig, ConfigError> {
    let mut loaded = LoadedConfig::default();
    let project_config = workspace_root.join(PROJECT_CONFIG_FILE);

    let layers = user_config
        .into_iter()
        .chain(std::iter::once(project_config.as_path()));

    for path in layers {
        if !path.is_file() {
            continue;
        }
        let content = read_config(path)?;
        let (parsed, warnings) = parse_with_warnings(&content, path)?;
        let table: toml::Table = content.parse().map_err(|e: toml::de::Error| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        loaded.config.remote.overlay(parsed.remote);
        if has_non_empty_table(&table, "transfer") {
            loaded.config.transfer = parsed.transfer;
        }
        if has_non_empty_table(&table, "output") {
            loaded.config.output = parsed.output;
        }

        tracing::debug!(path = %path.display(), "loaded config layer");
        loaded.sources.push(path.to_path_buf());
        loaded.warnings.extend(warnings);
    }

    Ok(loaded)
}

fn has_non_empty_table(root: &toml::Table, key: &str) -> bool {
    match root.get(key) {
        Some(toml::Value::Table(t)) => !t.is_empty(),
        Some(_) => true,
        None => false,
    }
}

/// Default user configuration path
///
/// `REMOTE_EDIT_USER_CONFIG_PATH`, then `$XDG_CONFIG_HOME/remote-edit/config.toml`,
/// then the platform config directory.
pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(USER_CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("remote-edit").join("config.toml"))
}

/// Apply environment variable overrides (`REMOTE_EDIT_*` prefix)
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Result<Config, ConfigError> {
    // Empty variables count as unset
    let get_env = |key: &str| get_env(key).filter(|v| !v.is_empty());

    if let Some(host) = get_env("REMOTE_EDIT_HOST") {
        config.remote.host = Some(host);
    }
    if let Some(user) = get_env("REMOTE_EDIT_USER") {
        config.remote.user = Some(user);
    }
    if let Some(root_dir) = get_env("REMOTE_EDIT_ROOT_DIR") {
        config.remote.root_dir = Some(root_dir);
    }
    if let Some(port) = get_env("REMOTE_EDIT_PORT") {
        let parsed = port
            .trim()
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnv {
                var: "REMOTE_EDIT_PORT".to_string(),
                value: port.clone(),
                message: e.to_string(),
            })?;
        config.remote.port = Some(parsed);
    }
    if let Some(identity) = get_env("REMOTE_EDIT_IDENTITY_FILE") {
        config.remote.identity_file = Some(PathBuf::from(identity));
    }

    Ok(config)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "remote",
        "host",
        "user",
        "rootDir",
        "root_dir",
        "port",
        "identity_file",
        "transfer",
        "create_remote_dirs",
        "batch_mode",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::loader::{self, ConfigWarning};

/// Connection settings (`[remote]`)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RemoteConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Base directory on the remote host for relative paths
    #[serde(
        default,
        rename = "rootDir",
        alias = "root_dir",
        skip_serializing_if = "Option::is_none"
    )]
    pub root_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_file: Option<PathBuf>,
}

impl RemoteConfig {
    /// Overlay every key set in `upper` onto `self`
    pub fn overlay(&mut self, upper: RemoteConfig) {
        if upper.host.is_some() {
            self.host = upper.host;
        }
        if upper.user.is_some() {
            self.user = upper.user;
        }
        if upper.root_dir.is_some() {
            self.root_dir = upper.root_dir;
        }
        if upper.port.is_some() {
            self.port = upper.port;
        }
        if upper.identity_file.is_some() {
            self.identity_file = upper.identity_file;
        }
    }
}

/// Transfer behaviour (`[transfer]`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferConfig {
    /// Run `mkdir -p` on the remote parent directory before uploading
    #[serde(default = "default_true")]
    pub create_remote_dirs: bool,

    /// Pass `-o BatchMode=yes` so scp never asks for a password
    #[serde(default)]
    pub batch_mode: bool,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            create_remote_dirs: true,
            batch_mode: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration (`[output]`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

/// Full configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub transfer: TransferConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }
}

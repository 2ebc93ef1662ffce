//! Configuration module for remote-edit
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (REMOTE_EDIT_*)
//! 3. Project config (<workspace>/.remote-edit.toml)
//! 4. User config (~/.config/remote-edit/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_layered, user_config_path, with_env_overrides, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE, USER_CONFIG_ENV,
};
pub use types::{ColorMode, Config, OutputConfig, RemoteConfig, TransferConfig};

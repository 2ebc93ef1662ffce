//! TOML-backed configuration source.

use crate::config::RemoteConfig;
use crate::domain::ports::ConfigSource;
use crate::domain::value_objects::ConfigKey;

/// Configuration source over the merged `[remote]` section.
///
/// Built once per invocation after files, environment and CLI flags
/// have been layered, so lookups never touch the disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TomlConfigSource {
    remote: RemoteConfig,
}

impl TomlConfigSource {
    pub fn new(remote: RemoteConfig) -> Self {
        Self { remote }
    }
}

impl ConfigSource for TomlConfigSource {
    fn get(&self, key: ConfigKey) -> Option<String> {
        match key {
            ConfigKey::Host => self.remote.host.clone(),
            ConfigKey::User => self.remote.user.clone(),
            ConfigKey::RootDir => self.remote.root_dir.clone(),
        }
    }
}

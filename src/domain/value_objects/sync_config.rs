//! Resolved connection settings for one command invocation

use std::fmt;

/// Configuration keys consumed by the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    Host,
    User,
    RootDir,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 3] = [ConfigKey::Host, ConfigKey::User, ConfigKey::RootDir];

    /// Key name as written in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::Host => "host",
            ConfigKey::User => "user",
            ConfigKey::RootDir => "rootDir",
        }
    }

    /// Text shown when the value has to be asked for
    pub fn prompt_text(&self) -> &'static str {
        match self {
            ConfigKey::Host => "Remote host",
            ConfigKey::User => "Remote user",
            ConfigKey::RootDir => "Remote root directory",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host, user and remote root directory for a single run
///
/// `root_dir` is `None` only in the upload flow, where a missing root
/// directory is answered by asking for a remote directory instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub host: String,
    pub user: String,
    pub root_dir: Option<String>,
}

impl SyncConfig {
    /// `user@host`, or just `host` when no user is set
    pub fn destination(&self) -> String {
        if self.user.is_empty() {
            self.host.clone()
        } else {
            format!("{}@{}", self.user, self.host)
        }
    }
}

//! Config Source Port
//!
//! Read-only view of the configuration for one invocation. Values are
//! resolved once at the start of a run and handed to the orchestrator.

use crate::domain::value_objects::ConfigKey;

/// Configuration collaborator
pub trait ConfigSource {
    /// Whether the key carries a non-empty value
    fn has(&self, key: ConfigKey) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }

    /// Value for the key, if any
    fn get(&self, key: ConfigKey) -> Option<String>;

    /// Value for the key, or `default` when unset
    fn get_or(&self, key: ConfigKey, default: &str) -> String {
        self.get(key)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_string())
    }
}

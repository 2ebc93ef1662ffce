//! Value Objects
//!
//! Immutable values produced and consumed within one command invocation.

pub mod remote_path;
pub mod sync_config;

pub use remote_path::{is_absolute, split_remote_path, RemotePathSpec, REMOTE_SEPARATOR};
pub use sync_config::{ConfigKey, SyncConfig};

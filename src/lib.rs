//! remote-edit - edit remote files locally over scp
//!
//! Fetches a file from a remote host into a local workspace that mirrors
//! the remote tree, opens it in an editor, and pushes local files back.
//! Transport, authentication and encryption are delegated to the system
//! `scp`/`ssh` binaries.
//!
//! ## Layers
//!
//! - `domain` - remote path splitting, local path mapping, port traits
//! - `application` - the download/upload orchestrator
//! - `infrastructure` - scp, file system, prompts, editor, workspace
//! - `presentation` - CLI definition and dependency wiring

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DownloadRequest, SyncContext, SyncOrchestrator, SyncOutcome, UploadRequest};
pub use config::{Config, LoadedConfig};
pub use domain::value_objects::{is_absolute, split_remote_path, RemotePathSpec, SyncConfig};
pub use error::{ConfigError, RemoteEditError, RemoteEditResult};

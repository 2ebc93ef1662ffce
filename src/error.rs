//! Error types for remote-edit
//!
//! Uses `thiserror` for library errors. User cancellation, a missing
//! active document and transfer failures are outcomes, not errors; see
//! `application::SyncOutcome`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{EditorError, FsError};
use crate::domain::services::PathEscape;

/// Result type alias for remote-edit operations
pub type RemoteEditResult<T> = Result<T, RemoteEditError>;

/// Unexpected faults that end a command invocation
#[derive(Error, Debug)]
pub enum RemoteEditError {
    /// Local directory could not be created
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Remote path would land outside the workspace
    #[error(transparent)]
    PathEscape(#[from] PathEscape),

    /// Editing surface could not show the downloaded file
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// Configuration file could not be read or parsed
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid value '{value}' for {var}: {message}")]
    InvalidEnv {
        var: String,
        value: String,
        message: String,
    },
}

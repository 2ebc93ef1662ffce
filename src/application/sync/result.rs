//! Sync outcome types

use std::path::PathBuf;

/// How an invocation ended
///
/// Only unexpected faults are errors; everything a user can cause
/// (dismissing a prompt, no open document, a refused transfer) is an
/// outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Downloaded {
        remote_file: String,
        local_file: PathBuf,
        output: String,
    },
    Uploaded {
        local_file: PathBuf,
        /// `user@host:path`
        remote: String,
        output: String,
    },
    /// A required prompt was dismissed
    Cancelled,
    /// Upload requested with no document to upload
    NoActiveDocument,
    /// The transfer client reported a failure; already shown to the user
    TransferFailed { reason: String },
}

impl SyncOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SyncOutcome::Downloaded { .. } | SyncOutcome::Uploaded { .. })
    }

    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            SyncOutcome::TransferFailed { .. } => 1,
            _ => 0,
        }
    }

    /// Short machine-readable name
    pub fn kind(&self) -> &'static str {
        match self {
            SyncOutcome::Downloaded { .. } => "downloaded",
            SyncOutcome::Uploaded { .. } => "uploaded",
            SyncOutcome::Cancelled => "cancelled",
            SyncOutcome::NoActiveDocument => "no_active_document",
            SyncOutcome::TransferFailed { .. } => "transfer_failed",
        }
    }
}

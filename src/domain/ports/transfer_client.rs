//! Transfer Client Port
//!
//! The secure-copy collaborator. Calls block the invoking task until the
//! external transfer finishes; success follows the exit-status-zero rule.

use std::path::Path;

use thiserror::Error;

/// A transfer that did not complete
///
/// `reason` is the collaborator's error text, shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct TransferFailure {
    pub reason: String,
    /// Exit status, when the collaborator ran to completion
    pub status: Option<i32>,
}

impl TransferFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            status: None,
        }
    }

    /// Failure keyed on a nonzero exit status
    ///
    /// Falls back to a generic message when the collaborator wrote nothing.
    pub fn from_exit(status: Option<i32>, stderr: &str) -> Self {
        let text = stderr.trim();
        let reason = if !text.is_empty() {
            text.to_string()
        } else {
            match status {
                Some(code) => format!("scp exited with status {}", code),
                None => "scp was terminated by a signal".to_string(),
            }
        };
        Self { reason, status }
    }
}

/// Result of a transfer: captured output on success
pub type TransferResult = Result<String, TransferFailure>;

/// Secure-copy collaborator
pub trait TransferClient {
    /// Copy `remote_file` from the host into `local_dir`
    fn download(&self, host: &str, user: &str, local_dir: &Path, remote_file: &str)
        -> TransferResult;

    /// Copy `local_file` to `remote_target` on the host
    fn upload(&self, host: &str, user: &str, local_file: &Path, remote_target: &str)
        -> TransferResult;
}

impl<T: TransferClient + ?Sized> TransferClient for &T {
    fn download(&self, host: &str, user: &str, local_dir: &Path, remote_file: &str)
        -> TransferResult {
        (**self).download(host, user, local_dir, remote_file)
    }

    fn upload(&self, host: &str, user: &str, local_file: &Path, remote_target: &str)
        -> TransferResult {
        (**self).upload(host, user, local_file, remote_target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_displays_reason_verbatim() {
        let failure = TransferFailure::from_exit(Some(1), "permission denied\n");
        assert_eq!(failure.to_string(), "permission denied");
        assert_eq!(failure.status, Some(1));
    }

    #[test]
    fn failure_without_stderr_names_status() {
        let failure = TransferFailure::from_exit(Some(255), "  ");
        assert_eq!(failure.reason, "scp exited with status 255");
    }

    #[test]
    fn failure_without_status_mentions_signal() {
        let failure = TransferFailure::from_exit(None, "");
        assert!(failure.reason.contains("signal"));
    }
}

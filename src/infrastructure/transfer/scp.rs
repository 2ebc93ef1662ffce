//! SCP Transfer Client
//!
//! Delegates every transfer to the system `scp` binary (OpenSSH).
//! Authentication, encryption and the wire protocol stay with scp/ssh.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::{RemoteConfig, TransferConfig};
use crate::domain::ports::{TransferClient, TransferFailure, TransferResult};
use crate::domain::value_objects::{split_remote_path, REMOTE_SEPARATOR};
use crate::infrastructure::fs::expand_home;

/// Transfer client backed by `scp`
///
/// scp never creates the remote parent of an upload target, so uploads
/// optionally run `ssh host mkdir -p <parent>` first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScpClient {
    port: Option<u16>,
    identity_file: Option<PathBuf>,
    batch_mode: bool,
    create_remote_dirs: bool,
}

impl Default for ScpClient {
    fn default() -> Self {
        Self {
            port: None,
            identity_file: None,
            batch_mode: false,
            create_remote_dirs: true,
        }
    }
}

impl ScpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(remote: &RemoteConfig, transfer: &TransferConfig) -> Self {
        Self {
            port: remote.port,
            identity_file: remote.identity_file.as_deref().map(expand_home),
            batch_mode: transfer.batch_mode,
            create_remote_dirs: transfer.create_remote_dirs,
        }
    }

    fn scp_command(&self) -> Command {
        let mut cmd = Command::new("scp");
        if let Some(port) = self.port {
            cmd.arg("-P").arg(port.to_string());
        }
        self.common_options(&mut cmd);
        cmd
    }

    fn ssh_command(&self, destination: &str) -> Command {
        let mut cmd = Command::new("ssh");
        if let Some(port) = self.port {
            cmd.arg("-p").arg(port.to_string());
        }
        self.common_options(&mut cmd);
        cmd.arg(destination);
        cmd
    }

    fn common_options(&self, cmd: &mut Command) {
        if let Some(identity) = &self.identity_file {
            cmd.arg("-i").arg(identity);
        }
        if self.batch_mode {
            cmd.arg("-o").arg("BatchMode=yes");
        }
    }

    /// Create the parent directory of `remote_target` on the host.
    fn create_remote_parent(&self, host: &str, user: &str, remote_target: &str) -> TransferResult {
        let (parent, _) = split_remote_path(remote_target, REMOTE_SEPARATOR);
        if parent.is_empty() {
            return Ok(String::new());
        }

        let mut cmd = self.ssh_command(&destination(user, host));
        cmd.arg(format!("mkdir -p {}", quote_remote_path(parent)));
        run(cmd)
    }
}

impl TransferClient for ScpClient {
    fn download(
        &self,
        host: &str,
        user: &str,
        local_dir: &Path,
        remote_file: &str,
    ) -> TransferResult {
        let mut cmd = self.scp_command();
        cmd.arg(remote_spec(user, host, remote_file)).arg(local_dir);
        run(cmd)
    }

    fn upload(
        &self,
        host: &str,
        user: &str,
        local_file: &Path,
        remote_target: &str,
    ) -> TransferResult {
        if self.create_remote_dirs {
            self.create_remote_parent(host, user, remote_target)?;
        }

        let mut cmd = self.scp_command();
        cmd.arg(local_file).arg(remote_spec(user, host, remote_target));
        run(cmd)
    }
}

/// Run a prepared command, keyed on exit status zero
fn run(mut cmd: Command) -> TransferResult {
    tracing::debug!(command = ?cmd, "running transfer command");

    let output = cmd
        .stdin(Stdio::inherit()) // Allow password input
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            TransferFailure::new(format!(
                "failed to run {}: {}",
                cmd.get_program().to_string_lossy(),
                e
            ))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::debug!(status = ?output.status.code(), "transfer command failed");
        return Err(TransferFailure::from_exit(output.status.code(), &stderr));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn destination(user: &str, host: &str) -> String {
    if user.is_empty() {
        host.to_string()
    } else {
        format!("{}@{}", user, host)
    }
}

/// `user@host:path`
pub fn remote_spec(user: &str, host: &str, path: &str) -> String {
    format!("{}:{}", destination(user, host), path)
}

/// Quote a remote path for the remote shell, keeping `~` expandable.
pub fn quote_remote_path(path: &str) -> String {
    if path == "~" {
        return path.to_string();
    }
    match path.strip_prefix("~/") {
        Some(rest) => format!("~/{}", shell_quote(rest)),
        None => shell_quote(path),
    }
}

fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

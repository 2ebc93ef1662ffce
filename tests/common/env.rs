//! Test environment builder for isolated remote-edit testing.
//!
//! Provides `TestEnv` - a temp workspace, a temp HOME and a directory
//! standing in for the remote host. Fake `scp` and `ssh` binaries are
//! put first on PATH so no test ever touches the network.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Variables from the outer environment that would leak into a run
const SCRUBBED_ENV: &[&str] = &[
    "VISUAL",
    "EDITOR",
    "RUST_LOG",
    "REMOTE_EDIT_HOST",
    "REMOTE_EDIT_USER",
    "REMOTE_EDIT_ROOT_DIR",
    "REMOTE_EDIT_PORT",
    "REMOTE_EDIT_IDENTITY_FILE",
    "REMOTE_EDIT_ACTIVE_FILE",
];

/// Result of running the remote-edit CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON events
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {line}"))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Workspace the CLI runs in
    pub workspace: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
    /// Fake remote filesystem plus the fake binaries and their logs
    pub remote: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Path relative to the workspace root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.workspace.path().join(relative)
    }

    /// Where the fake host keeps `path`.
    ///
    /// Absolute remote paths live under the remote root; `~/x` and plain
    /// relative paths live under its `home/` directory.
    pub fn remote_path(&self, path: &str) -> PathBuf {
        let root = self.remote.path().join("fs");
        if let Some(rest) = path.strip_prefix("~/") {
            root.join("home").join(rest)
        } else if let Some(rest) = path.strip_prefix('/') {
            root.join(rest)
        } else {
            root.join("home").join(path)
        }
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        write_with_parents(&self.project_path(relative), content);
    }

    pub fn write_remote_file(&self, path: &str, content: &str) {
        write_with_parents(&self.remote_path(path), content);
    }

    pub fn read_remote_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.remote_path(path))
            .unwrap_or_else(|e| panic!("remote file {path} missing: {e}"))
    }

    /// Argument lines the fake `scp` was called with
    pub fn scp_log(&self) -> Vec<String> {
        read_log(&self.remote.path().join("scp.log"))
    }

    /// Argument lines the fake `ssh` was called with
    pub fn ssh_log(&self) -> Vec<String> {
        read_log(&self.remote.path().join("ssh.log"))
    }

    /// Run remote-edit from the workspace root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(self.workspace.path(), args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.workspace.path(), args, env_vars)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        self.run_from_with_env(cwd, args, &[])
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = self.command(cwd);
        cmd.args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute remote-edit");
        output_to_result(output)
    }

    /// A remote-edit command with the isolated environment applied.
    pub fn command(&self, cwd: &Path) -> Command {
        let home = self.home_dir.path();
        let original_path = std::env::var("PATH").unwrap_or_default();

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_remote-edit"));
        cmd.current_dir(cwd)
            .env("HOME", home)
            .env("USERPROFILE", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env(
                "REMOTE_EDIT_USER_CONFIG_PATH",
                home.join(".config/remote-edit/config.toml"),
            )
            .env("NO_COLOR", "1")
            .env("PATH", format!("{}:{}", self.bin.display(), original_path));
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        cmd
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_with_parents(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn read_log(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    project_config: Option<String>,
    user_config: Option<String>,
    remote_files: Vec<(String, String)>,
    project_files: Vec<(String, String)>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of `.remote-edit.toml` in the workspace
    pub fn with_project_config(mut self, content: &str) -> Self {
        self.project_config = Some(content.to_string());
        self
    }

    /// Contents of the user-level config file
    pub fn with_user_config(mut self, content: &str) -> Self {
        self.user_config = Some(content.to_string());
        self
    }

    pub fn with_remote_file(mut self, path: &str, content: &str) -> Self {
        self.remote_files.push((path.to_string(), content.to_string()));
        self
    }

    pub fn with_project_file(mut self, relative: &str, content: &str) -> Self {
        self.project_files
            .push((relative.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let workspace = TempDir::new().expect("Failed to create workspace dir");
        let home_dir = TempDir::new().expect("Failed to create home dir");
        let remote = TempDir::new().expect("Failed to create remote dir");
        let bin = remote.path().join("bin");
        std::fs::create_dir_all(&bin).expect("Failed to create bin dir");

        // The marker pins workspace discovery to this temp dir.
        let project_config = self.project_config.unwrap_or_default();
        write_with_parents(&workspace.path().join(".remote-edit.toml"), &project_config);

        if let Some(user_config) = &self.user_config {
            write_with_parents(
                &home_dir.path().join(".config/remote-edit/config.toml"),
                user_config,
            );
        }

        let env = TestEnv {
            workspace,
            home_dir,
            remote,
            bin,
        };

        for (path, content) in &self.remote_files {
            env.write_remote_file(path, content);
        }
        for (relative, content) in &self.project_files {
            env.write_project_file(relative, content);
        }

        #[cfg(unix)]
        install_fake_transfer_tools(&env);

        env
    }
}

/// Fake `scp` copying between the workspace and the fake remote root.
///
/// Logs its arguments, fails with `$FAKE_SCP_FAIL` on stderr when set,
/// and reports a missing remote file the way OpenSSH does.
#[cfg(unix)]
fn install_fake_transfer_tools(env: &TestEnv) {
    use std::os::unix::fs::PermissionsExt;

    let fs_root = env.remote.path().join("fs");
    std::fs::create_dir_all(fs_root.join("home")).expect("Failed to create remote home");

    let scp = format!(
        r#"#!/bin/sh
set -eu
printf '%s\n' "$*" >> "{log}"
if [ -n "${{FAKE_SCP_FAIL-}}" ]; then
  printf '%s\n' "$FAKE_SCP_FAIL" >&2
  exit 1
fi
src=""
dst=""
for arg in "$@"; do
  src="$dst"
  dst="$arg"
done
remote_path() {{
  p="${{1#*:}}"
  case "$p" in
    \~/*) printf '%s/home/%s' "{root}" "${{p#\~/}}" ;;
    /*) printf '%s%s' "{root}" "$p" ;;
    *) printf '%s/home/%s' "{root}" "$p" ;;
  esac
}}
case "$dst" in
  *:*)
    to=$(remote_path "$dst")
    mkdir -p "$(dirname "$to")"
    cp "$src" "$to"
    ;;
  *)
    from=$(remote_path "$src")
    if [ ! -f "$from" ]; then
      printf 'scp: %s: No such file or directory\n' "${{src#*:}}" >&2
      exit 1
    fi
    cp "$from" "$dst/"
    ;;
esac
"#,
        log = env.remote.path().join("scp.log").display(),
        root = fs_root.display(),
    );

    let ssh = format!(
        r#"#!/bin/sh
printf '%s\n' "$*" >> "{log}"
exit 0
"#,
        log = env.remote.path().join("ssh.log").display(),
    );

    for (name, script) in [("scp", scp), ("ssh", ssh)] {
        let path = env.bin.join(name);
        std::fs::write(&path, script).expect("Failed to write fake binary");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake binary executable");
    }
}

use std::process::Command;

#[test]
fn test_help_lists_subcommands() {
    let bin = env!("CARGO_BIN_EXE_remote-edit");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["download", "upload", "config"] {
        assert!(
            stdout.contains(command),
            "help output should list `{}`; got:\n{}",
            command,
            stdout
        );
    }
    assert!(stdout.contains(".remote-edit.toml"), "got:\n{}", stdout);
}

#[test]
fn test_download_help_mentions_dest() {
    let bin = env!("CARGO_BIN_EXE_remote-edit");

    let output = Command::new(bin)
        .args(["download", "--help"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--dest"), "got:\n{}", stdout);
    assert!(stdout.contains("--root-dir"), "got:\n{}", stdout);
    assert!(stdout.contains("--no-open"), "got:\n{}", stdout);
}

#[test]
fn test_version_flag() {
    let bin = env!("CARGO_BIN_EXE_remote-edit");

    let output = Command::new(bin).arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("remote-edit "), "got:\n{}", stdout);
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    let bin = env!("CARGO_BIN_EXE_remote-edit");

    let output = Command::new(bin).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
}

//! Runs the compiled binary: exit status, stderr diagnostics, stdout purity.

mod common;

use std::path::Path;
use std::process::{Command, Output};

use common::{write_manifest, ACTION_YML};

/// Run the binary from `cwd` with a clean environment for its own settings.
fn describe_action(cwd: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_describe-action"));
    command.current_dir(cwd).args(args);
    for (key, _) in std::env::vars() {
        if key.starts_with("DESCRIBE_ACTION_") || key == "RUST_LOG" || key == "CLICOLOR_FORCE" {
            command.env_remove(key);
        }
    }
    command.envs(envs.iter().copied());
    command.output().expect("Failed to run describe-action")
}

fn stderr_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stderr)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_missing_manifest_exits_with_one_diagnostic() {
    let dir = tempfile::tempdir().unwrap();

    let output = describe_action(dir.path(), &["-yaml", "absent.yml"], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let lines = stderr_lines(&output);
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].starts_with("Error: Failed to read manifest absent.yml: "));
}

#[test]
fn test_malformed_manifest_exits_with_one_diagnostic() {
    let (dir, _path) = write_manifest("inputs:\n  token: [oops\n");

    let output = describe_action(dir.path(), &["-yaml=action.yml"], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let lines = stderr_lines(&output);
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].starts_with("Error: Failed to parse manifest action.yml: "));
}

#[test]
fn test_single_dash_flags_select_outputs_table() {
    let (dir, _path) = write_manifest(ACTION_YML);

    let output = describe_action(dir.path(), &["-yaml", "action.yml", "-output"], &[]);

    assert!(output.status.success());
    let expected = concat!(
        "|   NAME   |        DESCRIPTION         |\n",
        "|----------|----------------------------|\n",
        "| `note`   | The note about the action. |\n",
        "| `result` | The result of the action.  |\n",
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_default_manifest_path_is_action_yml() {
    let (dir, _path) = write_manifest(ACTION_YML);

    let output = describe_action(dir.path(), &["--input"], &[]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("`github_token`"));
}

#[test]
fn test_redirected_logs_have_no_escape_codes() {
    let (dir, _path) = write_manifest(ACTION_YML);

    let output = describe_action(dir.path(), &[], &[("RUST_LOG", "debug")]);

    assert!(output.status.success());
    assert!(!output.stderr.is_empty());
    assert!(!output.stderr.contains(&0x1b));
    assert!(!output.stdout.contains(&0x1b));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("|      NAME      |"));
}

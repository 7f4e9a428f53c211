//! Basic CLI tests.
//!
//! Tests run the built `pmon` binary and check exit codes and output. The
//! config directory is pointed at a temp dir so a user's own config file
//! cannot leak in.

use std::path::Path;
use std::process::{Command, Output};

fn pmon(config_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pmon"));
    cmd.env("PMON_CONFIG_DIR", config_dir);
    cmd
}

fn run_cli(args: &[&str]) -> Output {
    let dir = tempfile::tempdir().unwrap();
    pmon(dir.path())
        .args(args)
        .output()
        .expect("Failed to execute pmon")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_help_lists_flags() {
    let output = run_cli(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    for flag in ["--cycles", "--work", "--short-break", "--long-break", "--output"] {
        assert!(text.contains(flag), "help is missing {flag}");
    }
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let output = run_cli(&["-x"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Usage"));
    assert!(!stdout(&output).contains("Time worked"));
}

#[test]
fn test_zero_minutes_is_usage_error() {
    let output = run_cli(&["-w", "0"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(!stdout(&output).contains("Time worked"));
}

#[test]
fn test_non_numeric_cycles_is_usage_error() {
    let output = run_cli(&["-c", "four"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unopenable_output_is_startup_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("status");
    let output = pmon(dir.path())
        .args(["-o", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("error: Failed to open output file"));
    assert!(!stdout(&output).contains("Time worked"));
}

#[test]
fn test_missing_config_file_is_startup_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    let output = pmon(dir.path())
        .args(["--config", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load configuration"));
}

#[test]
fn test_malformed_default_config_is_startup_failure() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[timer\n").unwrap();
    let output = pmon(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to parse configuration"));
    assert!(!stdout(&output).contains("Time worked"));
}

#[cfg(unix)]
mod signals {
    use super::*;
    use std::process::{Child, Stdio};
    use std::time::{Duration, Instant};

    fn send(child: &Child, signal: &str) {
        let status = Command::new("kill")
            .args([signal, &child.id().to_string()])
            .status()
            .expect("Failed to run kill");
        assert!(status.success());
    }

    fn wait_for(path: &Path, pred: impl Fn(&str) -> bool) -> String {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            let content = std::fs::read_to_string(path).unwrap_or_default();
            if pred(&content) {
                return content;
            }
            assert!(Instant::now() < deadline, "timed out, file holds {content:?}");
            std::thread::sleep(Duration::from_millis(50));
        }
    }

    #[test]
    fn test_sigterm_prints_summary_and_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let status_path = dir.path().join("status");
        let child = pmon(dir.path())
            .args(["-o", status_path.to_str().unwrap()])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();

        let first = wait_for(&status_path, |c| !c.is_empty());
        assert!(first.starts_with("Work: ["), "got {first:?}");
        assert!(first.ends_with("/25]\n"), "got {first:?}");

        send(&child, "-USR1");
        wait_for(&status_path, |c| c.starts_with("Work (PAUSED): "));

        send(&child, "-TERM");
        let output = child.wait_with_output().unwrap();
        assert_eq!(output.status.code(), Some(0));
        let text = stdout(&output);
        assert!(text.contains("Time worked: 0 hrs 0 mins"), "got {text:?}");
        assert!(text.contains("Time on break: 0 hrs 0 mins 0 secs"), "got {text:?}");
        assert_eq!(std::fs::read_to_string(&status_path).unwrap(), "");
    }

    #[test]
    fn test_sigint_prints_summary_and_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let status_path = dir.path().join("status");
        let child = pmon(dir.path())
            .args(["-o", status_path.to_str().unwrap()])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();

        wait_for(&status_path, |c| c.starts_with("Work: ["));

        send(&child, "-INT");
        let output = child.wait_with_output().unwrap();
        assert_eq!(output.status.code(), Some(0));
        let text = stdout(&output);
        assert!(text.contains("Time worked: 0 hrs 0 mins"), "got {text:?}");
        assert!(text.contains("Time on break: 0 hrs 0 mins 0 secs"), "got {text:?}");
        assert_eq!(std::fs::read_to_string(&status_path).unwrap(), "");
    }

    #[test]
    fn test_second_stop_signal_forces_exit_one() {
        let dir = tempfile::tempdir().unwrap();
        let status_path = dir.path().join("status");
        let child = pmon(dir.path())
            .args(["-o", status_path.to_str().unwrap()])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();

        wait_for(&status_path, |c| c.starts_with("Work: ["));

        // The loop only notices the first stop at the next tick, so the
        // second one arrives while shutdown is still pending.
        send(&child, "-INT");
        send(&child, "-INT");
        let output = child.wait_with_output().unwrap();
        assert_eq!(output.status.code(), Some(1));
        let text = stdout(&output);
        assert_eq!(text, "");
        assert!(!text.contains("Time worked"));
    }
}

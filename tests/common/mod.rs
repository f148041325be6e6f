//! Shared integration-test harness for running the `ghostwake` binary as a
//! child process.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Helpers for invoking the `ghostwake` binary.
pub struct GhostwakeProcess;

impl GhostwakeProcess {
    /// Runs a one-shot command and waits for it to exit.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Self::command(args)
            .stdin(Stdio::null())
            .output()
            .expect("failed to run ghostwake")
    }

    /// Runs `play` with `script` piped to stdin and waits for it to exit.
    #[allow(clippy::missing_panics_doc)]
    pub fn play(args: &[&str], script: &str) -> Output {
        let mut full = vec!["play"];
        full.extend_from_slice(args);
        let mut child = Self::command(&full)
            .stdin(Stdio::piped())
            .spawn()
            .expect("failed to spawn ghostwake");

        child
            .stdin
            .take()
            .expect("stdin not captured")
            .write_all(script.as_bytes())
            .expect("failed to write script");

        child.wait_with_output().expect("failed to wait for ghostwake")
    }

    /// Arguments selecting `dir` as the state directory.
    pub fn state_dir_args(dir: &Path) -> [String; 2] {
        ["--state-dir".to_string(), dir.display().to_string()]
    }

    fn command(args: &[&str]) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_ghostwake"));
        command
            .args(args)
            .arg("--quiet")
            .env_remove("GHOSTWAKE_CONFIG")
            .env_remove("GHOSTWAKE_STATE_DIR")
            .env_remove("GHOSTWAKE_STORAGE_KEY")
            .env_remove("GHOSTWAKE_LINK_DELAY")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }
}

/// Lossy stdout of a finished process.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Lossy stderr of a finished process.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

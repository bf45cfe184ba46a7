//! Shared helpers for CLI specs

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Upper bound for any single CLI invocation
const TIMEOUT: Duration = Duration::from_secs(30);

/// A scratch directory the CLI runs in
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Write a file into the project and return its path
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn bgw(&self) -> CliBuilder {
        let mut cmd = Command::cargo_bin("bgw").unwrap();
        cmd.current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .timeout(TIMEOUT);
        CliBuilder { cmd }
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    /// Feed lines to stdin; stdin closes afterwards
    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    pub fn passes(mut self) -> RunAssert {
        RunAssert::new(self.cmd.assert().success())
    }

    pub fn fails(mut self) -> RunAssert {
        RunAssert::new(self.cmd.assert().failure())
    }
}

pub struct RunAssert {
    stdout: String,
    stderr: String,
}

impl RunAssert {
    fn new(assert: assert_cmd::assert::Assert) -> Self {
        let output = assert.get_output();
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            predicate::str::contains(needle).eval(&self.stdout),
            "stdout missing {:?}:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            predicate::str::contains(needle).not().eval(&self.stdout),
            "stdout unexpectedly has {:?}:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            predicate::str::contains(needle).eval(&self.stderr),
            "stderr missing {:?}:\n{}",
            needle,
            self.stderr
        );
        self
    }

    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}

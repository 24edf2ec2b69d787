//! Shared testing utilities for sprout CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an empty `$HOME`.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write a config file at `$HOME/.sprout.yml`.
    pub fn write_config(&self, content: &str) {
        fs::write(self.home().join(".sprout.yml"), content)
            .expect("Failed to write test config file");
    }

    /// Build a command for invoking the compiled `sprout` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("sprout").expect("Failed to locate sprout binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.home());
        cmd
    }
}

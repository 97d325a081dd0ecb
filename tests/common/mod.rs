//! Shared testing utilities for processlang CLI tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const KARMA_PROGRAM: &str = "FLOW begin\n# a comment\nCONNECT link\nQUERY: what happens next?\n";

/// Testing harness providing an isolated working directory for CLI runs.
pub struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a new isolated environment with an empty `modules/` directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::create_dir_all(root.path().join("modules")).expect("Failed to create modules dir");
        Self { root }
    }

    /// Working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Path to the default module directory.
    pub fn modules_dir(&self) -> PathBuf {
        self.work_dir().join("modules")
    }

    /// Build a command for invoking the compiled binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("processlang").expect("Failed to locate binary");
        cmd.current_dir(self.work_dir());
        cmd
    }

    /// Write a module file into `modules/`.
    pub fn write_module(&self, name: &str, content: &str) {
        fs::write(self.modules_dir().join(name), content).expect("Failed to write module");
    }

    /// Write a program file into the work directory and return its path.
    pub fn write_program(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, content).expect("Failed to write program");
        path
    }

    /// Seed the two modules used by the karma program.
    pub fn seed_karma_modules(&self) {
        self.write_module("FluidCore.txt", "A");
        self.write_module("EmergentConnection.txt", "B");
    }

    /// Read a file relative to the work directory.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir().join(name)).expect("Failed to read output")
    }

    pub fn exists(&self, name: &str) -> bool {
        self.work_dir().join(name).exists()
    }
}

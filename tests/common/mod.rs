//! Shared testing utilities for boilersmith CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated registry checkout.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a registry checkout with an empty boilerplates root.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("registry");
        fs::create_dir_all(work_dir.join("src/boilerplates"))
            .expect("Failed to create boilerplates root");
        Self { root, work_dir }
    }

    /// Create a working directory without a boilerplates root.
    pub fn without_root() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("registry");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the working directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path to the boilerplates root below the working directory.
    pub fn boilerplates_root(&self) -> PathBuf {
        self.work_dir.join("src/boilerplates")
    }

    /// Seed an existing entry with stub generated files.
    pub fn seed_boilerplate(&self, name: &str) {
        let dir = self.boilerplates_root().join(name);
        fs::create_dir_all(&dir).expect("Failed to seed boilerplate directory");
        fs::write(dir.join("index.ts"), "export default {};\n")
            .expect("Failed to seed entry index");
        fs::write(dir.join("modifier.ts"), "export default async () => {};\n")
            .expect("Failed to seed entry modifier");
    }

    /// Build a command invoking the compiled `boilersmith` binary in the
    /// working directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("boilersmith").expect("Failed to locate boilersmith binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Read a file below the boilerplates root.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.boilerplates_root().join(rel))
            .expect("Failed to read generated file")
    }

    /// Assert that an entry directory exists.
    pub fn assert_entry_exists(&self, name: &str) {
        let dir = self.boilerplates_root().join(name);
        assert!(dir.is_dir(), "entry directory should exist at {}", dir.display());
    }

    /// Assert that an entry directory does not exist.
    pub fn assert_entry_not_exists(&self, name: &str) {
        let dir = self.boilerplates_root().join(name);
        assert!(!dir.exists(), "entry directory should not exist at {}", dir.display());
    }
}

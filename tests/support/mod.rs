//! Test support utilities for uscis-notifier integration tests.
//!
//! Provides an isolated environment for running the binary.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working directory and home directory. Child
/// processes use `.current_dir()` so tests can run in parallel.
pub struct Test {
    /// Working directory for the command
    pub dir: TempDir,
    /// Temporary home directory (no AWS config files)
    pub home: TempDir,
}

impl Test {
    /// Create a new environment that resolves to the packaged config.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create an environment with `notifier.toml` in the working directory.
    pub fn with_config(contents: &str) -> Self {
        let t = Self::new();
        t.write_config(contents);
        t
    }

    /// Write `notifier.toml` into the working directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.dir.path().join("notifier.toml"), contents)
            .expect("failed to write notifier.toml");
    }
}

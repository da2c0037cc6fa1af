//! Test support utilities for envsnap integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod server;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use server::one_shot;

use std::path::PathBuf;

use tempfile::TempDir;

/// Server URL nothing listens on; requests fail fast instead of hanging.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

/// Test environment with isolated temp directories.
///
/// Each test gets its own temporary project dir and home dir.
/// No process-global state is mutated; child processes use `.current_dir()`
/// so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    ///
    /// Sets up temporary directories for project and home.
    /// Does NOT change the process working directory; child commands
    /// use `.current_dir()` for isolation instead.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment that is logged in but not initialized.
    ///
    /// The configured server is unreachable, so any command that actually
    /// talks to it fails with a request error.
    pub fn logged_in() -> Self {
        Self::logged_in_at(UNREACHABLE_URL)
    }

    /// Create a logged-in environment pointed at an explicit server URL.
    ///
    /// Writes a global config directly so no network login is needed.
    pub fn logged_in_at(base_url: &str) -> Self {
        let t = Self::new();
        let config_dir = t.home.path().join(".envsnap");
        std::fs::create_dir_all(&config_dir).expect("failed to create config dir");
        std::fs::write(
            config_dir.join("config.toml"),
            format!(
                "base_url = \"{}\"\ntoken = \"test-token\"\nemail = \"dev@example.com\"\nuser_id = \"user_1\"\n",
                base_url
            ),
        )
        .expect("failed to write global config");
        t
    }

    /// Create a logged-in test environment with the project initialized.
    pub fn init(repo: &str) -> Self {
        let t = Self::logged_in();
        let output = t.init_cmd(repo);
        assert!(
            output.status.success(),
            "Failed to initialize project: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create an initialized environment with a .env file in place.
    pub fn with_env(repo: &str, contents: &str) -> Self {
        let t = Self::init(repo);
        t.write_env(contents);
        t
    }

    /// Path to the project config inside the test directory.
    pub fn project_config_path(&self) -> PathBuf {
        self.dir.path().join(".envsnap.toml")
    }

    /// Read the project config file as a string.
    pub fn project_config(&self) -> String {
        std::fs::read_to_string(self.project_config_path()).expect("failed to read project config")
    }

    /// Write the local .env file.
    pub fn write_env(&self, contents: &str) {
        std::fs::write(self.dir.path().join(".env"), contents).expect("failed to write .env");
    }

    /// Read the local .env file as a string.
    pub fn read_env(&self) -> String {
        std::fs::read_to_string(self.dir.path().join(".env")).expect("failed to read .env")
    }
}

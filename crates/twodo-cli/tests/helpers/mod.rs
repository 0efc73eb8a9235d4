#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test harness for running CLI commands with temporary databases
pub struct CliTestHarness {
    temp_dir: TempDir,
    db_path: PathBuf,
}

impl CliTestHarness {
    /// Create a new test harness with a temporary database
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");

        Self { temp_dir, db_path }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("twodo").expect("Failed to find twodo binary");

        // Run inside the temp dir so no twodo.toml from the workspace is picked up
        cmd.current_dir(self.temp_dir.path());
        cmd.env("TWODO_DATABASE_PATH", &self.db_path);
        cmd.env("TWODO_TIMEZONE", "UTC");
        cmd.env_remove("RUST_LOG");

        cmd
    }

    /// Get the database path for this test instance
    pub fn db_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Run a command and return its stdout as a string
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.run_success(args).get_output().stdout.clone();
        String::from_utf8(output).expect("stdout is not UTF-8")
    }
}

/// Common test fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// A one-off task far enough in the future to stay upcoming
    pub fn sample_task_args() -> Vec<&'static str> {
        vec!["add", "209901151000", "209901151100", "Write report", "work"]
    }

    /// Weekly standup repeated three times
    pub fn sample_repeating_task_args() -> Vec<&'static str> {
        vec![
            "add",
            "209901010900",
            "209901011000",
            "Standup %D",
            "work",
            "--repeat",
            "7",
            "3",
        ]
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check if output indicates successful task creation
    pub fn task_added() -> impl Predicate<str> {
        predicate::str::contains("Added")
    }

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error").or(predicate::str::contains("error"))
    }
}

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
        let mut cmd = Command::cargo_bin("todo").expect("Failed to find todo binary");

        // Run inside the temp dir so no stray config.toml is picked up
        cmd.current_dir(self.temp_dir.path())
            .env("TODO_DATABASE_PATH", &self.db_path)
            .env("TODO_TIMEZONE", "UTC")
            .env_remove("TODO_DEFAULT_USER")
            .env_remove("TODO_SEED_DEFAULTS")
            .env_remove("RUST_LOG");

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

    /// Creates a user and a list owned by them; the list gets id 1 in a fresh database.
    pub fn with_user_and_list(&self, user: &str, list: &str) {
        self.run_success(&["user", "add", user]);
        self.run_success(&["list", "add", list, "-d", "Things to do", "--user", user]);
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check if output contains task table headers
    pub fn has_task_table_headers() -> impl Predicate<str> {
        predicate::str::contains("ID")
            .and(predicate::str::contains("Name"))
            .and(predicate::str::contains("Due"))
    }

    /// Predicate to check if output indicates a successful creation
    pub fn created_successfully() -> impl Predicate<str> {
        predicate::str::contains("✓").and(predicate::str::contains("Added"))
    }

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error")
    }
}

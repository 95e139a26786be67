//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Fixtures that drive the binary end to end

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A fixed future date used by booking tests.
#[allow(dead_code)]
pub const TEST_DATE: &str = "2030-06-03";

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the salabook data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory path is computed but not created; `salabook
    /// init` creates it.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("salabook-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Ambient salabook environment variables are stripped so the host
    /// setup cannot leak into tests.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("salabook").expect("Failed to find salabook binary");
        cmd.env_remove("SALABOOK_DATA_DIR")
            .env_remove("SALABOOK_USER")
            .env_remove("SALABOOK_ADMIN")
            .env_remove("SALABOOK_LOG_MODE")
            .env_remove("SALABOOK_WINDOW_START")
            .env_remove("SALABOOK_WINDOW_END")
            .env_remove("SALABOOK_DEFAULT_DURATION");
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get a command builder acting as an administrator.
    pub fn admin_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--user").arg("facilities@example.com").arg("--admin");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Initialize the data directory and database.
    pub fn init(&self) {
        let output = self
            .command()
            .arg("init")
            .output()
            .expect("Failed to run init");
        assert!(
            output.status.success(),
            "Init failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Add a room as administrator and return its id.
    pub fn add_room(&self, name: &str, capacity: u32) -> i64 {
        let output = self
            .admin_command()
            .arg("room-add")
            .arg(name)
            .arg(capacity.to_string())
            .output()
            .expect("Failed to run room-add");

        assert!(
            output.status.success(),
            "room-add failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
        parse_trailing_id(&stdout)
    }

    /// Book a one-hour slot as `carlos@example.com` and return the
    /// booking id.
    pub fn book_simple(&self, room_id: i64, start: u8) -> i64 {
        let output = self
            .command()
            .arg("--user")
            .arg("carlos@example.com")
            .arg("book")
            .arg(room_id.to_string())
            .arg("--date")
            .arg(TEST_DATE)
            .arg("--start")
            .arg(start.to_string())
            .arg("--name")
            .arg("Carlos Gomez")
            .output()
            .expect("Failed to run book");

        assert!(
            output.status.success(),
            "book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
        parse_trailing_id(&stdout)
    }
}

/// Pull the numeric id off output like `... with id 3` or `... id 3)`.
#[allow(dead_code)]
fn parse_trailing_id(stdout: &str) -> i64 {
    let tail = stdout
        .rsplit("id ")
        .next()
        .expect("Output has no id");
    tail.trim()
        .trim_end_matches(')')
        .parse()
        .expect("Output id is not a number")
}

//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, configuration loading, store
//! opening, and identity handling.

use std::path::PathBuf;

use chrono::{Local, NaiveDate, NaiveDateTime};
use salabook::store::{default_data_dir, SqliteStore, StoreConfig};
use salabook::{Config, User};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Email identifying who runs the command.
    pub user: Option<String>,

    /// Act with administrator rights.
    pub admin: bool,
}

/// Resolve the data directory to use.
///
/// Priority: `--data-dir` flag (or `SALABOOK_DATA_DIR`), then the
/// configured `data_dir`, then `~/.salabook`.
pub fn resolve_data_dir(global: &GlobalOptions, config: &Config) -> Result<PathBuf, CliError> {
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.clone());
    }
    if let Some(data_dir) = config.data_dir() {
        return Ok(data_dir.to_path_buf());
    }
    default_data_dir().map_err(|e| CliError::Config(e.to_string()))
}

/// Load configuration from the data directory's `config.yaml`.
///
/// Environment variables override file values; a missing file means
/// defaults.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let config_path = global
        .data_dir
        .clone()
        .map(|dir| dir.join("config.yaml"))
        .or_else(|| default_data_dir().ok().map(|dir| dir.join("config.yaml")));

    Config::load(config_path.as_deref()).map_err(|e| CliError::Config(e.to_string()))
}

/// Open the SQLite store in the resolved data directory.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database file does not exist yet;
/// `salabook init` creates it.
pub fn open_store(global: &GlobalOptions, config: &Config) -> Result<SqliteStore, CliError> {
    let db_path = resolve_data_dir(global, config)?.join("salabook.db");

    if !db_path.exists() {
        return Err(CliError::NoDataDirectory);
    }

    SqliteStore::open(StoreConfig::new(db_path)).map_err(CliError::from)
}

/// Build the acting user from the global identity flags.
///
/// # Errors
///
/// Returns `InvalidArguments` if no identity was given; commands that
/// change data require one.
pub fn require_user(global: &GlobalOptions) -> Result<User, CliError> {
    let email = global.user.clone().ok_or_else(|| {
        CliError::InvalidArguments(
            "this command needs an identity (use --user <EMAIL> or SALABOOK_USER)".to_string(),
        )
    })?;

    let user = User::new(email);
    Ok(if global.admin { user.admin() } else { user })
}

/// The caller's clock, as a naive local timestamp.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse a `YYYY-MM-DD` date argument, defaulting to today.
pub fn parse_date_arg(date: Option<&str>) -> Result<NaiveDate, CliError> {
    match date {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| {
            CliError::InvalidArguments(format!("invalid date '{text}' (expected YYYY-MM-DD)"))
        }),
        None => Ok(local_now().date()),
    }
}

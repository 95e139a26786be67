//! Data directory initialization.
//!
//! This module provides functionality for explicitly initializing the
//! salabook data directory and database, with optional configuration file
//! creation.

use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::store::{SqliteStore, StoreConfig};

/// Options for store initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Overwrite an existing database if it exists.
    pub overwrite: bool,
    /// Create a default configuration file.
    pub create_config: bool,
}

impl InitOptions {
    /// Creates new initialization options.
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
        }
    }

    /// Sets whether to overwrite an existing database.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to create a default configuration file.
    #[must_use]
    pub const fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }
}

/// Result of an initialization operation.
#[derive(Debug)]
pub struct InitResult {
    /// Whether the data directory was created.
    pub data_dir_created: bool,
    /// Whether the database was created or recreated.
    pub database_created: bool,
    /// Whether a configuration file was created.
    pub config_created: bool,
    /// Path to the data directory.
    pub data_dir: PathBuf,
}

/// Default minimal configuration template.
const DEFAULT_CONFIG_TEMPLATE: &str = r"# Salabook Configuration File
# See documentation for available options

# Bookable hours, as a half-open range (default: 8-20)
# window_start: 8
# window_end: 20

# Duration applied when a booking does not pick one (default: 1)
# default_duration_hours: 1
";

/// Initializes the salabook data directory and database.
///
/// Creates the data directory if needed, initializes the database schema,
/// and optionally writes a default configuration file.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created, the database
/// cannot be initialized, the configuration file cannot be written, or the
/// database already exists and `overwrite` is false.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use salabook::operations::{init_store, InitOptions};
///
/// let options = InitOptions::new(PathBuf::from("/tmp/salabook-data"))
///     .with_create_config(true);
/// let result = init_store(&options).unwrap();
/// println!("Database created: {}", result.database_created);
/// ```
pub fn init_store(options: &InitOptions) -> Result<InitResult> {
    let mut result = InitResult {
        data_dir_created: false,
        database_created: false,
        config_created: false,
        data_dir: options.data_dir.clone(),
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    let db_path = options.data_dir.join("salabook.db");
    let db_exists = db_path.exists();

    if db_exists && !options.overwrite {
        return Err(Error::Validation {
            field: "database".into(),
            message: format!(
                "Database already exists at {}. Use --overwrite to replace it.",
                db_path.display()
            ),
        });
    }

    if db_exists && options.overwrite {
        fs::remove_file(&db_path)?;
    }

    let _store = SqliteStore::open(StoreConfig::new(&db_path))?;
    result.database_created = true;

    if options.create_config {
        let config_path = options.data_dir.join("config.yaml");
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            result.config_created = true;
        }
    }

    Ok(result)
}

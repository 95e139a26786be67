//! Storage configuration and database path resolution.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Configuration for opening a [`super::SqliteStore`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use salabook::store::StoreConfig;
///
/// let config = StoreConfig::new("/tmp/salabook.db")
///     .with_busy_timeout(Duration::from_secs(10));
/// assert!(config.auto_create);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to create the database and its parent directory if missing.
    pub auto_create: bool,
    /// Whether to open the database in read-only mode.
    pub read_only: bool,
}

impl StoreConfig {
    /// Creates a configuration with default settings.
    ///
    /// Defaults: 5000ms busy timeout, `auto_create` on, read-write.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
            read_only: false,
        }
    }

    /// Sets the busy timeout duration.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Configures the store to be opened in read-only mode.
    ///
    /// When read-only is enabled, `auto_create` is automatically disabled.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory, `~/.salabook`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use salabook::store::default_data_dir;
///
/// let data_dir = default_data_dir().unwrap();
/// println!("Data directory: {}", data_dir.display());
/// ```
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".salabook"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "Cannot determine home directory".into(),
        })
}

/// Resolves the database path using environment variables or defaults.
///
/// The resolution order is:
/// 1. `$SALABOOK_DATA_DIR/salabook.db` if `SALABOOK_DATA_DIR` is set
/// 2. `~/.salabook/salabook.db` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined and
/// `SALABOOK_DATA_DIR` is not set.
pub fn resolve_store_path() -> Result<PathBuf> {
    if let Ok(data_dir) = std::env::var("SALABOOK_DATA_DIR") {
        Ok(PathBuf::from(data_dir).join("salabook.db"))
    } else {
        Ok(default_data_dir()?.join("salabook.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = StoreConfig::new("/tmp/test.db");
        assert_eq!(config.path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.busy_timeout, Duration::from_millis(5000));
        assert!(config.auto_create);
        assert!(!config.read_only);
    }

    #[test]
    fn test_config_with_busy_timeout() {
        let config = StoreConfig::new("/tmp/test.db").with_busy_timeout(Duration::from_secs(10));
        assert_eq!(config.busy_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_config_read_only() {
        let config = StoreConfig::new("/tmp/test.db").read_only();
        assert!(config.read_only);
        assert!(!config.auto_create);
    }

    #[test]
    fn test_default_data_dir() {
        if home::home_dir().is_some() {
            let dir = default_data_dir().unwrap();
            assert!(dir.ends_with(".salabook"));
        }
    }

    #[test]
    fn test_resolve_store_path_with_env() {
        std::env::set_var("SALABOOK_DATA_DIR", "/custom/data");
        let path = resolve_store_path().unwrap();
        assert_eq!(path, PathBuf::from("/custom/data/salabook.db"));
        std::env::remove_var("SALABOOK_DATA_DIR");
    }
}

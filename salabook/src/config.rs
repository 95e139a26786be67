//! Application configuration.
//!
//! Configuration is resolved in three layers, later layers winning:
//! built-in defaults, an optional YAML file, then `SALABOOK_*` environment
//! variables. The file usually lives at `~/.salabook/config.yaml` and is
//! created by the init operation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hour::{Hour, OperatingWindow};
use crate::validate::MAX_DURATION_HOURS;

/// Resolved application configuration.
///
/// # Examples
///
/// ```
/// use salabook::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new().build().unwrap();
/// assert_eq!(config.window().slot_count(), 12);
/// assert_eq!(config.default_duration_hours(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    window: OperatingWindow,
    default_duration_hours: u8,
    data_dir: Option<PathBuf>,
}

impl Config {
    /// Returns the bookable operating window.
    #[must_use]
    pub const fn window(&self) -> OperatingWindow {
        self.window
    }

    /// Returns the duration applied when a request does not pick one.
    #[must_use]
    pub const fn default_duration_hours(&self) -> u8 {
        self.default_duration_hours
    }

    /// Returns the configured data directory override, if any.
    #[must_use]
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// Loads configuration from an optional YAML file plus environment
    /// overrides.
    ///
    /// A missing file is not an error; defaults apply. Recognized
    /// environment variables: `SALABOOK_WINDOW_START`,
    /// `SALABOOK_WINDOW_END`, `SALABOOK_DEFAULT_DURATION`,
    /// `SALABOOK_DATA_DIR`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting values fail validation.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigBuilder::new();

        if let Some(path) = path {
            if path.exists() {
                let text = std::fs::read_to_string(path)?;
                // A file of nothing but comments parses as YAML null.
                let file: Option<FileConfig> = serde_yaml::from_str(&text)?;
                if let Some(file) = file {
                    builder = builder.apply_file(&file)?;
                }
            }
        }

        builder = builder.apply_env()?;
        builder.build()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: OperatingWindow::default(),
            default_duration_hours: 1,
            data_dir: None,
        }
    }
}

/// The YAML shape of the configuration file.
///
/// All fields are optional; absent fields keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    window_start: Option<u8>,
    window_end: Option<u8>,
    default_duration_hours: Option<u8>,
    data_dir: Option<PathBuf>,
}

/// Builder for [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    window_start: Option<u8>,
    window_end: Option<u8>,
    default_duration_hours: Option<u8>,
    data_dir: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Creates a builder with nothing overridden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operating window.
    #[must_use]
    pub const fn window(mut self, window: OperatingWindow) -> Self {
        self.window_start = Some(window.start().value());
        self.window_end = Some(window.end().value());
        self
    }

    /// Sets the default booking duration in hours.
    #[must_use]
    pub const fn default_duration_hours(mut self, hours: u8) -> Self {
        self.default_duration_hours = Some(hours);
        self
    }

    /// Sets the data directory override.
    #[must_use]
    pub fn data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    fn apply_file(mut self, file: &FileConfig) -> Result<Self> {
        if let Some(start) = file.window_start {
            self.window_start = Some(start);
        }
        if let Some(end) = file.window_end {
            self.window_end = Some(end);
        }
        if let Some(duration) = file.default_duration_hours {
            self.default_duration_hours = Some(duration);
        }
        if let Some(ref data_dir) = file.data_dir {
            self.data_dir = Some(data_dir.clone());
        }
        Ok(self)
    }

    fn apply_env(mut self) -> Result<Self> {
        if let Ok(value) = std::env::var("SALABOOK_WINDOW_START") {
            self.window_start = Some(parse_env_hour("SALABOOK_WINDOW_START", &value)?);
        }
        if let Ok(value) = std::env::var("SALABOOK_WINDOW_END") {
            self.window_end = Some(parse_env_hour("SALABOOK_WINDOW_END", &value)?);
        }
        if let Ok(value) = std::env::var("SALABOOK_DEFAULT_DURATION") {
            let duration = value.parse::<u8>().map_err(|_| Error::Validation {
                field: "SALABOOK_DEFAULT_DURATION".into(),
                message: format!("'{value}' is not a valid duration"),
            })?;
            self.default_duration_hours = Some(duration);
        }
        if let Ok(value) = std::env::var("SALABOOK_DATA_DIR") {
            self.data_dir = Some(PathBuf::from(value));
        }
        Ok(self)
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the window bounds do not form a valid window or
    /// the default duration is outside the selectable range.
    pub fn build(self) -> Result<Config> {
        let defaults = Config::default();

        let start = match self.window_start {
            Some(value) => Hour::try_from(value)?,
            None => defaults.window.start(),
        };
        let end = match self.window_end {
            Some(value) => Hour::try_from(value)?,
            None => defaults.window.end(),
        };
        let window = OperatingWindow::new(start, end)?;

        let default_duration_hours = self
            .default_duration_hours
            .unwrap_or(defaults.default_duration_hours);
        if default_duration_hours == 0 || default_duration_hours > MAX_DURATION_HOURS {
            return Err(Error::Validation {
                field: "default_duration_hours".into(),
                message: format!(
                    "must be between 1 and {MAX_DURATION_HOURS}, got {default_duration_hours}"
                ),
            });
        }

        Ok(Config {
            window,
            default_duration_hours,
            data_dir: self.data_dir,
        })
    }
}

fn parse_env_hour(variable: &str, value: &str) -> Result<u8> {
    value.parse::<u8>().map_err(|_| Error::Validation {
        field: variable.into(),
        message: format!("'{value}' is not a valid hour"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(value: u8) -> Hour {
        Hour::try_from(value).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.window().start(), h(8));
        assert_eq!(config.window().end(), h(20));
        assert_eq!(config.default_duration_hours(), 1);
        assert!(config.data_dir().is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let window = OperatingWindow::new(h(9), h(18)).unwrap();
        let config = ConfigBuilder::new()
            .window(window)
            .default_duration_hours(2)
            .data_dir("/srv/salabook")
            .build()
            .unwrap();

        assert_eq!(config.window(), window);
        assert_eq!(config.default_duration_hours(), 2);
        assert_eq!(config.data_dir(), Some(Path::new("/srv/salabook")));
    }

    #[test]
    fn test_builder_rejects_bad_duration() {
        let err = ConfigBuilder::new()
            .default_duration_hours(5)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("default_duration_hours"));

        assert!(ConfigBuilder::new()
            .default_duration_hours(0)
            .build()
            .is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("config.yaml"))).unwrap();
        assert_eq!(config.window().slot_count(), 12);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "window_start: 9\nwindow_end: 17\ndefault_duration_hours: 2\n")
            .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.window().start(), h(9));
        assert_eq!(config.window().end(), h(17));
        assert_eq!(config.default_duration_hours(), 2);
    }

    #[test]
    fn test_load_rejects_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "window_start: 9\nbogus: true\n").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_rejects_inverted_window() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "window_start: 18\nwindow_end: 9\n").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }
}

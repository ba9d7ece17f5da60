//! # Configuration Module
//!
//! Handles loading and validating serial link configuration from TOML
//! files.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Serial link configuration
///
/// Built once at startup and not mutated afterwards: file values and
/// command-line overrides are merged first, then the result is
/// validated and handed to the transmit path by shared reference.
#[derive(Debug, Deserialize, Clone)]
pub struct SerialLinkConfig {
    /// Device node of the light controller
    #[serde(default = "default_device_path")]
    pub device_path: String,

    /// Line rate in baud
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,
}

// Default value functions
fn default_device_path() -> String {
    "/dev/ttyUSB0".to_string()
}

fn default_baud_rate() -> u32 {
    10_000
}

impl Default for SerialLinkConfig {
    fn default() -> Self {
        Self {
            device_path: default_device_path(),
            baud_rate: default_baud_rate(),
        }
    }
}

impl SerialLinkConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use nuclight::config::SerialLinkConfig;
    ///
    /// let config = SerialLinkConfig::load("config/default.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: SerialLinkConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// Runs again after command-line overrides are merged in, so the
    /// checks hold no matter where a value came from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.device_path.is_empty() {
            return Err(ConfigError::Invalid(
                "device_path cannot be empty".to_string(),
            ));
        }

        if self.baud_rate == 0 {
            return Err(ConfigError::Invalid(
                "baud_rate must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SerialLinkConfig::default();
        assert_eq!(config.device_path, "/dev/ttyUSB0");
        assert_eq!(config.baud_rate, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_config_from_file() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let toml_content = r#"
device_path = "/dev/ttyS3"
baud_rate = 19200
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = SerialLinkConfig::load(temp_file.path()).unwrap();
        assert_eq!(config.device_path, "/dev/ttyS3");
        assert_eq!(config.baud_rate, 19_200);
    }

    #[test]
    fn test_load_fills_in_defaults() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"device_path = \"/dev/ttyS7\"\n")
            .unwrap();
        temp_file.flush().unwrap();

        let config = SerialLinkConfig::load(temp_file.path()).unwrap();
        assert_eq!(config.device_path, "/dev/ttyS7");
        assert_eq!(config.baud_rate, 10_000);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SerialLinkConfig::load("/nuclight-test/no-such-config.toml").unwrap_err();
        match err {
            ConfigError::Read { path, .. } => {
                assert_eq!(path, "/nuclight-test/no-such-config.toml");
            }
            other => panic!("expected Read, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"device_path = [not toml\n").unwrap();
        temp_file.flush().unwrap();

        let err = SerialLinkConfig::load(temp_file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_device_path() {
        let config = SerialLinkConfig {
            device_path: String::new(),
            baud_rate: 10_000,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_baud_rate() {
        let config = SerialLinkConfig {
            device_path: "/dev/ttyUSB0".to_string(),
            baud_rate: 0,
        };
        assert!(config.validate().is_err());
    }
}

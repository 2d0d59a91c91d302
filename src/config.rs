//! Runtime configuration.
//! Defaults, then an optional TOML file, then environment overrides.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(String),
}

/// Program configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Working directory for demo files. `None` means the process current dir.
    pub workdir: Option<PathBuf>,
    /// Field separator of every CSV file.
    pub delimiter: u8,
    /// Name of the sample client file.
    pub clients_file: String,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workdir: None,
            delimiter: b';',
            clients_file: "clients.csv".to_string(),
            log_filter: "warn,course_demos=info".to_string(),
        }
    }
}

/// On-disk shape; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    workdir: Option<PathBuf>,
    delimiter: Option<String>,
    clients_file: Option<String>,
    log_filter: Option<String>,
}

impl Config {
    /// Build the configuration from defaults, `path` if given, then env vars.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = path {
            let text = fs::read_to_string(path)?;
            config.apply_toml(&text)?;
        }
        config.apply_env_from(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Merge the keys present in a TOML document.
    pub fn apply_toml(&mut self, text: &str) -> Result<(), ConfigError> {
        let file: ConfigFile = toml::from_str(text)?;
        if let Some(workdir) = file.workdir {
            self.workdir = Some(workdir);
        }
        if let Some(delimiter) = file.delimiter {
            self.delimiter = parse_delimiter(&delimiter)?;
        }
        if let Some(clients_file) = file.clients_file {
            self.clients_file = clients_file;
        }
        if let Some(log_filter) = file.log_filter {
            self.log_filter = log_filter;
        }
        Ok(())
    }

    /// Merge `COURSE_WORKDIR`, `COURSE_DELIMITER` and `COURSE_LOG` as
    /// returned by `lookup`.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(workdir) = lookup("COURSE_WORKDIR") {
            self.workdir = Some(PathBuf::from(workdir));
        }
        if let Some(delimiter) = lookup("COURSE_DELIMITER") {
            self.delimiter = parse_delimiter(&delimiter)?;
        }
        if let Some(filter) = lookup("COURSE_LOG") {
            self.log_filter = filter;
        }
        Ok(())
    }
}

fn parse_delimiter(value: &str) -> Result<u8, ConfigError> {
    match value.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(ConfigError::InvalidDelimiter(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.delimiter, b';');
        assert_eq!(config.clients_file, "clients.csv");
        assert!(config.workdir.is_none());
    }

    #[test]
    fn test_apply_toml_overrides_present_keys_only() {
        let mut config = Config::default();
        config
            .apply_toml("delimiter = \",\"\nworkdir = \"/tmp/course\"\n")
            .unwrap();
        assert_eq!(config.delimiter, b',');
        assert_eq!(config.workdir, Some(PathBuf::from("/tmp/course")));
        assert_eq!(config.clients_file, "clients.csv");
    }

    #[test]
    fn test_rejects_multi_char_delimiter() {
        let mut config = Config::default();
        let err = config.apply_toml("delimiter = \";;\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDelimiter(_)));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let mut config = Config::default();
        assert!(matches!(
            config.apply_toml("colour = \"blue\""),
            Err(ConfigError::Parse(_))
        ));
    }

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_env_overrides_toml() {
        let mut config = Config::default();
        config
            .apply_toml("delimiter = \",\"\nworkdir = \"/from/toml\"\nclients_file = \"c.csv\"\n")
            .unwrap();
        config
            .apply_env_from(env(&[
                ("COURSE_WORKDIR", "/from/env"),
                ("COURSE_DELIMITER", "|"),
                ("COURSE_LOG", "debug"),
            ]))
            .unwrap();

        assert_eq!(config.workdir, Some(PathBuf::from("/from/env")));
        assert_eq!(config.delimiter, b'|');
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.clients_file, "c.csv");
    }

    #[test]
    fn test_env_absent_keeps_values() {
        let mut config = Config::default();
        config.apply_toml("delimiter = \",\"").unwrap();
        config.apply_env_from(env(&[])).unwrap();
        assert_eq!(config.delimiter, b',');
        assert!(config.workdir.is_none());
    }

    #[test]
    fn test_env_rejects_bad_delimiter() {
        let mut config = Config::default();
        let err = config
            .apply_env_from(env(&[("COURSE_DELIMITER", "ab")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDelimiter(d) if d == "ab"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

use crate::error::{Error, Result};
use crate::types::HashAlgorithm;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Log level for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Configuration for the renaming process
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether to descend into subdirectories
    pub recursive: bool,

    /// Hash function applied to file contents
    pub algorithm: HashAlgorithm,

    /// Number of hex characters appended to the stem
    pub length: usize,

    /// Joins the stem and the digest
    pub separator: String,

    /// Whether to run without making changes
    pub dry_run: bool,

    /// Log level
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recursive: false,
            algorithm: HashAlgorithm::Sha256,
            length: 8,
            separator: "-".to_string(),
            dry_run: false,
            log_level: LogLevel::Info,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .map_err(|e| Error::Configuration(format!("Failed to open config file: {}", e)))?;

        let config: Config = serde_json::from_reader(file)
            .map_err(|e| Error::Configuration(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .map_err(|e| Error::Configuration(format!("Failed to create config file: {}", e)))?;

        serde_json::to_writer_pretty(file, self)
            .map_err(|e| Error::Configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Lengths beyond the digest are rejected rather than clamped
        let max = self.algorithm.hex_len();
        if self.length == 0 || self.length > max {
            return Err(Error::Configuration(format!(
                "Digest length must be between 1 and {} for {}, got {}",
                max, self.algorithm, self.length
            )));
        }

        if self
            .separator
            .chars()
            .any(|c| c == '/' || c == '\\' || c == '\0')
        {
            return Err(Error::Configuration(format!(
                "Separator must not contain a path separator: {:?}",
                self.separator
            )));
        }

        Ok(())
    }
}

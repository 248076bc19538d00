//! Configuration module
//!
//! Loads the initial generator options and the acknowledgment duration from
//! an optional TOML file.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::charset::CharClass;
use crate::generator::{GeneratorOptions, MAX_LENGTH, MIN_LENGTH};

pub const CONFIG_PATH_ENV: &str = "PWD_GENERATOR_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./pwd-generator.toml";

/// How long the "copied" acknowledgment stays up after a successful copy.
pub const DEFAULT_COPIED_ACK: Duration = Duration::from_secs(2);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Config length {length} is outside the allowed range {min}..={max}")]
    InvalidLength { length: usize, min: usize, max: usize },
}

/// On-disk layout of the config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    generator: GeneratorSection,
    clipboard: ClipboardSection,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GeneratorSection {
    length: usize,
    uppercase: bool,
    lowercase: bool,
    numbers: bool,
    symbols: bool,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        let options = GeneratorOptions::default();
        Self {
            length: options.length(),
            uppercase: options.include_uppercase,
            lowercase: options.include_lowercase,
            numbers: options.include_numbers,
            symbols: options.include_symbols,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ClipboardSection {
    copied_ack_ms: u64,
}

impl Default for ClipboardSection {
    fn default() -> Self {
        Self {
            copied_ack_ms: DEFAULT_COPIED_ACK.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Options the form starts with.
    pub options: GeneratorOptions,
    pub copied_ack: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            options: GeneratorOptions::default(),
            copied_ack: DEFAULT_COPIED_ACK,
        }
    }
}

impl TryFrom<ConfigFile> for GeneratorConfig {
    type Error = ConfigError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        let section = file.generator;
        let mut options = GeneratorOptions::default();
        options
            .set_length(section.length)
            .map_err(|_| ConfigError::InvalidLength {
                length: section.length,
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            })?;
        options.set_enabled(CharClass::Uppercase, section.uppercase);
        options.set_enabled(CharClass::Lowercase, section.lowercase);
        options.set_enabled(CharClass::Digits, section.numbers);
        options.set_enabled(CharClass::Symbols, section.symbols);

        Ok(Self {
            options,
            copied_ack: Duration::from_millis(file.clipboard.copied_ack_ms),
        })
    }
}

/// Returns the config file path.
///
/// Priority:
/// 1. Environment variable `PWD_GENERATOR_CONFIG`
/// 2. Default path `./pwd-generator.toml`
pub fn get_config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

impl GeneratorConfig {
    /// Loads the config from [`get_config_path`].
    ///
    /// A missing file at the default path yields the defaults. A path given
    /// through `PWD_GENERATOR_CONFIG` must exist.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(CONFIG_PATH_ENV).is_some();
        let path = get_config_path();

        if !explicit && !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        Self::from_path(&path)
    }

    /// Loads the config from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is not valid TOML, names an unknown key, or sets a length
    ///   outside `8..=32`
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Config loading FAILED: FileNotFound {:?}", path);
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Config loaded from {:?}: length {}, copied ack {:?}",
            path,
            config.options.length(),
            config.copied_ack
        );

        Ok(config)
    }

    /// Parses config file contents. Keys that are not present keep their
    /// defaults.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        let config = Self::try_from(file)?;

        #[cfg(feature = "tracing")]
        {
            if config.options.enabled_classes().next().is_none() {
                tracing::warn!("Config disables every character class");
            }
        }

        Ok(config)
    }
}

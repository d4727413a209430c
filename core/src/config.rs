//! Runner defaults loaded from YAML.
//!
//! A config file seeds the option table before any argument is applied, so
//! a project can default to, say, documentation output with color. Command
//! line arguments always win over the file.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! defaults:
//!   formatter: documentation
//!   color: true
//!   backtrace: false
//!   fail_fast: true
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::formatter::{DEFAULT_FORMATTER, VALID_FORMATTERS, is_valid_formatter};
use crate::parser::ArgumentParser;
use crate::table::OptionTable;

/// Option values applied before parsing.
///
/// Missing fields take the parser's built-in defaults.
///
/// # Examples
///
/// ```
/// # use specrunner_args_core::RunnerDefaults;
/// let defaults = RunnerDefaults::default();
/// assert_eq!(defaults.formatter, "p");
/// assert!(!defaults.color);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerDefaults {
    /// Formatter value; must be one of the accepted formatter values.
    pub formatter: String,
    pub color: bool,
    pub backtrace: bool,
    pub fail_fast: bool,
}

impl Default for RunnerDefaults {
    fn default() -> Self {
        Self {
            formatter: DEFAULT_FORMATTER.to_string(),
            color: false,
            backtrace: false,
            fail_fast: false,
        }
    }
}

/// Top-level runner configuration document.
///
/// # Examples
///
/// ```no_run
/// use specrunner_args_core::RunnerConfig;
///
/// let config = RunnerConfig::load(".specrunner.yml").unwrap();
/// let table = config.parser().parse(std::env::args()).unwrap();
/// println!("formatter: {}", table.formatter());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Configuration format version (e.g., `"1.0"`).
    pub version: String,
    #[serde(default)]
    pub defaults: RunnerDefaults,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            defaults: RunnerDefaults::default(),
        }
    }
}

impl RunnerConfig {
    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](ConfigError::IoError) if the file cannot be read,
    /// [`YamlError`](ConfigError::YamlError) if parsing fails, or
    /// [`InvalidConfig`](ConfigError::InvalidConfig) if a value is rejected
    /// by [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(BufReader::new(file))?;
        config.validate()?;
        debug!(path = %path.display(), formatter = %config.defaults.formatter, "Loaded runner config");
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](ConfigError::IoError) if the file cannot be
    /// written, or [`YamlError`](ConfigError::YamlError) if serialization
    /// fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Checks the values the parser itself would refuse.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfig`](ConfigError::InvalidConfig) for an empty
    /// version or a formatter outside the accepted values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "version cannot be empty".to_string(),
            ));
        }
        if !is_valid_formatter(&self.defaults.formatter) {
            return Err(ConfigError::InvalidConfig(format!(
                "unknown formatter '{}', expected one of: {}",
                self.defaults.formatter,
                VALID_FORMATTERS.join(", ")
            )));
        }
        Ok(())
    }

    /// Builds the starting option table from the configured defaults.
    ///
    /// An unvalidated formatter falls back to the built-in default.
    pub fn option_table(&self) -> OptionTable {
        let defaults = &self.defaults;
        let formatter = if is_valid_formatter(&defaults.formatter) {
            defaults.formatter.as_str()
        } else {
            DEFAULT_FORMATTER
        };
        OptionTable::default()
            .with_formatter(formatter)
            .with_color(defaults.color)
            .with_backtrace(defaults.backtrace)
            .with_fail_fast(defaults.fail_fast)
    }

    /// Returns a parser seeded with [`option_table`](Self::option_table).
    pub fn parser(&self) -> ArgumentParser {
        ArgumentParser::with_defaults(self.option_table())
    }
}

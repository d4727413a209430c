//! Error types for argument parsing and runner configuration.
//!
//! [`ParseError`] covers the three ways a parse can fail. Every variant is
//! fatal to the call that produced it; no partially populated
//! [`OptionTable`](crate::OptionTable) is ever handed back.
//!
//! [`ConfigError`] covers loading and validating a runner defaults file.

use thiserror::Error;

/// Errors raised while turning raw arguments into an option table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing left to parse once the program name has been removed.
    #[error("invalid number of arguments, type -h for help")]
    InvalidArguments,

    /// A long or short option name outside the fixed option set.
    #[error("invalid option {0}")]
    InvalidOption(String),

    /// The formatter value is missing or not one of the accepted values.
    ///
    /// Holds the rejected value, or `None` when the arguments ran out.
    #[error("invalid argument for formatter: {}", .0.as_deref().unwrap_or("<missing>"))]
    InvalidFormatterArgument(Option<String>),
}

/// Errors that can occur while loading or saving a runner config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The document parsed but holds values the parser would reject.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_error_names_rejected_value() {
        let err = ParseError::InvalidFormatterArgument(Some("xml".into()));
        assert_eq!(err.to_string(), "invalid argument for formatter: xml");
    }

    #[test]
    fn test_formatter_error_without_value() {
        let err = ParseError::InvalidFormatterArgument(None);
        assert_eq!(err.to_string(), "invalid argument for formatter: <missing>");
    }

    #[test]
    fn test_invalid_option_names_flag() {
        let err = ParseError::InvalidOption("bogus".into());
        assert_eq!(err.to_string(), "invalid option bogus");
    }
}

//! Command-line option parsing for a spec runner front end.
//!
//! This crate turns the raw process arguments of a spec runner into an
//! [`OptionTable`] that tells the runner what to run and how to report it:
//!
//! - [`normalize_arguments`]: drops the program path and extracts the
//!   positional spec file.
//! - [`ArgumentParser`]: walks long options (`--fail-fast`), short clusters
//!   (`-bc`) and the formatter option (`-fd`, `-f d`, `--formatter d`).
//! - [`resolve_option`] / [`apply_option`]: alias resolution through
//!   [`ALIASES`] and the [`SETTERS`] dispatch table.
//! - [`RunnerConfig`]: YAML defaults applied before any argument.
//!
//! Parsing fails with a [`ParseError`]; nothing is returned on failure.
//!
//! # Example
//!
//! ```
//! use specrunner_args_core::*;
//!
//! let table = parse_arguments(["CalculatorSpec.php", "-cfd", "--fail-fast"]).unwrap();
//! assert_eq!(table.spec_file(), "CalculatorSpec.php");
//! assert!(table.color());
//! assert_eq!(table.get("colour").unwrap(), OptionValue::Bool(true));
//! assert_eq!(table.formatter_kind(), Formatter::Documentation);
//!
//! assert_eq!(
//!     parse_arguments(["-f", "xml"]),
//!     Err(ParseError::InvalidFormatterArgument(Some("xml".into())))
//! );
//! ```

mod alias;
mod binder;
mod config;
mod cursor;
mod error;
mod formatter;
mod normalize;
pub mod output;
mod parser;
mod resolver;
mod table;

pub use alias::{ALIASES, AliasTarget, alias_for};
pub use binder::{bind_from_cluster_peek, bind_from_next_token};
pub use config::{RunnerConfig, RunnerDefaults};
pub use cursor::{TokenCursor, TokenKind, classify_token};
pub use error::{ConfigError, ParseError, Result};
pub use formatter::{
    DEFAULT_FORMATTER, Formatter, VALID_FORMATTERS, is_formatter_letter, is_valid_formatter,
};
pub use normalize::{NormalizedArgs, normalize_arguments};
pub use parser::{ArgumentParser, parse_arguments};
pub use resolver::{FORMATTER, SETTERS, Setter, apply_option, resolve_option};
pub use table::{OptionFamily, OptionTable, OptionValue};

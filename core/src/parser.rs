//! Argument parsing for the spec runner.
//!
//! The parser normalizes the raw list (see
//! [`normalize_arguments`](crate::normalize_arguments)) and then walks the
//! remaining tokens once:
//!
//! - `--name` switches an option on, except `--formatter`, which binds the
//!   next token as its value.
//! - `-abc` switches each letter's option on. `f` binds the next letter when
//!   that letter is a formatter value, otherwise the next whole token.
//! - A bare `-` or `--` names no option and is rejected.
//! - Any other token is ignored.
//!
//! The outer cursor moves exactly once per token visited. The only other
//! movement is the formatter binder consuming its detached value.

use tracing::debug;

use crate::binder::{bind_from_cluster_peek, bind_from_next_token};
use crate::cursor::{TokenCursor, TokenKind, classify_token};
use crate::error::{ParseError, Result};
use crate::normalize::normalize_arguments;
use crate::resolver::{FORMATTER, resolve_option, set_canonical};
use crate::table::OptionTable;

/// Parses runner arguments into an [`OptionTable`].
///
/// A parser starts from [`OptionTable::default`] unless built with
/// [`with_defaults`](ArgumentParser::with_defaults), e.g. from a
/// [`RunnerConfig`](crate::RunnerConfig).
///
/// # Examples
///
/// ```
/// use specrunner_args_core::ArgumentParser;
///
/// let table = ArgumentParser::new()
///     .parse(["CalculatorSpec.php", "-bfd", "--fail-fast"])
///     .unwrap();
/// assert_eq!(table.spec_file(), "CalculatorSpec.php");
/// assert!(table.backtrace());
/// assert_eq!(table.formatter(), "d");
/// assert!(table.fail_fast());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArgumentParser {
    defaults: OptionTable,
}

impl ArgumentParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `defaults` as the starting table for every parse.
    pub fn with_defaults(defaults: OptionTable) -> Self {
        Self { defaults }
    }

    /// Parses `args`, where the first item may be the program path.
    ///
    /// # Errors
    ///
    /// - [`ParseError::InvalidArguments`] when nothing is left to parse.
    /// - [`ParseError::InvalidOption`] for an unknown long or short option.
    /// - [`ParseError::InvalidFormatterArgument`] for a missing or unknown
    ///   formatter value.
    pub fn parse<I, S>(&self, args: I) -> Result<OptionTable>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let normalized = normalize_arguments(args.into_iter().map(Into::into).collect())?;
        let mut table = self.defaults.clone().with_spec_file(normalized.spec_file);

        let mut tokens = TokenCursor::new(&normalized.remaining);
        while let Some(token) = tokens.current() {
            table = match classify_token(token) {
                TokenKind::Long(name) => apply_long(table, name, &mut tokens)?,
                TokenKind::Short(letters) => apply_cluster(table, letters, &mut tokens)?,
                TokenKind::Stray => {
                    debug!(token = %token, "Ignoring stray argument");
                    table
                }
            };
            tokens.next();
        }

        Ok(table)
    }
}

/// Parses `args` with the built-in defaults.
pub fn parse_arguments<I, S>(args: I) -> Result<OptionTable>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ArgumentParser::new().parse(args)
}

fn apply_long(
    table: OptionTable,
    name: &str,
    tokens: &mut TokenCursor<'_, String>,
) -> Result<OptionTable> {
    match resolve_option(name)? {
        FORMATTER => bind_from_next_token(table, tokens),
        canonical => set_canonical(table, canonical, true)
            .ok_or_else(|| ParseError::InvalidOption(name.to_string())),
    }
}

fn apply_cluster(
    mut table: OptionTable,
    cluster: &str,
    tokens: &mut TokenCursor<'_, String>,
) -> Result<OptionTable> {
    if cluster.is_empty() {
        return Err(ParseError::InvalidOption(String::new()));
    }

    let chars: Vec<char> = cluster.chars().collect();
    let mut letters = TokenCursor::new(&chars);

    while let Some(&letter) = letters.current() {
        let mut buf = [0u8; 4];
        let key = letter.encode_utf8(&mut buf);
        table = match resolve_option(key)? {
            FORMATTER => match bind_from_cluster_peek(table, &mut letters) {
                Ok(table) => table,
                Err(table) => {
                    letters.next();
                    bind_from_next_token(table, tokens)?
                }
            },
            canonical => {
                letters.next();
                set_canonical(table, canonical, true)
                    .ok_or_else(|| ParseError::InvalidOption(key.to_string()))?
            }
        };
    }

    Ok(table)
}

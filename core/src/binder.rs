//! Binding values to the formatter option.
//!
//! The formatter takes its value either from inside the short cluster that
//! named it (`-fd`) or from the following whole token (`-f d`,
//! `--formatter documentation`). The in-cluster form wins whenever the letter
//! right after `f` is itself an accepted value.

use tracing::debug;

use crate::cursor::TokenCursor;
use crate::error::{ParseError, Result};
use crate::formatter::{is_formatter_letter, is_valid_formatter};
use crate::table::OptionTable;

/// Binds the token after the cursor's current one as the formatter.
///
/// On success the cursor rests on the consumed value, so the caller's
/// regular step moves past it.
///
/// # Errors
///
/// Returns [`ParseError::InvalidFormatterArgument`] when there is no next
/// token or it is not an accepted value.
pub fn bind_from_next_token(
    table: OptionTable,
    tokens: &mut TokenCursor<'_, String>,
) -> Result<OptionTable> {
    tokens.next();
    match tokens.current() {
        Some(value) if is_valid_formatter(value) => {
            debug!(formatter = %value, "Bound formatter from next argument");
            Ok(table.with_formatter(value))
        }
        other => Err(ParseError::InvalidFormatterArgument(other.cloned())),
    }
}

/// Binds the letter after `f` in a cluster, if it is an accepted value.
///
/// On success the cluster cursor moves past both the flag and the value.
/// Otherwise nothing moves and the table comes back unchanged in `Err`, so
/// the caller can fall back to [`bind_from_next_token`].
pub fn bind_from_cluster_peek(
    table: OptionTable,
    letters: &mut TokenCursor<'_, char>,
) -> std::result::Result<OptionTable, OptionTable> {
    match letters.peek() {
        Some(&letter) if is_formatter_letter(letter) => {
            let mut buf = [0u8; 4];
            let value = letter.encode_utf8(&mut buf);
            debug!(formatter = %value, "Bound formatter from short cluster");
            letters.next();
            letters.next();
            Ok(table.with_formatter(value))
        }
        _ => Err(table),
    }
}

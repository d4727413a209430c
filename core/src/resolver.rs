//! Option name resolution and the setter dispatch table.
//!
//! Raw keys come straight from the command line: a single letter from a
//! short cluster (`c`) or a long name without its dashes (`colour`). Both
//! resolve to a family's canonical name, and writes go through
//! [`SETTERS`], a closed table of pure setters keyed by canonical name.

use tracing::debug;

use crate::alias::alias_for;
use crate::error::{ParseError, Result};
use crate::table::{OptionFamily, OptionTable};

/// Canonical name of the formatter option, which takes a value.
pub const FORMATTER: &str = "formatter";

/// Pure setter for one boolean option family.
pub type Setter = fn(OptionTable, bool) -> OptionTable;

/// Every option that can be switched on from the command line.
///
/// `formatter` is absent because it is bound by the formatter binder;
/// `specFile` and `noneGiven` are absent because they are never flags.
pub const SETTERS: [(&str, Setter); 5] = [
    ("color", OptionTable::with_color),
    ("help", OptionTable::with_help),
    ("backtrace", OptionTable::with_backtrace),
    ("version", OptionTable::with_version),
    ("fail-fast", OptionTable::with_fail_fast),
];

/// Resolves a raw key to its canonical option name.
///
/// # Errors
///
/// Returns [`ParseError::InvalidOption`] for letters without an alias and
/// for long names outside the fixed option set.
///
/// # Examples
///
/// ```
/// use specrunner_args_core::resolve_option;
///
/// assert_eq!(resolve_option("c").unwrap(), "color");
/// assert_eq!(resolve_option("colour").unwrap(), "color");
/// assert_eq!(resolve_option("f").unwrap(), "formatter");
/// assert!(resolve_option("z").is_err());
/// ```
pub fn resolve_option(key: &str) -> Result<&'static str> {
    let mut chars = key.chars();
    let resolved = match (chars.next(), chars.next()) {
        (Some(letter), None) => alias_for(letter).map(|target| target.canonical()),
        _ => OptionFamily::from_key(key).map(OptionFamily::canonical_name),
    };
    resolved.ok_or_else(|| ParseError::InvalidOption(key.to_string()))
}

/// Resolves `key` and sets its whole option family to `value`.
///
/// # Errors
///
/// Returns [`ParseError::InvalidOption`] if the key does not resolve or its
/// option cannot be set as a flag.
///
/// # Examples
///
/// ```
/// use specrunner_args_core::{OptionTable, OptionValue, apply_option};
///
/// let table = apply_option(OptionTable::default(), "c", true).unwrap();
/// assert_eq!(table.get("colour").unwrap(), OptionValue::Bool(true));
/// ```
pub fn apply_option(table: OptionTable, key: &str, value: bool) -> Result<OptionTable> {
    let canonical = resolve_option(key)?;
    set_canonical(table, canonical, value)
        .ok_or_else(|| ParseError::InvalidOption(key.to_string()))
}

/// Runs the setter registered for `canonical`, if there is one.
pub(crate) fn set_canonical(table: OptionTable, canonical: &str, value: bool) -> Option<OptionTable> {
    let (_, setter) = SETTERS.iter().find(|(name, _)| *name == canonical)?;
    debug!(option = canonical, value, "Setting option");
    Some(setter(table, value))
}

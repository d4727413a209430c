//! One-letter option aliases.

/// Long option names a one-letter key stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasTarget {
    /// The letter stands for exactly one long option.
    Single(&'static str),
    /// The letter stands for several spellings of one option, canonical first.
    Multiple(&'static [&'static str]),
}

impl AliasTarget {
    /// Returns the canonical long name (the first one for lists).
    pub fn canonical(self) -> &'static str {
        match self {
            Self::Single(name) => name,
            Self::Multiple(names) => names.first().copied().unwrap_or_default(),
        }
    }
}

/// Static table of every one-letter key the parser accepts.
pub const ALIASES: [(char, AliasTarget); 4] = [
    ('c', AliasTarget::Multiple(&["color", "colour"])),
    ('h', AliasTarget::Single("help")),
    ('b', AliasTarget::Single("backtrace")),
    ('f', AliasTarget::Single("formatter")),
];

/// Looks up the long option(s) a letter stands for.
///
/// # Examples
///
/// ```
/// use specrunner_args_core::{AliasTarget, alias_for};
///
/// assert_eq!(alias_for('h'), Some(AliasTarget::Single("help")));
/// assert_eq!(alias_for('c').map(AliasTarget::canonical), Some("color"));
/// assert_eq!(alias_for('z'), None);
/// ```
pub fn alias_for(letter: char) -> Option<AliasTarget> {
    ALIASES
        .iter()
        .find(|(key, _)| *key == letter)
        .map(|(_, target)| *target)
}

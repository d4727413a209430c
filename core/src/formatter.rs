//! Accepted formatter values.
//!
//! The formatter option only takes values from [`VALID_FORMATTERS`]: a
//! one-letter short code or the matching long name for each output style.
//! The raw value is kept verbatim in the option table (`-fd` stores `"d"`,
//! `--formatter documentation` stores `"documentation"`); [`Formatter`] is
//! the typed view the runner switches on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every value the formatter option accepts.
pub const VALID_FORMATTERS: [&str; 8] = [
    "p",
    "d",
    "h",
    "t",
    "progress",
    "documentation",
    "html",
    "textmate",
];

/// Value bound to the formatter option when none is given.
pub const DEFAULT_FORMATTER: &str = "p";

/// Returns `true` if `value` is one of [`VALID_FORMATTERS`].
///
/// # Examples
///
/// ```
/// use specrunner_args_core::is_valid_formatter;
///
/// assert!(is_valid_formatter("d"));
/// assert!(is_valid_formatter("textmate"));
/// assert!(!is_valid_formatter("xml"));
/// ```
pub fn is_valid_formatter(value: &str) -> bool {
    VALID_FORMATTERS.contains(&value)
}

/// Returns `true` if a single cluster letter is itself a formatter value.
pub fn is_formatter_letter(letter: char) -> bool {
    let mut buf = [0u8; 4];
    is_valid_formatter(letter.encode_utf8(&mut buf))
}

/// Output style selected by the formatter option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formatter {
    /// One character per example (`p`, `progress`), the default.
    #[default]
    Progress,
    /// Nested example descriptions (`d`, `documentation`).
    Documentation,
    /// HTML report (`h`, `html`).
    Html,
    /// TextMate report (`t`, `textmate`).
    Textmate,
}

impl Formatter {
    /// Maps an accepted formatter value (short or long) to its style.
    ///
    /// # Examples
    ///
    /// ```
    /// use specrunner_args_core::Formatter;
    ///
    /// assert_eq!(Formatter::from_value("h"), Some(Formatter::Html));
    /// assert_eq!(Formatter::from_value("html"), Some(Formatter::Html));
    /// assert_eq!(Formatter::from_value("HTML"), None);
    /// ```
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "p" | "progress" => Some(Self::Progress),
            "d" | "documentation" => Some(Self::Documentation),
            "h" | "html" => Some(Self::Html),
            "t" | "textmate" => Some(Self::Textmate),
            _ => None,
        }
    }

    /// Long name, usable as a detached value.
    pub fn long_name(self) -> &'static str {
        match self {
            Self::Progress => "progress",
            Self::Documentation => "documentation",
            Self::Html => "html",
            Self::Textmate => "textmate",
        }
    }
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_valid_value_maps_to_a_style() {
        for value in VALID_FORMATTERS {
            assert!(
                Formatter::from_value(value).is_some(),
                "{value} should map to a formatter"
            );
        }
    }

    #[test]
    fn test_long_names_are_accepted_values() {
        for value in VALID_FORMATTERS {
            let formatter = Formatter::from_value(value).unwrap();
            assert!(is_valid_formatter(formatter.long_name()));
            assert_eq!(Formatter::from_value(formatter.long_name()), Some(formatter));
        }
    }

    #[test]
    fn test_formatter_letters() {
        assert!(is_formatter_letter('d'));
        assert!(is_formatter_letter('h'));
        assert!(!is_formatter_letter('c'));
        assert!(!is_formatter_letter('f'));
    }

    #[test]
    fn test_default_is_progress() {
        assert_eq!(Formatter::default(), Formatter::Progress);
        assert_eq!(Formatter::from_value(DEFAULT_FORMATTER), Some(Formatter::Progress));
    }
}

//! The option table handed to the runner.
//!
//! Each option family (for example `color`, `colour` and `c`) stores a single
//! value; aliases are resolved when a key is read, so the spellings of one
//! option can never disagree. The key set is closed: reading a key outside
//! [`OptionFamily::ALL`] fails with [`ParseError::InvalidOption`].
//!
//! Writes are crate-private. Only the option resolver, the formatter binder
//! and the runner config seed values, which keeps the formatter restricted
//! to [`VALID_FORMATTERS`](crate::VALID_FORMATTERS).

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{ParseError, Result};
use crate::formatter::{DEFAULT_FORMATTER, Formatter};

/// Value stored under an option key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
}

impl OptionValue {
    /// Returns the boolean value, or `None` for string options.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Str(_) => None,
        }
    }

    /// Returns the string value, or `None` for boolean options.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Bool(_) => None,
            Self::Str(value) => Some(value),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Str(value) => serializer.serialize_str(value),
        }
    }
}

/// One option and all the keys that spell it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionFamily {
    NoneGiven,
    Color,
    Help,
    Backtrace,
    Version,
    Formatter,
    SpecFile,
    FailFast,
}

impl OptionFamily {
    /// Every family, in serialization order.
    pub const ALL: [OptionFamily; 8] = [
        OptionFamily::NoneGiven,
        OptionFamily::Color,
        OptionFamily::Help,
        OptionFamily::Backtrace,
        OptionFamily::Version,
        OptionFamily::Formatter,
        OptionFamily::SpecFile,
        OptionFamily::FailFast,
    ];

    /// The long-form key that identifies the family.
    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::NoneGiven => "noneGiven",
            Self::Color => "color",
            Self::Help => "help",
            Self::Backtrace => "backtrace",
            Self::Version => "version",
            Self::Formatter => "formatter",
            Self::SpecFile => "specFile",
            Self::FailFast => "fail-fast",
        }
    }

    /// Every key that reads this family, short letter first.
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            Self::NoneGiven => &["noneGiven"],
            Self::Color => &["c", "color", "colour"],
            Self::Help => &["h", "help"],
            Self::Backtrace => &["b", "backtrace"],
            Self::Version => &["version"],
            Self::Formatter => &["f", "formatter"],
            Self::SpecFile => &["specFile"],
            Self::FailFast => &["fail-fast"],
        }
    }

    /// Finds the family a key belongs to.
    ///
    /// # Examples
    ///
    /// ```
    /// use specrunner_args_core::OptionFamily;
    ///
    /// assert_eq!(OptionFamily::from_key("colour"), Some(OptionFamily::Color));
    /// assert_eq!(OptionFamily::from_key("fail-fast"), Some(OptionFamily::FailFast));
    /// assert_eq!(OptionFamily::from_key("failfast"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.keys().contains(&key))
    }
}

/// Normalized options produced by one parse.
///
/// # Examples
///
/// ```
/// use specrunner_args_core::{OptionTable, OptionValue};
///
/// let table = OptionTable::default();
/// assert_eq!(table.formatter(), "p");
/// assert_eq!(table.get("colour").unwrap(), OptionValue::Bool(false));
/// assert!(table.get("verbose").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionTable {
    none_given: bool,
    color: bool,
    help: bool,
    backtrace: bool,
    version: bool,
    formatter: String,
    spec_file: String,
    fail_fast: bool,
}

impl Default for OptionTable {
    fn default() -> Self {
        Self {
            none_given: false,
            color: false,
            help: false,
            backtrace: false,
            version: false,
            formatter: DEFAULT_FORMATTER.to_string(),
            spec_file: String::new(),
            fail_fast: false,
        }
    }
}

impl OptionTable {
    /// Reads any key of the fixed set, aliases included.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidOption`] for keys outside the set.
    pub fn get(&self, key: &str) -> Result<OptionValue> {
        OptionFamily::from_key(key)
            .map(|family| self.value(family))
            .ok_or_else(|| ParseError::InvalidOption(key.to_string()))
    }

    /// Reads the value of a family.
    pub fn value(&self, family: OptionFamily) -> OptionValue {
        match family {
            OptionFamily::NoneGiven => self.none_given.into(),
            OptionFamily::Color => self.color.into(),
            OptionFamily::Help => self.help.into(),
            OptionFamily::Backtrace => self.backtrace.into(),
            OptionFamily::Version => self.version.into(),
            OptionFamily::Formatter => self.formatter.as_str().into(),
            OptionFamily::SpecFile => self.spec_file.as_str().into(),
            OptionFamily::FailFast => self.fail_fast.into(),
        }
    }

    /// Every key with its value, in serialization order.
    pub fn entries(&self) -> Vec<(&'static str, OptionValue)> {
        OptionFamily::ALL
            .into_iter()
            .flat_map(|family| {
                let value = self.value(family);
                family.keys().iter().map(move |key| (*key, value.clone()))
            })
            .collect()
    }

    pub fn none_given(&self) -> bool {
        self.none_given
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn help(&self) -> bool {
        self.help
    }

    pub fn backtrace(&self) -> bool {
        self.backtrace
    }

    pub fn version(&self) -> bool {
        self.version
    }

    pub fn fail_fast(&self) -> bool {
        self.fail_fast
    }

    /// Raw formatter value as given on the command line.
    pub fn formatter(&self) -> &str {
        &self.formatter
    }

    /// Typed output style for the bound formatter value.
    pub fn formatter_kind(&self) -> Formatter {
        Formatter::from_value(&self.formatter).unwrap_or_default()
    }

    /// Positional spec file path, empty when none was given.
    pub fn spec_file(&self) -> &str {
        &self.spec_file
    }

    pub(crate) fn with_color(mut self, value: bool) -> Self {
        self.color = value;
        self
    }

    pub(crate) fn with_help(mut self, value: bool) -> Self {
        self.help = value;
        self
    }

    pub(crate) fn with_backtrace(mut self, value: bool) -> Self {
        self.backtrace = value;
        self
    }

    pub(crate) fn with_version(mut self, value: bool) -> Self {
        self.version = value;
        self
    }

    pub(crate) fn with_fail_fast(mut self, value: bool) -> Self {
        self.fail_fast = value;
        self
    }

    // Callers must pass a value from VALID_FORMATTERS.
    pub(crate) fn with_formatter(mut self, value: &str) -> Self {
        self.formatter = value.to_string();
        self
    }

    pub(crate) fn with_spec_file(mut self, value: String) -> Self {
        self.spec_file = value;
        self
    }
}

impl Serialize for OptionTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in &entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

//! Argument normalization ahead of option parsing.

use std::path::Path;

use tracing::debug;

use crate::error::{ParseError, Result};

/// Arguments left for option parsing plus the positional spec file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedArgs {
    pub remaining: Vec<String>,
    /// Empty when the first remaining token was an option.
    pub spec_file: String,
}

/// Drops the program path and extracts a leading spec file.
///
/// The first token is treated as the program path when it names an existing
/// file. After that, a first token that does not start with `-` is the spec
/// file.
///
/// # Errors
///
/// Returns [`ParseError::InvalidArguments`] when there is nothing left to
/// parse once the program path is gone.
///
/// # Examples
///
/// ```
/// use specrunner_args_core::normalize_arguments;
///
/// let normalized = normalize_arguments(vec!["CalculatorSpec.php".into(), "-c".into()]).unwrap();
/// assert_eq!(normalized.spec_file, "CalculatorSpec.php");
/// assert_eq!(normalized.remaining, vec!["-c"]);
/// ```
pub fn normalize_arguments(mut args: Vec<String>) -> Result<NormalizedArgs> {
    if args.first().is_some_and(|first| Path::new(first).is_file()) {
        let program = args.remove(0);
        debug!(program = %program, "Removed program path from arguments");
    }

    if args.is_empty() {
        return Err(ParseError::InvalidArguments);
    }

    let spec_file = if args[0].starts_with('-') {
        String::new()
    } else {
        args.remove(0)
    };

    Ok(NormalizedArgs {
        remaining: args,
        spec_file,
    })
}

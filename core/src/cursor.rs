//! Position tracking over argument tokens and cluster letters.
//!
//! [`TokenCursor`] is used twice per parse: once over the whole argument list
//! and once, nested, over the letters of a single short-option cluster. The
//! two cursors are independent values; whoever holds a cursor is the only
//! code that moves it.

/// Forward cursor with one-item lookahead over a borrowed slice.
///
/// Items are returned with the slice's lifetime, so a caller may keep the
/// current item while advancing the cursor.
///
/// # Examples
///
/// ```
/// use specrunner_args_core::TokenCursor;
///
/// let letters = ['b', 'c'];
/// let mut cursor = TokenCursor::new(&letters);
/// assert_eq!(cursor.current(), Some(&'b'));
/// assert_eq!(cursor.peek(), Some(&'c'));
/// cursor.next();
/// cursor.next();
/// assert!(!cursor.valid());
/// ```
#[derive(Debug, Clone)]
pub struct TokenCursor<'a, T> {
    items: &'a [T],
    position: usize,
}

impl<'a, T> TokenCursor<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items, position: 0 }
    }

    /// Returns `true` while the cursor points at an item.
    pub fn valid(&self) -> bool {
        self.position < self.items.len()
    }

    /// The item under the cursor.
    pub fn current(&self) -> Option<&'a T> {
        self.items.get(self.position)
    }

    /// The item after the current one, without moving.
    pub fn peek(&self) -> Option<&'a T> {
        self.items.get(self.position + 1)
    }

    /// Moves to the next item. Moving past the end is a no-op.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        if self.position < self.items.len() {
            self.position += 1;
        }
    }
}

/// Shape of a single argument token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// `--name`; holds the name without the prefix.
    Long(&'a str),
    /// `-abc`; holds the letters after the dash.
    Short(&'a str),
    /// Anything else.
    Stray,
}

/// Classifies a token as a long option, a short-option cluster, or stray.
///
/// # Examples
///
/// ```
/// use specrunner_args_core::{TokenKind, classify_token};
///
/// assert_eq!(classify_token("--fail-fast"), TokenKind::Long("fail-fast"));
/// assert_eq!(classify_token("-bc"), TokenKind::Short("bc"));
/// assert_eq!(classify_token("extra.php"), TokenKind::Stray);
/// ```
pub fn classify_token(token: &str) -> TokenKind<'_> {
    if let Some(name) = token.strip_prefix("--") {
        TokenKind::Long(name)
    } else if let Some(letters) = token.strip_prefix('-') {
        TokenKind::Short(letters)
    } else {
        TokenKind::Stray
    }
}

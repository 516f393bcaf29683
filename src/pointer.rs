//! Pointer grammar: parsing, compiling and token escaping.
//!
//! A JSON Pointer is either the empty string, which addresses the whole document,
//! or a sequence of `/`-prefixed reference tokens. Inside a token, `~` is written
//! `~0` and `/` is written `~1`; nothing else is escaped.
//!
//! | Pointer     | Tokens             |
//! |-------------|--------------------|
//! | `""`        | `[]`               |
//! | `"/"`       | `[""]`             |
//! | `"/foo/0"`  | `["foo", "0"]`     |
//! | `"/a~1b"`   | `["a/b"]`          |
//! | `"/m~0n"`   | `["m~n"]`          |
//!
//! The free functions [`parse`] and [`compile`] convert between the two forms.
//! [`Pointer`] is the owned, parsed form, and [`ToTokens`] is what every navigation
//! operation accepts so callers can pass either a string or a token list.

use crate::{Error, Result};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Escapes a single reference token: `~` becomes `~0`, `/` becomes `~1`.
///
/// # Examples
///
/// ```rust
/// use serde_jsonpointer::escape;
///
/// assert_eq!(escape("a/b"), "a~1b");
/// assert_eq!(escape("m~n"), "m~0n");
/// assert_eq!(escape("~1"), "~01");
/// ```
#[must_use]
pub fn escape(token: &str) -> Cow<'_, str> {
    if !token.contains(['~', '/']) {
        return Cow::Borrowed(token);
    }
    let mut out = String::with_capacity(token.len() + 2);
    for c in token.chars() {
        match c {
            '~' => out.push_str("~0"),
            '/' => out.push_str("~1"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Unescapes a single reference token: `~1` becomes `/`, `~0` becomes `~`.
///
/// The input is scanned once, so `~01` decodes to `~1` and not `/`. A `~` that is not
/// followed by `0` or `1` is kept as is.
///
/// # Examples
///
/// ```rust
/// use serde_jsonpointer::unescape;
///
/// assert_eq!(unescape("a~1b"), "a/b");
/// assert_eq!(unescape("~01"), "~1");
/// assert_eq!(unescape("~2"), "~2");
/// ```
#[must_use]
pub fn unescape(token: &str) -> Cow<'_, str> {
    if !token.contains('~') {
        return Cow::Borrowed(token);
    }
    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '~' {
            match chars.peek() {
                Some('0') => {
                    chars.next();
                    out.push('~');
                    continue;
                }
                Some('1') => {
                    chars.next();
                    out.push('/');
                    continue;
                }
                _ => {}
            }
        }
        out.push(c);
    }
    Cow::Owned(out)
}

/// Converts a pointer string into its reference tokens.
///
/// # Errors
///
/// Returns [`Error::InvalidPointerSyntax`] if `pointer` is non-empty and does not
/// start with `/`.
///
/// # Examples
///
/// ```rust
/// use serde_jsonpointer::parse;
///
/// assert!(parse("").unwrap().is_empty());
/// assert_eq!(parse("/hello~0bla/test~1bla").unwrap(), vec!["hello~bla", "test/bla"]);
/// assert_eq!(parse("/a/").unwrap(), vec!["a", ""]);
/// assert!(parse("foo").is_err());
/// ```
pub fn parse(pointer: &str) -> Result<Vec<String>> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    let rest = pointer
        .strip_prefix('/')
        .ok_or_else(|| Error::invalid_syntax(pointer))?;
    Ok(rest.split('/').map(|t| unescape(t).into_owned()).collect())
}

/// Builds a pointer string from reference tokens.
///
/// # Examples
///
/// ```rust
/// use serde_jsonpointer::compile;
///
/// assert_eq!(compile::<&str>(&[]), "");
/// assert_eq!(compile(&["hello~bla", "test/bla"]), "/hello~0bla/test~1bla");
/// assert_eq!(compile(&[""]), "/");
/// ```
#[must_use]
pub fn compile<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push('/');
        out.push_str(&escape(token.as_ref()));
    }
    out
}

/// Returns `true` for tokens that look like an array position: all digits, or `-`.
///
/// [`set`](crate::set) uses this to decide whether a missing intermediate container
/// should be an array or an object.
///
/// # Examples
///
/// ```rust
/// use serde_jsonpointer::looks_like_index;
///
/// assert!(looks_like_index("0"));
/// assert!(looks_like_index("012"));
/// assert!(looks_like_index("-"));
/// assert!(!looks_like_index(""));
/// assert!(!looks_like_index("-1"));
/// assert!(!looks_like_index("x"));
/// ```
#[must_use]
pub fn looks_like_index(token: &str) -> bool {
    token == "-" || (!token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
}

/// Parses a token as an existing-element index: `0` or digits without a leading zero.
pub(crate) fn canonical_index(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    match bytes {
        [] => None,
        [b'0'] => Some(0),
        [b'0', ..] => None,
        _ if bytes.iter().all(u8::is_ascii_digit) => token.parse().ok(),
        _ => None,
    }
}

/// Parses any all-digit token as an index.
pub(crate) fn digit_index(token: &str) -> Option<usize> {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse().ok()
    } else {
        None
    }
}

/// An owned, parsed JSON Pointer.
///
/// `Pointer` keeps the unescaped tokens; [`Display`](fmt::Display) renders the
/// canonical string form.
///
/// # Examples
///
/// ```rust
/// use serde_jsonpointer::Pointer;
///
/// let mut ptr: Pointer = "/a~1b/0".parse().unwrap();
/// assert_eq!(ptr.tokens(), ["a/b", "0"]);
///
/// ptr.push("m~n");
/// assert_eq!(ptr.to_string(), "/a~1b/0/m~0n");
///
/// assert_eq!(ptr.parent().unwrap().to_string(), "/a~1b/0");
/// assert!(Pointer::root().is_root());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Pointer {
    tokens: Vec<String>,
}

impl Pointer {
    /// The empty pointer, addressing the whole document.
    #[must_use]
    pub const fn root() -> Self {
        Pointer { tokens: Vec::new() }
    }

    /// Parses a pointer string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPointerSyntax`] if `pointer` is non-empty and does not
    /// start with `/`.
    pub fn parse(pointer: &str) -> Result<Self> {
        parse(pointer).map(|tokens| Pointer { tokens })
    }

    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Appends an unescaped token.
    pub fn push<S: Into<String>>(&mut self, token: S) {
        self.tokens.push(token.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.tokens.pop()
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    /// Returns the pointer to the containing value, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Pointer> {
        self.tokens.split_last().map(|(_, rest)| Pointer {
            tokens: rest.to_vec(),
        })
    }

    #[must_use]
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "/{}", escape(token))?;
        }
        Ok(())
    }
}

impl FromStr for Pointer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Pointer::parse(s)
    }
}

impl From<Vec<String>> for Pointer {
    fn from(tokens: Vec<String>) -> Self {
        Pointer { tokens }
    }
}

impl<S: Into<String>> FromIterator<S> for Pointer {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Pointer {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl AsRef<[String]> for Pointer {
    fn as_ref(&self) -> &[String] {
        &self.tokens
    }
}

/// Anything that can name a location: a pointer string or an already-parsed token list.
///
/// Strings are parsed (and so unescaped); token lists are used verbatim.
///
/// # Examples
///
/// ```rust
/// use serde_jsonpointer::{get, value};
///
/// let doc = value!({ "a/b": { "c": 1 } });
///
/// assert_eq!(get(&doc, "/a~1b/c").unwrap(), &value!(1));
/// assert_eq!(get(&doc, &["a/b", "c"]).unwrap(), &value!(1));
/// assert_eq!(get(&doc, &vec!["a/b".to_string(), "c".to_string()]).unwrap(), &value!(1));
/// ```
pub trait ToTokens {
    /// Resolves `self` into reference tokens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPointerSyntax`] for malformed pointer strings.
    fn to_tokens(&self) -> Result<Cow<'_, [String]>>;
}

impl ToTokens for str {
    fn to_tokens(&self) -> Result<Cow<'_, [String]>> {
        parse(self).map(Cow::Owned)
    }
}

impl ToTokens for String {
    fn to_tokens(&self) -> Result<Cow<'_, [String]>> {
        self.as_str().to_tokens()
    }
}

impl ToTokens for Pointer {
    fn to_tokens(&self) -> Result<Cow<'_, [String]>> {
        Ok(Cow::Borrowed(&self.tokens))
    }
}

impl ToTokens for [String] {
    fn to_tokens(&self) -> Result<Cow<'_, [String]>> {
        Ok(Cow::Borrowed(self))
    }
}

impl ToTokens for Vec<String> {
    fn to_tokens(&self) -> Result<Cow<'_, [String]>> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl ToTokens for [&str] {
    fn to_tokens(&self) -> Result<Cow<'_, [String]>> {
        Ok(Cow::Owned(self.iter().map(|t| (*t).to_string()).collect()))
    }
}

impl ToTokens for Vec<&str> {
    fn to_tokens(&self) -> Result<Cow<'_, [String]>> {
        self.as_slice().to_tokens()
    }
}

impl<const N: usize> ToTokens for [&str; N] {
    fn to_tokens(&self) -> Result<Cow<'_, [String]>> {
        self.as_slice().to_tokens()
    }
}

impl<T: ToTokens + ?Sized> ToTokens for &T {
    fn to_tokens(&self) -> Result<Cow<'_, [String]>> {
        (**self).to_tokens()
    }
}

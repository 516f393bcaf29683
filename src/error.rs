//! Error types for pointer parsing and document navigation.
//!
//! Every fallible operation in this crate returns [`Result`], whose error side is
//! the single [`Error`] enum below. Errors are raised at the point of detection
//! and carry enough context (the offending token and the pointer prefix that led
//! to it) to explain what went wrong without re-running the lookup.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: a non-empty pointer string that does not start with `/`
//! - **Lookup Errors**: a reference token that does not exist in the document
//! - **Mutation Errors**: assigning to the root, removing the root, indexing an
//!   array with a non-numeric token, or descending through a scalar
//! - **Conversion Errors**: a Rust value that cannot be turned into a [`Value`](crate::Value)
//!
//! ## Examples
//!
//! ```rust
//! use serde_jsonpointer::{get, value, Error};
//!
//! let doc = value!({ "a": 1 });
//!
//! match get(&doc, "/b") {
//!     Err(Error::InvalidReferenceToken { token, .. }) => assert_eq!(token, "b"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while parsing pointers or navigating documents.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A non-empty pointer string that does not begin with `/`.
    #[error("Invalid JSON pointer: {pointer:?}")]
    InvalidPointerSyntax { pointer: String },

    /// A reference token that could not be resolved during traversal.
    ///
    /// `pointer` is the canonical pointer up to and including the failing token.
    #[error("Invalid reference token: {token} (at {pointer:?})")]
    InvalidReferenceToken { token: String, pointer: String },

    /// Attempted to `set` the root of the document.
    #[error("Can not set the root object")]
    RootAssignment,

    /// Attempted to `remove` the root of the document.
    #[error("Invalid JSON pointer for remove: {pointer:?}")]
    InvalidPointerForRemove { pointer: String },

    /// A token used against an array that is not a usable index.
    #[error("Invalid array index: {token:?}")]
    InvalidArrayIndex { token: String },

    /// A token that would have to descend into a scalar.
    #[error("Can not descend into a scalar with token {token:?} (at {pointer:?})")]
    IntermediateNotContainer { token: String, pointer: String },

    /// Custom error, used by value conversion.
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error for the given pointer string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonpointer::Error;
    ///
    /// let err = Error::invalid_syntax("foo");
    /// assert!(err.to_string().contains("Invalid JSON pointer"));
    /// ```
    pub fn invalid_syntax(pointer: &str) -> Self {
        Error::InvalidPointerSyntax {
            pointer: pointer.to_string(),
        }
    }

    /// Creates a lookup error for `tokens[..=failed]`.
    pub(crate) fn invalid_reference(tokens: &[String], failed: usize) -> Self {
        Error::InvalidReferenceToken {
            token: tokens[failed].clone(),
            pointer: crate::pointer::compile(&tokens[..=failed]),
        }
    }

    /// Creates an error for a token that cannot index an array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonpointer::Error;
    ///
    /// let err = Error::invalid_array_index("abc");
    /// assert!(err.to_string().contains("\"abc\""));
    /// ```
    pub fn invalid_array_index(token: &str) -> Self {
        Error::InvalidArrayIndex {
            token: token.to_string(),
        }
    }

    /// Creates an error for a remove with an empty pointer.
    pub fn invalid_remove(pointer: &str) -> Self {
        Error::InvalidPointerForRemove {
            pointer: pointer.to_string(),
        }
    }

    pub(crate) fn not_container(tokens: &[String], failed: usize) -> Self {
        Error::IntermediateNotContainer {
            token: tokens[failed].clone(),
            pointer: crate::pointer::compile(&tokens[..=failed]),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonpointer::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` for lookup misses, the errors [`has`](crate::has) folds into `false`.
    #[must_use]
    pub const fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            Error::InvalidReferenceToken { .. } | Error::InvalidPointerSyntax { .. }
        )
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_error_names_prefix() {
        let tokens = vec!["a".to_string(), "b/c".to_string(), "d".to_string()];
        let err = Error::invalid_reference(&tokens, 1);
        assert_eq!(
            err,
            Error::InvalidReferenceToken {
                token: "b/c".to_string(),
                pointer: "/a/b~1c".to_string(),
            }
        );
        assert!(err.to_string().contains("Invalid reference token: b/c"));
    }

    #[test]
    fn test_lookup_failure_classification() {
        assert!(Error::invalid_syntax("x").is_lookup_failure());
        assert!(!Error::RootAssignment.is_lookup_failure());
        assert!(!Error::invalid_array_index("x").is_lookup_failure());
    }
}

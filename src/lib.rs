//! # serde_jsonpointer
//!
//! [RFC 6901](https://datatracker.ietf.org/doc/html/rfc6901) JSON Pointers over an
//! ordered, serde-compatible document tree.
//!
//! ## What is a JSON Pointer?
//!
//! A JSON Pointer is a string that addresses one value inside a document. The empty
//! string is the whole document; otherwise the pointer is a list of `/`-prefixed
//! reference tokens, each naming an object member or an array index. Inside a token
//! `~` is written `~0` and `/` is written `~1`.
//!
//! ## Key Features
//!
//! - **Grammar**: [`parse`], [`compile`], [`escape`], [`unescape`] and the owned [`Pointer`]
//! - **Navigation**: [`get`], [`get_mut`], [`has`], [`set`] (creates missing
//!   intermediates) and [`remove`]
//! - **Traversal**: [`walk`] every leaf with its pointer, or flatten with [`dict`]
//! - **Bound handle**: [`bind`] a document once and chain operations on it
//! - **Serde Compatible**: [`Value`] implements `Serialize`/`Deserialize`, and
//!   [`to_value`] converts any `Serialize` type
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_jsonpointer::{dict, get, remove, set, value, Value};
//!
//! let mut doc = value!({ "foo": ["bar", "baz"], "a/b": 1 });
//!
//! assert_eq!(get(&doc, "/foo/0")?, &value!("bar"));
//! assert_eq!(get(&doc, "/a~1b")?, &value!(1));
//!
//! // Missing intermediates are created: arrays for index-like tokens, objects otherwise
//! set(&mut doc, "/new/0/name", value!("x"))?;
//! assert_eq!(get(&doc, "/new")?, &value!([{ "name": "x" }]));
//!
//! remove(&mut doc, "/foo/0")?;
//! assert_eq!(
//!     Value::Object(dict(&doc)),
//!     value!({ "/foo/0": "baz", "/a~1b": 1, "/new/0/name": "x" })
//! );
//! # Ok::<(), serde_jsonpointer::Error>(())
//! ```
//!
//! ## Pointer inputs
//!
//! Every navigation function accepts anything implementing [`ToTokens`]: a pointer
//! string, a parsed [`Pointer`], or a list of unescaped tokens.
//!
//! ```rust
//! use serde_jsonpointer::{get, value, Pointer};
//!
//! let doc = value!({ "a/b": [10, 20] });
//! let ptr: Pointer = "/a~1b/1".parse()?;
//!
//! assert_eq!(get(&doc, "/a~1b/1")?, &value!(20));
//! assert_eq!(get(&doc, &ptr)?, &value!(20));
//! assert_eq!(get(&doc, &["a/b", "1"])?, &value!(20));
//! # Ok::<(), serde_jsonpointer::Error>(())
//! ```
//!
//! ## Working with serde formats
//!
//! ```rust
//! use serde::Serialize;
//! use serde_jsonpointer::{has, to_value};
//!
//! #[derive(Serialize)]
//! struct Config { name: String, ports: Vec<u16> }
//!
//! let doc = to_value(&Config { name: "svc".into(), ports: vec![80, 443] })?;
//! assert!(has(&doc, "/ports/1"));
//! # Ok::<(), serde_jsonpointer::Error>(())
//! ```
//!
//! ## Logging
//!
//! Mutations emit `tracing` events at `trace` level (intermediate creation in [`set`],
//! each [`remove`]). No subscriber is installed by this crate.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - All array indexing is bounds-checked
//! - Proper error propagation with `Result` types
//! - Operations are synchronous; traversal assumes an acyclic, finite tree

pub mod error;
pub mod handle;
pub mod macros;
pub mod map;
pub mod navigate;
pub mod options;
pub mod pointer;
pub mod ser;
pub mod value;
pub mod walk;

pub use error::{Error, Result};
pub use handle::{bind, Bound};
pub use map::Map;
pub use navigate::{get, get_mut, has, remove, set};
pub use options::{Descend, DescendInto};
pub use pointer::{compile, escape, looks_like_index, parse, unescape, Pointer, ToTokens};
pub use ser::{to_value, ValueSerializer};
pub use value::{Entries, Key, Number, Value};
pub use walk::{dict, dict_with, try_walk, try_walk_with, walk, walk_with};

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct User {
        id: u32,
        name: String,
        tags: Vec<String>,
    }

    #[test]
    fn test_address_serialized_struct() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            tags: vec!["admin".to_string(), "user".to_string()],
        };
        let mut doc = to_value(&user).unwrap();

        assert_eq!(get(&doc, "/name").unwrap(), &Value::from("Alice"));
        set(&mut doc, "/tags/-", Value::from("owner")).unwrap();
        assert_eq!(get(&doc, "/tags/2").unwrap(), &Value::from("owner"));
        assert_eq!(remove(&mut doc, "/id").unwrap(), Some(Value::from(123)));
        assert!(!has(&doc, "/id"));
    }

    #[test]
    fn test_sample_document_round_trip() {
        let doc = value!({ "foo": ["bar", "baz"], "": 0, "a/b": 1, " ": 7, "m~n": 8 });
        let flat = dict(&doc);
        for (pointer, leaf) in flat.iter() {
            let tokens = parse(pointer).unwrap();
            assert_eq!(compile(&tokens[..]), *pointer);
            assert_eq!(get(&doc, pointer).unwrap(), leaf);
        }
        assert_eq!(flat.len(), 6);
    }
}

//! A document handle with every pointer operation pre-bound.
//!
//! [`bind`] wraps a mutable borrow of a document so repeated operations don't
//! have to pass it each time. Mutating methods return the handle again, which
//! allows fluent chains.
//!
//! ```rust
//! use serde_jsonpointer::{bind, value};
//!
//! let mut doc = value!({ "existing": "bla" });
//! let mut handle = bind(&mut doc);
//!
//! handle
//!     .set("/new-value/bla", value!("expected"))?
//!     .set("/list/-", value!(1))?;
//! assert_eq!(handle.get("/new-value/bla")?, &value!("expected"));
//! assert!(handle.has("/list/0"));
//!
//! assert_eq!(doc, value!({
//!     "existing": "bla",
//!     "new-value": { "bla": "expected" },
//!     "list": [1]
//! }));
//! # Ok::<(), serde_jsonpointer::Error>(())
//! ```

use crate::options::Descend;
use crate::pointer::ToTokens;
use crate::{navigate, walk, Map, Result, Value};

/// A mutable borrow of a document with pointer operations as methods.
///
/// Created by [`bind`].
#[derive(Debug)]
pub struct Bound<'a> {
    root: &'a mut Value,
}

/// Binds pointer operations to `root`.
pub fn bind(root: &mut Value) -> Bound<'_> {
    Bound { root }
}

impl<'a> Bound<'a> {
    /// See [`get`](crate::get).
    ///
    /// # Errors
    ///
    /// Fails if the pointer is malformed or does not resolve.
    pub fn get<P>(&self, pointer: &P) -> Result<&Value>
    where
        P: ToTokens + ?Sized,
    {
        navigate::get(self.root, pointer)
    }

    /// See [`get_mut`](crate::get_mut).
    ///
    /// # Errors
    ///
    /// Fails if the pointer is malformed or does not resolve.
    pub fn get_mut<P>(&mut self, pointer: &P) -> Result<&mut Value>
    where
        P: ToTokens + ?Sized,
    {
        navigate::get_mut(self.root, pointer)
    }

    /// See [`set`](crate::set). Returns the handle for chaining.
    ///
    /// # Errors
    ///
    /// Fails for the root pointer and for paths that cannot be created.
    pub fn set<P>(&mut self, pointer: &P, value: Value) -> Result<&mut Self>
    where
        P: ToTokens + ?Sized,
    {
        navigate::set(self.root, pointer, value)?;
        Ok(self)
    }

    /// See [`remove`](crate::remove).
    ///
    /// # Errors
    ///
    /// Fails for the root pointer, a missing parent, or a bad array index.
    pub fn remove<P>(&mut self, pointer: &P) -> Result<Option<Value>>
    where
        P: ToTokens + ?Sized,
    {
        navigate::remove(self.root, pointer)
    }

    #[must_use]
    pub fn has<P>(&self, pointer: &P) -> bool
    where
        P: ToTokens + ?Sized,
    {
        navigate::has(self.root, pointer)
    }

    pub fn walk<'s, V>(&'s self, visit: V)
    where
        V: FnMut(&'s Value, &str),
    {
        walk::walk(self.root, visit);
    }

    pub fn walk_with<'s, V, D>(&'s self, visit: V, descend: D)
    where
        V: FnMut(&'s Value, &str),
        D: Descend,
    {
        walk::walk_with(self.root, visit, descend);
    }

    #[must_use]
    pub fn dict(&self) -> Map {
        walk::dict(self.root)
    }

    #[must_use]
    pub fn dict_with<D>(&self, descend: D) -> Map
    where
        D: Descend,
    {
        walk::dict_with(self.root, descend)
    }

    /// The bound document.
    #[must_use]
    pub fn value(&self) -> &Value {
        self.root
    }

    /// Ends the binding, returning the underlying borrow.
    #[must_use]
    pub fn into_inner(self) -> &'a mut Value {
        self.root
    }
}

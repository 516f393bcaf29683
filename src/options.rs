//! Descent policies for [`walk`](crate::walk) and [`dict`](crate::dict).
//!
//! A descent policy decides, for each child encountered during a walk, whether
//! to recurse into it or to report it to the visitor as a leaf. Anything
//! implementing [`Descend`] works: any `FnMut(&Value) -> bool`, or one of the
//! [`DescendInto`] policies.
//!
//! ## Examples
//!
//! ```rust
//! use serde_jsonpointer::{dict_with, value, DescendInto, Value};
//!
//! let doc = value!({ "a": { "b": [1, 2] } });
//!
//! // Keep arrays whole
//! let flat = dict_with(&doc, DescendInto::Objects);
//! assert_eq!(flat.get("/a/b"), Some(&value!([1, 2])));
//!
//! // Closures need their argument type spelled out
//! let flat = dict_with(&doc, |value: &Value| value.is_container());
//! assert_eq!(flat.get("/a/b/1"), Some(&value!(2)));
//! ```

use crate::Value;

/// Decides whether a walk recurses into a value.
pub trait Descend {
    /// Returns `true` to recurse into `value`, `false` to report it as a leaf.
    fn descend(&mut self, value: &Value) -> bool;
}

impl<F> Descend for F
where
    F: FnMut(&Value) -> bool,
{
    fn descend(&mut self, value: &Value) -> bool {
        self(value)
    }
}

impl Descend for DescendInto {
    fn descend(&mut self, value: &Value) -> bool {
        self.matches(value)
    }
}

/// Which values a walk recurses into.
///
/// # Examples
///
/// ```rust
/// use serde_jsonpointer::{value, DescendInto};
///
/// assert!(DescendInto::Containers.matches(&value!([])));
/// assert!(!DescendInto::Objects.matches(&value!([])));
/// assert!(DescendInto::Arrays.matches(&value!([])));
/// assert!(!DescendInto::Containers.matches(&value!("leaf")));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DescendInto {
    /// Arrays and objects; every scalar is a leaf.
    #[default]
    Containers,
    /// Objects only; arrays are reported whole.
    Objects,
    /// Arrays only; objects are reported whole.
    Arrays,
}

impl DescendInto {
    #[must_use]
    pub const fn matches(&self, value: &Value) -> bool {
        match self {
            DescendInto::Containers => value.is_container(),
            DescendInto::Objects => value.is_object(),
            DescendInto::Arrays => value.is_array(),
        }
    }
}

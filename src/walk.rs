//! Depth-first traversal with pointer reconstruction.
//!
//! [`walk`] visits every leaf of a document together with the canonical pointer
//! that addresses it. Children are visited in container order: index order for
//! arrays, insertion order for objects. The pointer of the node being visited is
//! kept as a token stack that grows on the way down and shrinks on the way back.
//!
//! A descent predicate decides which values are recursed into; everything else is
//! a leaf. The default recurses into every array and object, so only scalars reach
//! the visitor. See [`DescendInto`](crate::DescendInto) for other policies.
//!
//! The root itself is never visited: a scalar root has no children, so nothing is
//! reported for it.
//!
//! Traversal is recursive and assumes a finite tree.

use crate::options::{Descend, DescendInto};
use crate::pointer::compile;
use crate::{Map, Value};
use std::convert::Infallible;

fn walk_children<'v, E, V, D>(
    value: &'v Value,
    path: &mut Vec<String>,
    visit: &mut V,
    descend: &mut D,
) -> Result<(), E>
where
    V: FnMut(&'v Value, &str) -> Result<(), E>,
    D: Descend,
{
    for (key, child) in value.entries() {
        path.push(key.to_string());
        if descend.descend(child) {
            walk_children(child, path, visit, descend)?;
        } else {
            visit(child, &compile(&path[..]))?;
        }
        path.pop();
    }
    Ok(())
}

/// Walks every leaf with a fallible visitor and a custom descent policy.
///
/// The walk stops at the first error returned by `visit`, and that error is
/// returned. Leaves visited before the error have already been reported.
///
/// # Errors
///
/// Whatever `visit` returns.
///
/// # Examples
///
/// ```rust
/// use serde_jsonpointer::{try_walk_with, value, Value};
///
/// let doc = value!({ "a": 1, "b": "two", "c": 3 });
/// let mut seen = Vec::new();
/// let result = try_walk_with(
///     &doc,
///     |value, pointer| {
///         if value.is_string() {
///             return Err(format!("string at {}", pointer));
///         }
///         seen.push(pointer.to_string());
///         Ok(())
///     },
///     Value::is_container,
/// );
/// assert_eq!(result, Err("string at /b".to_string()));
/// assert_eq!(seen, vec!["/a"]);
/// ```
pub fn try_walk_with<'v, E, V, D>(root: &'v Value, mut visit: V, mut descend: D) -> Result<(), E>
where
    V: FnMut(&'v Value, &str) -> Result<(), E>,
    D: Descend,
{
    let mut path = Vec::new();
    walk_children(root, &mut path, &mut visit, &mut descend)
}

/// Walks every scalar leaf with a fallible visitor.
///
/// # Errors
///
/// Whatever `visit` returns.
pub fn try_walk<'v, E, V>(root: &'v Value, visit: V) -> Result<(), E>
where
    V: FnMut(&'v Value, &str) -> Result<(), E>,
{
    try_walk_with(root, visit, DescendInto::Containers)
}

/// Walks every leaf, as decided by `descend`.
///
/// `descend` is a [`DescendInto`] policy or any `FnMut(&Value) -> bool`.
pub fn walk_with<'v, V, D>(root: &'v Value, mut visit: V, descend: D)
where
    V: FnMut(&'v Value, &str),
    D: Descend,
{
    let result = try_walk_with::<Infallible, _, _>(
        root,
        |value, pointer| {
            visit(value, pointer);
            Ok(())
        },
        descend,
    );
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Walks every scalar leaf of `root`, passing the value and its pointer.
///
/// # Examples
///
/// ```rust
/// use serde_jsonpointer::{walk, value};
///
/// let doc = value!({ "bla": { "test": "expected" }, "list": [true] });
/// let mut visited = Vec::new();
/// walk(&doc, |value, pointer| visited.push((pointer.to_string(), value.clone())));
///
/// assert_eq!(visited, vec![
///     ("/bla/test".to_string(), value!("expected")),
///     ("/list/0".to_string(), value!(true)),
/// ]);
/// ```
pub fn walk<'v, V>(root: &'v Value, visit: V)
where
    V: FnMut(&'v Value, &str),
{
    walk_with(root, visit, DescendInto::Containers);
}

/// Flattens `root` into a pointer-to-value map, as decided by `descend`.
pub fn dict_with<D>(root: &Value, descend: D) -> Map
where
    D: Descend,
{
    let mut out = Map::new();
    walk_with(
        root,
        |value, pointer| {
            out.insert(pointer.to_string(), value.clone());
        },
        descend,
    );
    out
}

/// Flattens `root` into a map from the pointer of each scalar leaf to a copy of it.
///
/// Entries appear in traversal order.
///
/// # Examples
///
/// ```rust
/// use serde_jsonpointer::{dict, value, Value};
///
/// let flat = dict(&value!({ "a": { "b": 1 }, "c": [2, 3] }));
/// assert_eq!(
///     Value::Object(flat),
///     value!({ "/a/b": 1, "/c/0": 2, "/c/1": 3 })
/// );
/// ```
#[must_use]
pub fn dict(root: &Value) -> Map {
    dict_with(root, DescendInto::Containers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{get, value, DescendInto};

    #[test]
    fn test_walk_escapes_keys() {
        let doc = value!({ "a/b": { "m~n": 1 }, "": [2] });
        let mut pointers = Vec::new();
        walk(&doc, |_, pointer| pointers.push(pointer.to_string()));
        assert_eq!(pointers, vec!["/a~1b/m~0n", "//0"]);
    }

    #[test]
    fn test_walk_pointers_resolve() {
        let doc = value!({ "x": [{ "y": null }, [true, false]], "z": "s" });
        let mut count = 0;
        walk(&doc, |value, pointer| {
            count += 1;
            assert_eq!(get(&doc, pointer).unwrap(), value);
        });
        assert_eq!(count, 4);
    }

    #[test]
    fn test_walk_scalar_root_visits_nothing() {
        let mut called = false;
        walk(&value!(42), |_, _| called = true);
        assert!(!called);
    }

    #[test]
    fn test_empty_containers_are_skipped_by_default() {
        let doc = value!({ "a": [], "b": {}, "c": 1 });
        assert_eq!(Value::Object(dict(&doc)), value!({ "/c": 1 }));
    }

    #[test]
    fn test_never_descend_reports_top_level() {
        let doc = value!({ "a": [], "b": { "c": 1 } });
        let flat = dict_with(&doc, |_: &Value| false);
        assert_eq!(Value::Object(flat), value!({ "/a": [], "/b": { "c": 1 } }));
    }

    #[test]
    fn test_descend_arrays_only() {
        let doc = value!([{ "a": 1 }, [2]]);
        let flat = dict_with(&doc, DescendInto::Arrays);
        assert_eq!(Value::Object(flat), value!({ "/0": { "a": 1 }, "/1/0": 2 }));
    }

    #[test]
    fn test_dict_original_example() {
        let doc = value!({ "bla": { "test": "expected" }, "abc": "bla" });
        let flat = dict(&doc);
        assert_eq!(flat.get("/bla/test"), Some(&value!("expected")));
        assert_eq!(flat.get("/abc"), Some(&value!("bla")));
        let keys: Vec<_> = flat.keys().cloned().collect();
        assert_eq!(keys, vec!["/bla/test", "/abc"]);
    }

    #[test]
    fn test_try_walk_ok() {
        let doc = value!([1, 2, 3]);
        let mut sum = 0;
        let result: Result<(), ()> = try_walk(&doc, |value, _| {
            sum += value.as_i64().ok_or(())?;
            Ok(())
        });
        assert_eq!(result, Ok(()));
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_walk_collects_borrowed_leaves() {
        let doc = value!({ "a": "x", "b": ["y"] });
        let mut leaves: Vec<&Value> = Vec::new();
        walk(&doc, |value, _| leaves.push(value));
        assert_eq!(leaves, vec![&value!("x"), &value!("y")]);
    }
}

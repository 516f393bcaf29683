//! Reading, writing and deleting values by pointer.
//!
//! All operations accept any [`ToTokens`] input, so a pointer string, a parsed
//! [`Pointer`](crate::Pointer) or a plain token list can be used interchangeably.
//!
//! Lookups run a single traversal that reports the position of the first token
//! it cannot resolve. [`get`] turns that position into an
//! [`Error::InvalidReferenceToken`]; [`has`] turns it into `false`.
//!
//! ## Array tokens
//!
//! | Operation | Accepted tokens                                           |
//! |-----------|-----------------------------------------------------------|
//! | `get`     | `0` or digits without a leading zero, within bounds       |
//! | `set`     | as `get`, plus `-`; past the end pads with `null`          |
//! | `remove`  | any run of digits; out of range is a no-op                 |

use crate::pointer::{canonical_index, digit_index, looks_like_index, ToTokens};
use crate::{Error, Result, Value};
use tracing::trace;

fn child<'v>(value: &'v Value, token: &str) -> Option<&'v Value> {
    match value {
        Value::Object(map) => map.get(token),
        Value::Array(arr) => canonical_index(token).and_then(|i| arr.get(i)),
        _ => None,
    }
}

fn child_mut<'v>(value: &'v mut Value, token: &str) -> Option<&'v mut Value> {
    match value {
        Value::Object(map) => map.get_mut(token),
        Value::Array(arr) => canonical_index(token).and_then(move |i| arr.get_mut(i)),
        _ => None,
    }
}

/// Resolves `tokens` from `root`, or returns the index of the first unresolvable token.
fn lookup<'v>(root: &'v Value, tokens: &[String]) -> std::result::Result<&'v Value, usize> {
    let mut current = root;
    for (i, token) in tokens.iter().enumerate() {
        current = child(current, token).ok_or(i)?;
    }
    Ok(current)
}

fn lookup_mut<'v>(
    root: &'v mut Value,
    tokens: &[String],
) -> std::result::Result<&'v mut Value, usize> {
    let mut current = root;
    for (i, token) in tokens.iter().enumerate() {
        current = child_mut(current, token).ok_or(i)?;
    }
    Ok(current)
}

/// Looks up the value a pointer refers to.
///
/// The empty pointer returns `root` itself.
///
/// # Errors
///
/// - [`Error::InvalidPointerSyntax`] for a malformed pointer string
/// - [`Error::InvalidReferenceToken`] naming the first token that does not exist
///
/// # Examples
///
/// ```rust
/// use serde_jsonpointer::{get, value};
///
/// let doc = value!({ "foo": ["bar", "baz"], "": 0, "a/b": 1, "m~n": 8 });
///
/// assert_eq!(get(&doc, "").unwrap(), &doc);
/// assert_eq!(get(&doc, "/foo/0").unwrap(), &value!("bar"));
/// assert_eq!(get(&doc, "/").unwrap(), &value!(0));
/// assert_eq!(get(&doc, "/a~1b").unwrap(), &value!(1));
/// assert_eq!(get(&doc, "/m~0n").unwrap(), &value!(8));
/// assert!(get(&doc, "/foo/2").is_err());
/// ```
pub fn get<'v, P>(root: &'v Value, pointer: &P) -> Result<&'v Value>
where
    P: ToTokens + ?Sized,
{
    let tokens = pointer.to_tokens()?;
    lookup(root, &tokens).map_err(|failed| Error::invalid_reference(&tokens, failed))
}

/// Mutable variant of [`get`].
///
/// # Errors
///
/// Same as [`get`].
pub fn get_mut<'v, P>(root: &'v mut Value, pointer: &P) -> Result<&'v mut Value>
where
    P: ToTokens + ?Sized,
{
    let tokens = pointer.to_tokens()?;
    lookup_mut(root, &tokens).map_err(|failed| Error::invalid_reference(&tokens, failed))
}

/// Returns `true` if the pointer resolves to a value. Never fails.
///
/// # Examples
///
/// ```rust
/// use serde_jsonpointer::{has, value};
///
/// let doc = value!({ "a": [1] });
/// assert!(has(&doc, "/a/0"));
/// assert!(!has(&doc, "/a/1"));
/// assert!(!has(&doc, "not a pointer"));
/// ```
#[must_use]
pub fn has<P>(root: &Value, pointer: &P) -> bool
where
    P: ToTokens + ?Sized,
{
    pointer
        .to_tokens()
        .map_or(false, |tokens| lookup(root, &tokens).is_ok())
}

/// An empty container shaped for the token that will address into it.
fn container_for(next: &str) -> Value {
    if looks_like_index(next) {
        Value::Array(Vec::new())
    } else {
        Value::Object(crate::Map::new())
    }
}

/// Resolves an array token for writing: `Some(index)` for a canonical index,
/// `None` for `-` (append).
fn write_index(token: &str) -> Result<Option<usize>> {
    if token == "-" {
        return Ok(None);
    }
    canonical_index(token)
        .map(Some)
        .ok_or_else(|| Error::invalid_array_index(token))
}

/// Returns the slot an array token names and whether it was just created.
///
/// Indexes past the end grow the array, filling the gap with `null`.
fn array_slot<'v>(arr: &'v mut Vec<Value>, token: &str) -> Result<(&'v mut Value, bool)> {
    let index = write_index(token)?.unwrap_or(arr.len());
    let created = index >= arr.len();
    if created {
        arr.resize(index + 1, Value::Null);
    }
    Ok((&mut arr[index], created))
}

/// Checks that every token of a `set` can be applied, without touching `root`.
///
/// Walks the existing part of the path, then the containers that would be
/// created for the rest of it.
fn check_writable(root: &Value, tokens: &[String]) -> Result<()> {
    let mut current = Some(root);
    for (at, token) in tokens.iter().enumerate() {
        current = match current {
            Some(Value::Object(map)) => map.get(token),
            Some(Value::Array(arr)) => match write_index(token)? {
                Some(index) => arr.get(index),
                None => None,
            },
            Some(_) => return Err(Error::not_container(tokens, at)),
            // created for this token, so it is an array exactly when the token looks like an index
            None => {
                if looks_like_index(token) {
                    write_index(token)?;
                }
                None
            }
        };
    }
    Ok(())
}

/// Descends into `tokens[at]`, creating it when missing with a shape chosen from
/// `tokens[at + 1]`.
fn descend_or_create<'v>(
    current: &'v mut Value,
    tokens: &[String],
    at: usize,
) -> Result<&'v mut Value> {
    let token = &tokens[at];
    let next = &tokens[at + 1];
    match current {
        Value::Object(map) => Ok(map.get_or_insert_with(token, || {
            trace!(pointer = %crate::compile(&tokens[..=at]), "creating intermediate container");
            container_for(next)
        })),
        Value::Array(arr) => {
            let (slot, created) = array_slot(arr, token)?;
            if created {
                trace!(pointer = %crate::compile(&tokens[..=at]), "appending intermediate container");
                *slot = container_for(next);
            }
            Ok(slot)
        }
        _ => Err(Error::not_container(tokens, at)),
    }
}

/// Assigns `value` at the location a pointer refers to, creating missing
/// intermediate containers on the way.
///
/// A missing intermediate becomes an array when the token after it looks like an
/// index (all digits or `-`) and an object otherwise. On arrays, `-` appends and an
/// index past the end grows the array, filling the gap with `null`.
/// Returns `root` so calls can be chained.
///
/// The whole path is checked before anything is written, so a failed `set` leaves
/// `root` unchanged.
///
/// # Errors
///
/// - [`Error::RootAssignment`] for the empty pointer
/// - [`Error::InvalidArrayIndex`] for an array token that is neither `-` nor a
///   canonical index (no leading zero)
/// - [`Error::IntermediateNotContainer`] when the path runs through a scalar
///
/// # Examples
///
/// ```rust
/// use serde_jsonpointer::{set, value};
///
/// let mut doc = value!({});
/// set(&mut doc, "/a/b", value!(5)).unwrap();
/// assert_eq!(doc, value!({ "a": { "b": 5 } }));
///
/// let mut list = value!([]);
/// set(&mut list, "/0/x/0", value!("v")).unwrap();
/// assert_eq!(list, value!([{ "x": ["v"] }]));
///
/// set(&mut list, "/3", value!(1)).unwrap();
/// assert_eq!(list, value!([{ "x": ["v"] }, null, null, 1]));
///
/// set(&mut list, "/-", value!(2)).unwrap().as_array_mut().unwrap().push(value!(3));
/// assert_eq!(list.as_array().map(Vec::len), Some(6));
/// ```
pub fn set<'v, P>(root: &'v mut Value, pointer: &P, value: Value) -> Result<&'v mut Value>
where
    P: ToTokens + ?Sized,
{
    let tokens = pointer.to_tokens()?;
    if tokens.is_empty() {
        return Err(Error::RootAssignment);
    }
    check_writable(root, &tokens)?;
    let last = tokens.len() - 1;

    let mut current = &mut *root;
    for at in 0..last {
        current = descend_or_create(current, &tokens, at)?;
    }

    let token = &tokens[last];
    match current {
        Value::Object(map) => {
            map.insert(token.clone(), value);
        }
        Value::Array(arr) => {
            let (slot, _) = array_slot(arr, token)?;
            *slot = value;
        }
        _ => return Err(Error::not_container(&tokens, last)),
    }
    Ok(root)
}

/// Removes the value a pointer refers to and returns it.
///
/// Removing from an array shifts later elements down. Removing an absent object
/// member, or an array index past the end, is a no-op that returns `None`.
///
/// # Errors
///
/// - [`Error::InvalidPointerForRemove`] for the empty pointer
/// - [`Error::InvalidReferenceToken`] if the parent does not exist
/// - [`Error::InvalidArrayIndex`] if the parent is an array and the last token is
///   not all digits
/// - [`Error::IntermediateNotContainer`] if the parent is a scalar
///
/// # Examples
///
/// ```rust
/// use serde_jsonpointer::{remove, value};
///
/// let mut doc = value!({ "a": [1, 2, 3] });
/// assert_eq!(remove(&mut doc, "/a/1").unwrap(), Some(value!(2)));
/// assert_eq!(doc, value!({ "a": [1, 3] }));
///
/// assert_eq!(remove(&mut doc, "/missing").unwrap(), None);
/// assert!(remove(&mut doc, "").is_err());
/// ```
pub fn remove<P>(root: &mut Value, pointer: &P) -> Result<Option<Value>>
where
    P: ToTokens + ?Sized,
{
    let tokens = pointer.to_tokens()?;
    let Some((token, parents)) = tokens.split_last() else {
        return Err(Error::invalid_remove(""));
    };

    let parent = lookup_mut(root, parents)
        .map_err(|failed| Error::invalid_reference(&tokens, failed))?;

    let removed = match parent {
        Value::Array(arr) => {
            let index = digit_index(token).ok_or_else(|| Error::invalid_array_index(token))?;
            (index < arr.len()).then(|| arr.remove(index))
        }
        Value::Object(map) => map.remove(token),
        _ => return Err(Error::not_container(&tokens, parents.len())),
    };

    trace!(
        pointer = %crate::compile(&tokens[..]),
        removed = removed.is_some(),
        "remove"
    );
    Ok(removed)
}

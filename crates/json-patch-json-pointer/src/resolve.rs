//! Pointer resolution: walking a token path through a document.

use serde_json::Value;

use crate::{is_valid_index, parse_json_pointer, JsonPointerError, Location, PathStep};

/// Parses an array token in lookup position.
///
/// The append sentinel `-` is only meaningful when inserting, so it is
/// rejected here along with anything that is not a plain non-negative
/// decimal integer (no sign, no leading zeros).
///
/// # Errors
///
/// Returns [`JsonPointerError::InvalidIndex`] for any non-index token.
pub fn parse_index(step: &str) -> Result<usize, JsonPointerError> {
    if !is_valid_index(step) {
        return Err(JsonPointerError::InvalidIndex);
    }
    step.parse().map_err(|_| JsonPointerError::InvalidIndex)
}

/// Resolve a token path against a document into a [`Location`].
///
/// Traversal dispatches on the current node's kind at every hop; a path
/// that looks like an array index may well address an object key one level
/// deeper, so nothing is assumed from the token's spelling alone.
///
/// # Errors
///
/// - [`JsonPointerError::NotFound`] - a missing object key, or an array
///   index at or past the end of the array
/// - [`JsonPointerError::InvalidIndex`] - an array token that is not a
///   non-negative integer (including the append sentinel `-`)
/// - [`JsonPointerError::InvalidContainer`] - a token applied to a scalar
///
/// # Example
///
/// ```
/// use json_patch_json_pointer::{parse_json_pointer, resolve};
/// use serde_json::json;
///
/// let doc = json!({"foo": {"bar": 42}});
/// let path = parse_json_pointer("/foo/bar").unwrap();
/// let loc = resolve(&doc, &path).unwrap();
/// assert_eq!(loc.value(), &json!(42));
/// assert_eq!(loc.key(), Some("bar"));
/// ```
pub fn resolve<'a>(doc: &'a Value, path: &[PathStep]) -> Result<Location<'a>, JsonPointerError> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(Location::Root { value: doc });
    };

    let mut current = doc;
    for step in parents {
        current = step_into(current, step)?;
    }

    match current {
        Value::Object(map) => {
            let value = map.get(last.as_str()).ok_or(JsonPointerError::NotFound)?;
            Ok(Location::Member {
                parent: map,
                key: last.clone(),
                value,
            })
        }
        Value::Array(arr) => {
            let index = parse_index(last)?;
            let value = arr.get(index).ok_or(JsonPointerError::NotFound)?;
            Ok(Location::Element {
                parent: arr,
                index,
                value,
            })
        }
        _ => Err(JsonPointerError::InvalidContainer),
    }
}

fn step_into<'a>(current: &'a Value, step: &str) -> Result<&'a Value, JsonPointerError> {
    match current {
        Value::Object(map) => map.get(step).ok_or(JsonPointerError::NotFound),
        Value::Array(arr) => {
            let index = parse_index(step)?;
            arr.get(index).ok_or(JsonPointerError::NotFound)
        }
        _ => Err(JsonPointerError::InvalidContainer),
    }
}

/// Resolve a pointer string against a document in one step.
///
/// # Errors
///
/// Propagates [`parse_json_pointer`] and [`resolve`] errors.
///
/// # Example
///
/// ```
/// use json_patch_json_pointer::resolve_pointer;
/// use serde_json::json;
///
/// let doc = json!({"a/b": 1});
/// let loc = resolve_pointer(&doc, "/a~1b").unwrap();
/// assert_eq!(loc.value(), &json!(1));
/// ```
pub fn resolve_pointer<'a>(
    doc: &'a Value,
    pointer: &str,
) -> Result<Location<'a>, JsonPointerError> {
    let path = parse_json_pointer(pointer)?;
    resolve(doc, &path)
}

/// Resolve a token path to a mutable reference into the document.
///
/// Same traversal rules as [`resolve`]; an empty path yields the document
/// root itself. This is the navigation primitive the patch engine mutates
/// through.
///
/// # Errors
///
/// Same as [`resolve`].
pub fn resolve_mut<'a>(
    doc: &'a mut Value,
    path: &[PathStep],
) -> Result<&'a mut Value, JsonPointerError> {
    let mut current = doc;
    for step in path {
        current = match current {
            Value::Object(map) => map
                .get_mut(step.as_str())
                .ok_or(JsonPointerError::NotFound)?,
            Value::Array(arr) => {
                let index = parse_index(step)?;
                arr.get_mut(index).ok_or(JsonPointerError::NotFound)?
            }
            _ => return Err(JsonPointerError::InvalidContainer),
        };
    }
    Ok(current)
}

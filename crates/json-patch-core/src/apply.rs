//! The patch engine: sequential application of operations to a document.
//!
//! Mutation style is in-place: every edit navigates from the root to the
//! target's parent container with [`resolve_mut`] and splices that container
//! directly, so no handle ever outlives an ancestor rewrite.

use json_patch_json_pointer::{
    is_child, parse_index, parse_json_pointer, resolve, resolve_mut, JsonPointerError, PathStep,
};
use serde_json::Value;

use crate::error::PatchError;
use crate::op::PatchOp;

/// Applies `ops` in order, threading the document through each step.
///
/// The fold is strictly sequential: operation *i + 1* observes the committed
/// result of operation *i*. The first failing operation halts the batch;
/// operations already committed are not rolled back, so a caller that needs
/// atomicity clones the input document and discards the clone on error.
///
/// # Errors
///
/// The first failing operation's error, per the taxonomy of [`PatchError`].
///
/// # Example
///
/// ```
/// use json_patch_core::{apply, PatchOp};
/// use serde_json::json;
///
/// let doc = json!({"foo": ["bar", "baz"]});
/// let ops = [PatchOp::Add { path: "/foo/1".to_string(), value: json!("qux") }];
/// assert_eq!(apply(doc, &ops).unwrap(), json!({"foo": ["bar", "qux", "baz"]}));
/// ```
pub fn apply(doc: Value, ops: &[PatchOp]) -> Result<Value, PatchError> {
    ops.iter().try_fold(doc, apply_op)
}

/// Applies a single operation, consuming the current document and producing
/// the next one.
///
/// # Errors
///
/// Same taxonomy as [`apply`].
pub fn apply_op(mut doc: Value, op: &PatchOp) -> Result<Value, PatchError> {
    match op {
        PatchOp::Add { path, value } => {
            let path = parse_json_pointer(path)?;
            add(&mut doc, &path, value.clone())?;
        }
        PatchOp::Remove { path } => {
            let path = parse_json_pointer(path)?;
            remove(&mut doc, &path)?;
        }
        PatchOp::Replace { path, value } => {
            let path = parse_json_pointer(path)?;
            let target = resolve_mut(&mut doc, &path)?;
            *target = value.clone();
        }
        PatchOp::Move { from, path } => {
            let from = parse_json_pointer(from)?;
            let path = parse_json_pointer(path)?;
            if is_child(&from, &path) {
                return Err(PatchError::InvalidOperation(
                    "cannot move a value into its own descendant".to_string(),
                ));
            }
            let detached = remove(&mut doc, &from)?;
            add(&mut doc, &path, detached)?;
        }
        PatchOp::Copy { from, path } => {
            let from = parse_json_pointer(from)?;
            let path = parse_json_pointer(path)?;
            let duplicate = resolve(&doc, &from)?.value().clone();
            add(&mut doc, &path, duplicate)?;
        }
        PatchOp::Test { path, value } => {
            let parsed = parse_json_pointer(path)?;
            let actual = resolve(&doc, &parsed)?.value();
            if actual != value {
                return Err(PatchError::TestFailed {
                    path: path.clone(),
                    expected: value.clone(),
                    actual: actual.clone(),
                });
            }
        }
    }
    Ok(doc)
}

/// Insert `value` at `path`, overwriting an existing object entry or
/// splicing an array slot. An empty path replaces the whole document.
fn add(doc: &mut Value, path: &[PathStep], value: Value) -> Result<(), PatchError> {
    let Some((last, parents)) = path.split_last() else {
        *doc = value;
        return Ok(());
    };

    let parent = resolve_mut(doc, parents)?;
    match parent {
        Value::Object(map) => {
            map.insert(last.clone(), value);
        }
        Value::Array(arr) => {
            if last == "-" {
                arr.push(value);
            } else {
                let index = parse_index(last)?;
                if index > arr.len() {
                    return Err(JsonPointerError::InvalidIndex.into());
                }
                arr.insert(index, value);
            }
        }
        _ => return Err(JsonPointerError::InvalidContainer.into()),
    }
    Ok(())
}

/// Remove the entry at `path` from its parent container and return the
/// detached value. Later array elements shift down.
fn remove(doc: &mut Value, path: &[PathStep]) -> Result<Value, PatchError> {
    let Some((last, parents)) = path.split_last() else {
        return Err(JsonPointerError::NoParent.into());
    };

    let parent = resolve_mut(doc, parents)?;
    match parent {
        Value::Object(map) => map
            .remove(last.as_str())
            .ok_or(PatchError::Pointer(JsonPointerError::NotFound)),
        Value::Array(arr) => {
            let index = parse_index(last)?;
            if index >= arr.len() {
                return Err(JsonPointerError::NotFound.into());
            }
            Ok(arr.remove(index))
        }
        _ => Err(JsonPointerError::InvalidContainer.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn one(doc: Value, op: PatchOp) -> Result<Value, PatchError> {
        apply(doc, &[op])
    }

    #[test]
    fn test_add_object_member() {
        let out = one(
            json!({"foo": "bar"}),
            PatchOp::Add {
                path: "/baz".to_string(),
                value: json!("qux"),
            },
        )
        .unwrap();
        assert_eq!(out, json!({"foo": "bar", "baz": "qux"}));
    }

    #[test]
    fn test_add_overwrites_existing_member() {
        let out = one(
            json!({"foo": "bar"}),
            PatchOp::Add {
                path: "/foo".to_string(),
                value: json!([1]),
            },
        )
        .unwrap();
        assert_eq!(out, json!({"foo": [1]}));
    }

    #[test]
    fn test_add_array_insert_shifts() {
        let out = one(
            json!({"foo": ["bar", "baz"]}),
            PatchOp::Add {
                path: "/foo/1".to_string(),
                value: json!("qux"),
            },
        )
        .unwrap();
        assert_eq!(out, json!({"foo": ["bar", "qux", "baz"]}));
    }

    #[test]
    fn test_add_array_append_sentinel() {
        let out = one(
            json!({"foo": [1, 2]}),
            PatchOp::Add {
                path: "/foo/-".to_string(),
                value: json!(3),
            },
        )
        .unwrap();
        assert_eq!(out, json!({"foo": [1, 2, 3]}));
    }

    #[test]
    fn test_add_array_index_equal_to_length() {
        let out = one(
            json!([1, 2]),
            PatchOp::Add {
                path: "/2".to_string(),
                value: json!(3),
            },
        )
        .unwrap();
        assert_eq!(out, json!([1, 2, 3]));
    }

    #[test]
    fn test_add_array_index_past_length() {
        let err = one(
            json!([1, 2]),
            PatchOp::Add {
                path: "/3".to_string(),
                value: json!(3),
            },
        )
        .unwrap_err();
        assert_eq!(err, PatchError::Pointer(JsonPointerError::InvalidIndex));
    }

    #[test]
    fn test_add_missing_parent() {
        let err = one(
            json!({}),
            PatchOp::Add {
                path: "/a/b".to_string(),
                value: json!(1),
            },
        )
        .unwrap_err();
        assert_eq!(err, PatchError::Pointer(JsonPointerError::NotFound));
    }

    #[test]
    fn test_add_into_scalar_parent() {
        let err = one(
            json!({"a": 1}),
            PatchOp::Add {
                path: "/a/b".to_string(),
                value: json!(1),
            },
        )
        .unwrap_err();
        assert_eq!(err, PatchError::Pointer(JsonPointerError::InvalidContainer));
    }

    #[test]
    fn test_remove_object_member() {
        let out = one(
            json!({"baz": "qux", "foo": "bar"}),
            PatchOp::Remove {
                path: "/baz".to_string(),
            },
        )
        .unwrap();
        assert_eq!(out, json!({"foo": "bar"}));
    }

    #[test]
    fn test_remove_array_element_shifts_down() {
        let out = one(
            json!({"foo": ["bar", "qux", "baz"]}),
            PatchOp::Remove {
                path: "/foo/1".to_string(),
            },
        )
        .unwrap();
        assert_eq!(out, json!({"foo": ["bar", "baz"]}));
    }

    #[test]
    fn test_remove_missing_entry() {
        let err = one(
            json!({"foo": 1}),
            PatchOp::Remove {
                path: "/bar".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, PatchError::Pointer(JsonPointerError::NotFound));
    }

    #[test]
    fn test_remove_append_sentinel_rejected() {
        let err = one(
            json!({"foo": [1]}),
            PatchOp::Remove {
                path: "/foo/-".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, PatchError::Pointer(JsonPointerError::InvalidIndex));
    }

    #[test]
    fn test_replace_member() {
        let out = one(
            json!({"foo": "bar"}),
            PatchOp::Replace {
                path: "/foo".to_string(),
                value: json!(42),
            },
        )
        .unwrap();
        assert_eq!(out, json!({"foo": 42}));
    }

    #[test]
    fn test_replace_array_element_no_shift() {
        let out = one(
            json!([1, 2, 3]),
            PatchOp::Replace {
                path: "/1".to_string(),
                value: json!(20),
            },
        )
        .unwrap();
        assert_eq!(out, json!([1, 20, 3]));
    }

    #[test]
    fn test_replace_root() {
        let out = one(
            json!({"a": 1}),
            PatchOp::Replace {
                path: "".to_string(),
                value: json!([true]),
            },
        )
        .unwrap();
        assert_eq!(out, json!([true]));
    }

    #[test]
    fn test_replace_missing_entry() {
        let err = one(
            json!({}),
            PatchOp::Replace {
                path: "/foo".to_string(),
                value: json!(1),
            },
        )
        .unwrap_err();
        assert_eq!(err, PatchError::Pointer(JsonPointerError::NotFound));
    }

    #[test]
    fn test_move_member() {
        let out = one(
            json!({"foo": {"bar": "baz", "waldo": "fred"}, "qux": {"corge": "grault"}}),
            PatchOp::Move {
                from: "/foo/waldo".to_string(),
                path: "/qux/thud".to_string(),
            },
        )
        .unwrap();
        assert_eq!(
            out,
            json!({"foo": {"bar": "baz"}, "qux": {"corge": "grault", "thud": "fred"}})
        );
    }

    #[test]
    fn test_move_array_element() {
        let out = one(
            json!({"foo": ["all", "grass", "cows", "eat"]}),
            PatchOp::Move {
                from: "/foo/1".to_string(),
                path: "/foo/3".to_string(),
            },
        )
        .unwrap();
        assert_eq!(out, json!({"foo": ["all", "cows", "eat", "grass"]}));
    }

    #[test]
    fn test_move_into_own_descendant_rejected() {
        let err = one(
            json!({"a": {"b": {}}}),
            PatchOp::Move {
                from: "/a".to_string(),
                path: "/a/b/c".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, PatchError::InvalidOperation(_)));
    }

    #[test]
    fn test_move_to_same_path_is_noop() {
        let doc = json!({"a": 1, "b": 2});
        let out = one(
            doc.clone(),
            PatchOp::Move {
                from: "/a".to_string(),
                path: "/a".to_string(),
            },
        )
        .unwrap();
        assert_eq!(out, doc);
    }

    #[test]
    fn test_move_missing_from() {
        let err = one(
            json!({}),
            PatchOp::Move {
                from: "/a".to_string(),
                path: "/b".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, PatchError::Pointer(JsonPointerError::NotFound));
    }

    #[test]
    fn test_copy_deep_copies() {
        let out = one(
            json!({"a": {"k": 1}}),
            PatchOp::Copy {
                from: "/a".to_string(),
                path: "/b".to_string(),
            },
        )
        .unwrap();
        assert_eq!(out, json!({"a": {"k": 1}, "b": {"k": 1}}));

        // Mutating one copy later must not affect the other
        let out = one(
            out,
            PatchOp::Add {
                path: "/b/k2".to_string(),
                value: json!(2),
            },
        )
        .unwrap();
        assert_eq!(out, json!({"a": {"k": 1}, "b": {"k": 1, "k2": 2}}));
    }

    #[test]
    fn test_copy_from_root() {
        let out = one(
            json!({"a": 1}),
            PatchOp::Copy {
                from: "".to_string(),
                path: "/self".to_string(),
            },
        )
        .unwrap();
        assert_eq!(out, json!({"a": 1, "self": {"a": 1}}));
    }

    #[test]
    fn test_test_passes_on_equal() {
        let doc = json!({"baz": "qux", "arr": [1, 2]});
        let out = one(
            doc.clone(),
            PatchOp::Test {
                path: "/baz".to_string(),
                value: json!("qux"),
            },
        )
        .unwrap();
        assert_eq!(out, doc);
    }

    #[test]
    fn test_test_object_key_order_is_irrelevant() {
        let doc = json!({"obj": {"a": 1, "b": 2}});
        let out = one(
            doc.clone(),
            PatchOp::Test {
                path: "/obj".to_string(),
                value: json!({"b": 2, "a": 1}),
            },
        )
        .unwrap();
        assert_eq!(out, doc);
    }

    #[test]
    fn test_test_is_type_sensitive() {
        let err = one(
            json!({"n": 10}),
            PatchOp::Test {
                path: "/n".to_string(),
                value: json!("10"),
            },
        )
        .unwrap_err();
        assert!(matches!(err, PatchError::TestFailed { .. }));
    }

    #[test]
    fn test_test_array_order_is_significant() {
        let err = one(
            json!({"arr": [1, 2]}),
            PatchOp::Test {
                path: "/arr".to_string(),
                value: json!([2, 1]),
            },
        )
        .unwrap_err();
        assert!(matches!(err, PatchError::TestFailed { .. }));
    }

    #[test]
    fn test_unknown_op_kind_via_parse() {
        let raw = serde_json::json!([{"op": "frobnicate", "path": "/a", "value": 1}]);
        let err = crate::op::parse_operations(raw.as_array().unwrap()).unwrap_err();
        assert!(matches!(err, PatchError::InvalidOperation(_)));
    }

    #[test]
    fn test_earlier_ops_stay_committed_after_failure() {
        let doc = json!({});
        let ops = [
            PatchOp::Add {
                path: "/a".to_string(),
                value: json!(1),
            },
            PatchOp::Remove {
                path: "/missing".to_string(),
            },
        ];
        // apply consumes the document; a caller that needs the partial
        // result folds op by op
        let after_first = apply_op(doc, &ops[0]).unwrap();
        assert_eq!(after_first, json!({"a": 1}));
        let err = apply_op(after_first, &ops[1]).unwrap_err();
        assert_eq!(err, PatchError::Pointer(JsonPointerError::NotFound));
    }
}

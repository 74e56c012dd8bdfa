//! Patch operation records (RFC 6902 section 4).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::PatchError;

/// A single JSON Patch operation.
///
/// Serializes to and from the RFC 6902 wire shape (`"op"` discriminant,
/// `"path"`, and `"from"`/`"value"` where applicable). Decoding through
/// serde is convenient for trusted input; [`parse_operations`] gives
/// field-precise errors for untrusted patch documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOp {
    /// Insert or overwrite a value at `path`.
    Add {
        /// Destination pointer.
        path: String,
        /// The literal value to insert.
        value: Value,
    },
    /// Remove the value at `path`.
    Remove {
        /// Target pointer.
        path: String,
    },
    /// Overwrite the existing value at `path`.
    Replace {
        /// Target pointer.
        path: String,
        /// The replacement value.
        value: Value,
    },
    /// Detach the value at `from` and insert it at `path`.
    Move {
        /// Source pointer.
        from: String,
        /// Destination pointer.
        path: String,
    },
    /// Deep-copy the value at `from` and insert it at `path`.
    Copy {
        /// Source pointer.
        from: String,
        /// Destination pointer.
        path: String,
    },
    /// Assert that the value at `path` equals `value`.
    Test {
        /// Target pointer.
        path: String,
        /// The expected value.
        value: Value,
    },
}

impl PatchOp {
    /// The operation's destination pointer.
    pub fn path(&self) -> &str {
        match self {
            PatchOp::Add { path, .. }
            | PatchOp::Remove { path }
            | PatchOp::Replace { path, .. }
            | PatchOp::Move { path, .. }
            | PatchOp::Copy { path, .. }
            | PatchOp::Test { path, .. } => path,
        }
    }

    /// The source pointer, for `move` and `copy`.
    pub fn from(&self) -> Option<&str> {
        match self {
            PatchOp::Move { from, .. } | PatchOp::Copy { from, .. } => Some(from),
            _ => None,
        }
    }
}

/// Validates raw operation records and turns them into [`PatchOp`]s.
///
/// All records are checked before any of them is applied, so a malformed
/// record can never leave a document half-patched.
///
/// # Errors
///
/// - [`PatchError::MissingField`] - a record is not an object, `op` or
///   `path` is absent, empty, or not a string, `value` is absent on
///   `add`/`replace`/`test`, or `from` is absent on `move`/`copy`
/// - [`PatchError::InvalidOperation`] - `op` names an unknown kind
pub fn parse_operations(raw: &[Value]) -> Result<Vec<PatchOp>, PatchError> {
    raw.iter().map(parse_operation).collect()
}

fn parse_operation(raw: &Value) -> Result<PatchOp, PatchError> {
    let record = raw.as_object().ok_or(PatchError::MissingField("op"))?;
    let kind = required_string(record, "op")?;
    let path = required_string(record, "path")?.to_string();

    match kind {
        "add" => Ok(PatchOp::Add {
            path,
            value: required_value(record)?,
        }),
        "remove" => Ok(PatchOp::Remove { path }),
        "replace" => Ok(PatchOp::Replace {
            path,
            value: required_value(record)?,
        }),
        "move" => Ok(PatchOp::Move {
            from: required_from(record)?,
            path,
        }),
        "copy" => Ok(PatchOp::Copy {
            from: required_from(record)?,
            path,
        }),
        "test" => Ok(PatchOp::Test {
            path,
            value: required_value(record)?,
        }),
        other => Err(PatchError::InvalidOperation(format!(
            "unknown op kind {other:?}"
        ))),
    }
}

fn required_string<'a>(
    record: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, PatchError> {
    match record.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s),
        _ => Err(PatchError::MissingField(field)),
    }
}

/// `from` must be present and a string; unlike `path` it may be empty,
/// since the empty pointer addresses the document root.
fn required_from(record: &Map<String, Value>) -> Result<String, PatchError> {
    match record.get("from") {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(PatchError::MissingField("from")),
    }
}

/// `value` must be present; an explicit `null` is a legal value, absence is
/// not.
fn required_value(record: &Map<String, Value>) -> Result<Value, PatchError> {
    record
        .get("value")
        .cloned()
        .ok_or(PatchError::MissingField("value"))
}

//! Error types for the patch engine.

use json_patch_json_pointer::JsonPointerError;
use serde_json::Value;
use thiserror::Error;

/// Errors produced while parsing operation records or applying a patch.
///
/// Every error is returned to the caller; nothing is swallowed or logged
/// internally, and any error is terminal for the `apply` call that raised
/// it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatchError {
    /// Pointer parsing or resolution failed.
    #[error(transparent)]
    Pointer(#[from] JsonPointerError),
    /// A `test` operation found a value different from the expected one.
    #[error("test failed at {path:?}: expected {expected}, got {actual}")]
    TestFailed {
        /// The tested pointer.
        path: String,
        /// The operation's literal value.
        expected: Value,
        /// The value actually found at `path`.
        actual: Value,
    },
    /// The operation is semantically illegal, e.g. an unknown op kind or a
    /// move of a container into its own descendant.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    /// An operation record lacks a required field.
    #[error("operation record is missing required field {0:?}")]
    MissingField(&'static str),
}

//! Validation functions for JSON Pointer.

use crate::{JsonPointerError, PathStep};

/// Maximum allowed pointer string length.
const MAX_POINTER_LENGTH: usize = 1024;

/// Maximum allowed path depth.
const MAX_PATH_LENGTH: usize = 256;

/// Validate a JSON Pointer string without parsing it.
///
/// # Errors
///
/// Returns an error if:
/// - The pointer is non-empty but doesn't start with `/` or `#`
/// - The pointer exceeds the maximum length (1024 characters)
///
/// # Example
///
/// ```
/// use json_patch_json_pointer::validate_json_pointer;
///
/// validate_json_pointer("").unwrap();  // Root is valid
/// validate_json_pointer("/foo/bar").unwrap();  // Valid absolute pointer
/// validate_json_pointer("#/foo").unwrap();  // Valid fragment form
/// validate_json_pointer("foo").unwrap_err();  // Missing leading /
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), JsonPointerError> {
    if pointer.is_empty() {
        return Ok(());
    }
    if !pointer.starts_with('/') && !pointer.starts_with('#') {
        return Err(JsonPointerError::MalformedPointer);
    }
    if pointer.len() > MAX_POINTER_LENGTH {
        return Err(JsonPointerError::PointerTooLong);
    }
    Ok(())
}

/// Validate a path (array of path steps).
///
/// # Errors
///
/// Returns an error if the path exceeds the maximum depth (256 steps).
pub fn validate_path(path: &[PathStep]) -> Result<(), JsonPointerError> {
    if path.len() > MAX_PATH_LENGTH {
        return Err(JsonPointerError::PathTooLong);
    }
    Ok(())
}

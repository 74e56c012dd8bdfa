//! JSON Pointer (RFC 6901) utilities.
//!
//! This crate implements the pointer side of JSON Patch: parsing pointer
//! strings into reference tokens, escaping/unescaping per
//! [RFC 6901](https://tools.ietf.org/html/rfc6901), and resolving a token
//! path against a `serde_json::Value` document into a [`Location`] that
//! identifies both the value and the container that owns it.
//!
//! # Example
//!
//! ```
//! use json_patch_json_pointer::{parse_json_pointer, format_json_pointer, get};
//!
//! // Parse a JSON pointer string into path components
//! let path = parse_json_pointer("/foo/bar").unwrap();
//! assert_eq!(path, vec!["foo".to_string(), "bar".to_string()]);
//!
//! // Format path components back to a JSON pointer string
//! let pointer = format_json_pointer(&path);
//! assert_eq!(pointer, "/foo/bar");
//!
//! // Get a value from a JSON document
//! let doc = serde_json::json!({"foo": {"bar": 42}});
//! let val = get(&doc, &path);
//! assert_eq!(val, Some(&serde_json::json!(42)));
//! ```

use thiserror::Error;

pub mod types;
pub use types::{Location, Path, PathStep};

pub mod validate;
pub use validate::{validate_json_pointer, validate_path};

pub mod resolve;
pub use resolve::{parse_index, resolve, resolve_mut, resolve_pointer};

pub mod get;
pub use get::{get, get_mut};

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use json_patch_json_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("no-escapes"), "no-escapes");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~1 must be replaced before ~0
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
///
/// Per RFC 6901, `/` is replaced with `~1` and `~` is replaced with `~0`.
///
/// # Example
///
/// ```
/// use json_patch_json_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// assert_eq!(escape_component("no-escapes"), "no-escapes");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~ must be escaped before /
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a JSON Pointer string into path components.
///
/// - The empty string denotes the document root and yields an empty path.
/// - A `#`-prefixed pointer is in URI fragment form: the remainder is
///   percent-decoded before tokenizing.
/// - Any other pointer must start with `/`; the leading `/` is stripped and
///   each `/`-delimited component is unescaped. A trailing `/` yields an
///   empty-string component, not a dropped one.
///
/// # Errors
///
/// Returns [`JsonPointerError::MalformedPointer`] when a non-empty pointer
/// does not start with `/`, or when a fragment-form pointer contains an
/// invalid percent escape.
///
/// # Example
///
/// ```
/// use json_patch_json_pointer::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer("").unwrap(), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/").unwrap(), vec![""]);
/// assert_eq!(parse_json_pointer("/foo/bar").unwrap(), vec!["foo", "bar"]);
/// assert_eq!(parse_json_pointer("/a~0b/c~1d").unwrap(), vec!["a~b", "c/d"]);
/// assert_eq!(parse_json_pointer("#/a%20b").unwrap(), vec!["a b"]);
/// assert!(parse_json_pointer("foo").is_err());
/// ```
pub fn parse_json_pointer(pointer: &str) -> Result<Path, JsonPointerError> {
    if let Some(fragment) = pointer.strip_prefix('#') {
        let decoded = decode_fragment(fragment)?;
        return parse_decoded(&decoded);
    }
    parse_decoded(pointer)
}

fn parse_decoded(pointer: &str) -> Result<Path, JsonPointerError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    if !pointer.starts_with('/') {
        return Err(JsonPointerError::MalformedPointer);
    }
    Ok(pointer[1..].split('/').map(unescape_component).collect())
}

/// Percent-decode the fragment part of a `#`-form pointer.
///
/// `urlencoding::decode` passes malformed escapes through untouched, so the
/// escapes are validated here first: every `%` must be followed by exactly
/// two hex digits.
fn decode_fragment(fragment: &str) -> Result<String, JsonPointerError> {
    let bytes = fragment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                return Err(JsonPointerError::MalformedPointer);
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    urlencoding::decode(fragment)
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| JsonPointerError::MalformedPointer)
}

/// Parse a JSON Pointer string that may not have a leading `/`.
///
/// This is a convenience function that handles both absolute and relative
/// pointers.
pub fn parse_json_pointer_relaxed(pointer: &str) -> Result<Path, JsonPointerError> {
    if pointer.starts_with('/') || pointer.starts_with('#') || pointer.is_empty() {
        return parse_json_pointer(pointer);
    }
    let mut absolute = String::with_capacity(pointer.len() + 1);
    absolute.push('/');
    absolute.push_str(pointer);
    parse_json_pointer(&absolute)
}

/// Format path components into a JSON Pointer string.
///
/// Returns an empty string for the root path (empty components). Inverse of
/// [`parse_json_pointer`] for non-fragment pointers.
///
/// # Example
///
/// ```
/// use json_patch_json_pointer::format_json_pointer;
///
/// assert_eq!(format_json_pointer(&[]), "");
/// assert_eq!(format_json_pointer(&["foo".to_string()]), "/foo");
/// assert_eq!(format_json_pointer(&["a~b".to_string(), "c/d".to_string()]), "/a~0b/c~1d");
/// ```
pub fn format_json_pointer(path: &[PathStep]) -> String {
    if path.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Check if a path points to the root value.
///
/// # Example
///
/// ```
/// use json_patch_json_pointer::is_root;
///
/// assert!(is_root(&[]));
/// assert!(!is_root(&["foo".to_string()]));
/// ```
pub fn is_root(path: &[PathStep]) -> bool {
    path.is_empty()
}

/// Check if `parent` path contains the `child` path.
///
/// A path never contains itself; only strict descendants match.
///
/// # Example
///
/// ```
/// use json_patch_json_pointer::is_child;
///
/// let parent = vec!["foo".to_string()];
/// let child = vec!["foo".to_string(), "bar".to_string()];
/// assert!(is_child(&parent, &child));
/// assert!(!is_child(&child, &parent));
/// assert!(!is_child(&parent, &parent));
/// ```
pub fn is_child(parent: &[PathStep], child: &[PathStep]) -> bool {
    if parent.len() >= child.len() {
        return false;
    }
    for i in 0..parent.len() {
        if parent[i] != child[i] {
            return false;
        }
    }
    true
}

/// Check if two paths are equal.
pub fn is_path_equal(p1: &[PathStep], p2: &[PathStep]) -> bool {
    if p1.len() != p2.len() {
        return false;
    }
    for i in 0..p1.len() {
        if p1[i] != p2[i] {
            return false;
        }
    }
    true
}

/// Get the parent path of a given path.
///
/// # Errors
///
/// Returns [`JsonPointerError::NoParent`] if the path is the root.
///
/// # Example
///
/// ```
/// use json_patch_json_pointer::parent;
///
/// assert_eq!(parent(&["foo".to_string(), "bar".to_string()]).unwrap(), vec!["foo"]);
/// assert!(parent(&[]).is_err());
/// ```
pub fn parent(path: &[PathStep]) -> Result<Path, JsonPointerError> {
    if path.is_empty() {
        return Err(JsonPointerError::NoParent);
    }
    Ok(path[..path.len() - 1].to_vec())
}

/// Check if a string represents a valid non-negative integer array index.
///
/// The append sentinel `-` is not an index.
///
/// # Example
///
/// ```
/// use json_patch_json_pointer::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("1.5"));
/// assert!(!is_valid_index("01"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    // First char can't be a leading zero unless the index is just "0"
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Errors produced while parsing or resolving a JSON Pointer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    /// Pointer syntax error: missing leading `/` or invalid percent escape.
    #[error("malformed JSON pointer")]
    MalformedPointer,
    /// A token addressed a missing object key or an array slot past the end.
    #[error("path not found")]
    NotFound,
    /// An array token is not a non-negative integer, or an insertion index
    /// is past the end of the array.
    #[error("invalid array index")]
    InvalidIndex,
    /// A token tried to traverse into a scalar value.
    #[error("cannot index into a non-container value")]
    InvalidContainer,
    /// The root path has no parent.
    #[error("path has no parent")]
    NoParent,
    /// Pointer string exceeds the maximum supported length.
    #[error("pointer too long")]
    PointerTooLong,
    /// Path exceeds the maximum supported depth.
    #[error("path too long")]
    PathTooLong,
}

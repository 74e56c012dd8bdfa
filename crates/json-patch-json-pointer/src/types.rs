//! Type definitions for JSON Pointer.

use serde_json::{Map, Value};

/// A step in a JSON Pointer path.
///
/// Stored in unescaped form; array indices keep their decimal spelling.
pub type PathStep = String;

/// A JSON Pointer path.
pub type Path = Vec<PathStep>;

/// A resolved location inside a JSON document.
///
/// Structural edits act on the *container* that owns a value, not on the
/// value alone, so a non-root location carries the owning container and the
/// key or index alongside the value itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Location<'a> {
    /// The whole document.
    Root {
        /// The document root value.
        value: &'a Value,
    },
    /// An object entry, identified by key.
    Member {
        /// The object owning the entry.
        parent: &'a Map<String, Value>,
        /// The entry's key, unescaped.
        key: String,
        /// The entry's value.
        value: &'a Value,
    },
    /// An array slot, identified by index.
    Element {
        /// The array owning the slot.
        parent: &'a Vec<Value>,
        /// The slot's index.
        index: usize,
        /// The slot's value.
        value: &'a Value,
    },
}

impl<'a> Location<'a> {
    /// The value at this location.
    pub fn value(&self) -> &'a Value {
        match self {
            Location::Root { value }
            | Location::Member { value, .. }
            | Location::Element { value, .. } => value,
        }
    }

    /// Check if this location is the document root.
    pub fn is_root(&self) -> bool {
        matches!(self, Location::Root { .. })
    }

    /// The object key, when this location is an object entry.
    pub fn key(&self) -> Option<&str> {
        match self {
            Location::Member { key, .. } => Some(key),
            _ => None,
        }
    }

    /// The array index, when this location is an array slot.
    pub fn index(&self) -> Option<usize> {
        match self {
            Location::Element { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// The owning array, when this location is an array slot.
    pub fn as_array(&self) -> Option<&'a Vec<Value>> {
        match self {
            Location::Element { parent, .. } => Some(parent),
            _ => None,
        }
    }

    /// The owning object, when this location is an object entry.
    pub fn as_object(&self) -> Option<&'a Map<String, Value>> {
        match self {
            Location::Member { parent, .. } => Some(parent),
            _ => None,
        }
    }
}

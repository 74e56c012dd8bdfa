//! JSON Patch (RFC 6902) engine for json-patch-rs.
//!
//! Applies an ordered sequence of structural edit operations (`add`,
//! `remove`, `replace`, `move`, `copy`, `test`) to a decoded
//! `serde_json::Value` document. Pointer resolution is delegated to the
//! `json-patch-json-pointer` crate.
//!
//! # Example
//!
//! ```
//! use json_patch_core::{apply, parse_operations};
//! use serde_json::json;
//!
//! let doc = json!({"foo": "bar"});
//! let raw = json!([{"op": "add", "path": "/baz", "value": "qux"}]);
//! let ops = parse_operations(raw.as_array().unwrap()).unwrap();
//! let patched = apply(doc, &ops).unwrap();
//! assert_eq!(patched, json!({"foo": "bar", "baz": "qux"}));
//! ```

pub mod apply;
pub mod error;
pub mod op;

pub use apply::{apply, apply_op};
pub use error::PatchError;
pub use op::{parse_operations, PatchOp};

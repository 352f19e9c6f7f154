//! Minimal JSON front end: a recursive-descent parser producing a typed value tree.
//!
//! ```
//! use minijson::json::{Kind, parse};
//!
//! let value = parse("[1, \"two\", null]").expect("valid json");
//! assert_eq!(value.kind(), Kind::Array);
//! assert_eq!(value.array_element(1).string(), b"two");
//! ```

/// Parsing, value model, and serialization.
pub mod json;

//! # json-object
//!
//! A minimal JSON value model with a recursive-descent parser and a matching
//! serializer.
//!
//! [`parse`] turns text into a [`Value`] tree and reports how many bytes it
//! consumed; rendering a `Value` with `to_string()` turns it back into text.
//!
//! ## Quick start
//!
//! ```rust
//! use json_object::{parse, Value};
//!
//! let text = r#"{"work":996,"school":[985,211]}"#;
//! let (value, len) = parse(text).unwrap();
//! assert_eq!(len, text.len());
//! assert_eq!(value["work"], Value::Int(996));
//! assert_eq!(value["school"].to_string(), "[985, 211]");
//! ```
//!
//! ## Modules
//!
//! - [`value`]: the `Value` tagged union, accessors, indexing and rendering
//! - [`parser`]: text → `Value` (`parse`, `parse_document`, `FromStr`)
//! - [`options`]: `ParseOptions` (nesting limit, trailing-content policy)
//! - [`error`]: `ParseError` and `AccessError`
//! - `serde_impl`: `Serialize` for `Value` and `serde_json::Value` conversions

pub mod error;
pub mod options;
pub mod parser;
mod serde_impl;
pub mod value;

pub use error::{AccessError, ParseError};
pub use options::ParseOptions;
pub use parser::{
    parse, parse_document, parse_document_with, parse_with, reject_trailing, unescape,
};
pub use value::{Map, Value, Variant};

//! The `Value` tree: a closed tagged union over the seven JSON shapes.
//!
//! Values are built bottom-up by the parser (or by hand through the `From`
//! impls) and own their children exclusively. Rendering goes through
//! [`Display`](fmt::Display), so `value.to_string()` yields JSON text. Strings
//! use the same short escapes the parser reads (`\0`, `\a` and `\v` included)
//! and other control characters are written raw, so anything the parser produced
//! parses back unchanged. Use the serde bridge for strict JSON output.
//!
//! # Access
//!
//! - [`Value::is`] / [`Value::get`] narrow to a payload type. `get` panics on a
//!   mismatched variant; check with `is` (or use [`Value::try_get`]) first.
//! - `value[i]` and `value["key"]` index into lists and objects. Writing through
//!   `value["key"]` inserts `Null` for an absent key; reading panics instead.
//! - [`Value::get_index`], [`Value::get_key`] and [`Value::get_or_insert`] are the
//!   checked forms and report failures as [`AccessError`].

use std::collections::HashMap;
use std::fmt::{self, Write};
use std::ops::{Index, IndexMut};

use crate::error::AccessError;

/// Object payload. Iteration order is unspecified.
pub type Map = HashMap<String, Value>;

/// One JSON value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Object(Map),
}

/// Payload types a [`Value`] can be narrowed to.
///
/// Implemented for `()` (Null), `bool`, `i64`, `f64`, `String`, `Vec<Value>` and
/// [`Map`].
pub trait Variant {
    /// Variant name as reported by [`Value::type_name`].
    const NAME: &'static str;

    fn narrow(value: &Value) -> Option<&Self>;

    fn narrow_mut(value: &mut Value) -> Option<&mut Self>;
}

impl Variant for () {
    const NAME: &'static str = "null";

    fn narrow(value: &Value) -> Option<&Self> {
        match value {
            Value::Null => Some(&()),
            _ => None,
        }
    }

    fn narrow_mut(value: &mut Value) -> Option<&mut Self> {
        match value {
            // A `Box` of a zero-sized type never allocates, so this leaks nothing.
            Value::Null => Some(Box::leak(Box::new(()))),
            _ => None,
        }
    }
}

macro_rules! impl_variant {
    ($ty:ty, $variant:ident, $name:literal) => {
        impl Variant for $ty {
            const NAME: &'static str = $name;

            fn narrow(value: &Value) -> Option<&Self> {
                match value {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn narrow_mut(value: &mut Value) -> Option<&mut Self> {
                match value {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

impl_variant!(bool, Bool, "bool");
impl_variant!(i64, Int, "int");
impl_variant!(f64, Float, "float");
impl_variant!(String, String, "string");
impl_variant!(Vec<Value>, List, "list");
impl_variant!(Map, Object, "object");

#[cold]
#[track_caller]
fn type_mismatch(expected: &str, found: &str) -> ! {
    panic!("type mismatch: expected {expected}, found {found}")
}

impl Value {
    /// Lower-case name of the active variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => <() as Variant>::NAME,
            Value::Bool(_) => <bool as Variant>::NAME,
            Value::Int(_) => <i64 as Variant>::NAME,
            Value::Float(_) => <f64 as Variant>::NAME,
            Value::String(_) => <String as Variant>::NAME,
            Value::List(_) => <Vec<Value> as Variant>::NAME,
            Value::Object(_) => <Map as Variant>::NAME,
        }
    }

    /// Does the active variant hold a `T`?
    pub fn is<T: Variant>(&self) -> bool {
        T::narrow(self).is_some()
    }

    /// Narrow to `T`.
    ///
    /// # Panics
    ///
    /// Panics if the active variant is not `T`.
    #[track_caller]
    pub fn get<T: Variant>(&self) -> &T {
        match T::narrow(self) {
            Some(inner) => inner,
            None => type_mismatch(T::NAME, self.type_name()),
        }
    }

    /// Narrow to `T` mutably.
    ///
    /// # Panics
    ///
    /// Panics if the active variant is not `T`.
    #[track_caller]
    pub fn get_mut<T: Variant>(&mut self) -> &mut T {
        let found = self.type_name();
        match T::narrow_mut(self) {
            Some(inner) => inner,
            None => type_mismatch(T::NAME, found),
        }
    }

    pub fn try_get<T: Variant>(&self) -> Option<&T> {
        T::narrow(self)
    }

    pub fn try_get_mut<T: Variant>(&mut self) -> Option<&mut T> {
        T::narrow_mut(self)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Number of children for containers, `None` for leaves.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::List(items) => Some(items.len()),
            Value::Object(map) => Some(map.len()),
            _ => None,
        }
    }

    /// True for empty containers. Leaves are never empty.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Checked list indexing.
    pub fn get_index(&self, index: usize) -> Result<&Value, AccessError> {
        let items = self.expect::<Vec<Value>>()?;
        items.get(index).ok_or(AccessError::IndexOutOfBounds {
            index,
            len: items.len(),
        })
    }

    /// Non-mutating object lookup. An absent key is an error, never an insert.
    pub fn get_key(&self, key: &str) -> Result<&Value, AccessError> {
        self.expect::<Map>()?
            .get(key)
            .ok_or_else(|| AccessError::KeyNotFound(key.to_string()))
    }

    /// Mutable object lookup that inserts `Null` when `key` is absent.
    pub fn get_or_insert(&mut self, key: &str) -> Result<&mut Value, AccessError> {
        let found = self.type_name();
        let map = self
            .try_get_mut::<Map>()
            .ok_or(AccessError::TypeMismatch {
                expected: <Map as Variant>::NAME,
                found,
            })?;
        Ok(map.entry(key.to_string()).or_default())
    }

    fn expect<T: Variant>(&self) -> Result<&T, AccessError> {
        T::narrow(self).ok_or(AccessError::TypeMismatch {
            expected: T::NAME,
            found: self.type_name(),
        })
    }
}

impl Index<usize> for Value {
    type Output = Value;

    #[track_caller]
    fn index(&self, index: usize) -> &Value {
        &self.get::<Vec<Value>>()[index]
    }
}

impl IndexMut<usize> for Value {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Value {
        &mut self.get_mut::<Vec<Value>>()[index]
    }
}

impl Index<&str> for Value {
    type Output = Value;

    #[track_caller]
    fn index(&self, key: &str) -> &Value {
        match self.get::<Map>().get(key) {
            Some(value) => value,
            None => panic!("key not found: {key:?}"),
        }
    }
}

impl IndexMut<&str> for Value {
    #[track_caller]
    fn index_mut(&mut self, key: &str) -> &mut Value {
        self.get_mut::<Map>().entry(key.to_string()).or_default()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write_float(*x, f),
            Value::String(s) => write_quoted(s, f),
            Value::List(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
            Value::Object(map) => {
                f.write_char('{')?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_quoted(key, f)?;
                    write!(f, ": {value}")?;
                }
                f.write_char('}')
            }
        }
    }
}

/// `Debug` formatting keeps a fractional part or exponent (`42.0`, `1e20`), so a
/// rendered float always parses back as a float.
fn write_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_finite() {
        write!(f, "{x:?}")
    } else {
        f.write_str("null")
    }
}

fn write_quoted(s: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{08}' => f.write_str("\\b")?,
            '\u{0c}' => f.write_str("\\f")?,
            '\u{0b}' => f.write_str("\\v")?,
            '\u{07}' => f.write_str("\\a")?,
            '\0' => f.write_str("\\0")?,
            // Other control characters go out raw: the parser has no `\u` escape
            // and reads them back verbatim.
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::List(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().collect())
    }
}

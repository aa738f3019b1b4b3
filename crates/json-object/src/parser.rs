//! Recursive-descent JSON parser.
//!
//! Every parse function takes a view starting at the first byte of the thing it
//! parses and returns the value together with the number of bytes it consumed.
//! Containers advance a cursor by that amount instead of re-scanning, and
//! recurse on suffix views of the original text.
//!
//! # Key design decisions
//!
//! - **Consumed length**: byte count of the view, so callers can slice with it.
//!   Zero only for empty input; failures are errors, never a zero-length result.
//! - **Error offsets**: each level reports offsets relative to its own view and
//!   the enclosing level rebases them, so the offset that reaches the caller is
//!   absolute.
//! - **Permissive separators**: commas between list elements and colons after
//!   object keys are skipped when present but not required, and a trailing comma
//!   is accepted.
//! - **Escapes**: single-character C-style escapes only (see [`unescape`]); there
//!   is no `\uXXXX` decoding.

use std::str::FromStr;

use log::{debug, trace};

use crate::error::{ParseError, Result};
use crate::options::ParseOptions;
use crate::value::{Map, Value};

/// Parse one value from the start of `text`.
///
/// Returns the value and the number of bytes consumed, which includes leading
/// whitespace. Content after the value is left alone; use [`parse_document`] to
/// reject it. Empty or whitespace-only input yields `Null`.
///
/// ```
/// use json_object::{parse, Value};
///
/// let (value, len) = parse("[1,2,3] tail").unwrap();
/// assert_eq!(value, Value::List(vec![1.into(), 2.into(), 3.into()]));
/// assert_eq!(len, 7);
/// ```
pub fn parse(text: &str) -> Result<(Value, usize)> {
    parse_with(text, &ParseOptions::default())
}

/// [`parse`] with explicit options.
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<(Value, usize)> {
    let skipped = skip_whitespace(text);
    if skipped == text.len() {
        return Ok((Value::Null, skipped));
    }

    let mut parser = Parser { options, depth: 0 };
    match parser.parse_value(&text[skipped..]) {
        Ok((value, len)) => Ok((value, skipped + len)),
        Err(err) => {
            let err = err.shifted(skipped);
            debug!("parse failed: {err}");
            Err(err)
        }
    }
}

/// Parse a whole document: one value followed by nothing but whitespace.
pub fn parse_document(text: &str) -> Result<Value> {
    parse_document_with(text, &ParseOptions::default())
}

/// [`parse_document`] with explicit options. `allow_trailing` turns off the
/// trailing-content check.
pub fn parse_document_with(text: &str, options: &ParseOptions) -> Result<Value> {
    let (value, len) = parse_with(text, options)?;
    if !options.allow_trailing {
        reject_trailing(text, len)?;
    }
    Ok(value)
}

/// Check that nothing but whitespace follows the first `consumed` bytes of
/// `text`, as reported by [`parse`].
///
/// ```
/// use json_object::{parse, reject_trailing, ParseError};
///
/// let text = "[1] x";
/// let (_, len) = parse(text).unwrap();
/// assert_eq!(
///     reject_trailing(text, len),
///     Err(ParseError::TrailingCharacters { offset: 4 })
/// );
/// assert_eq!(reject_trailing("[1]\n", 3), Ok(()));
/// ```
pub fn reject_trailing(text: &str, consumed: usize) -> Result<()> {
    let rest = &text[consumed..];
    let ws = skip_whitespace(rest);
    if ws != rest.len() {
        return Err(ParseError::TrailingCharacters {
            offset: consumed + ws,
        });
    }
    Ok(())
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_document(s)
    }
}

/// Map the character after a backslash to the character it stands for.
pub fn unescape(ch: char) -> char {
    match ch {
        'r' => '\r',
        'n' => '\n',
        't' => '\t',
        '0' => '\0',
        'a' => '\u{07}',
        'b' => '\u{08}',
        'f' => '\u{0c}',
        'v' => '\u{0b}',
        other => other,
    }
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0c | 0x0b | 0x00)
}

/// Length of the leading whitespace run.
fn skip_whitespace(text: &str) -> usize {
    text.bytes().take_while(|&b| is_whitespace(b)).count()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Length of the longest prefix matching `[+-]?digits(.digits)?([eE][+-]?digits)?`,
/// or 0 when there is no match.
fn number_span(bytes: &[u8]) -> usize {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_digits = count_digits(&bytes[i..]);
    if int_digits == 0 {
        return 0;
    }
    i += int_digits;

    if bytes.get(i) == Some(&b'.') {
        let frac_digits = count_digits(&bytes[i + 1..]);
        if frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    i
}

/// The run of characters up to the next delimiter, for error messages.
fn offending_token(view: &str) -> &str {
    let end = view
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c.is_whitespace() || matches!(c, ',' | ':' | '[' | ']' | '{' | '}'))
        .map(|(i, _)| i)
        .unwrap_or(view.len());
    &view[..end]
}

#[derive(Clone, Copy)]
enum Scan {
    Normal,
    Escape,
}

struct Parser<'o> {
    options: &'o ParseOptions,
    depth: usize,
}

impl Parser<'_> {
    /// Dispatch on the first significant character of `view`.
    fn parse_value(&mut self, view: &str) -> Result<(Value, usize)> {
        let skipped = skip_whitespace(view);
        if skipped != 0 {
            if skipped == view.len() {
                return Err(ParseError::UnexpectedEnd { offset: skipped });
            }
            let (value, len) = self
                .parse_value(&view[skipped..])
                .map_err(|e| e.shifted(skipped))?;
            return Ok((value, skipped + len));
        }

        let Some(first) = view.chars().next() else {
            return Err(ParseError::UnexpectedEnd { offset: 0 });
        };
        trace!("dispatch {first:?} at depth {}", self.depth);

        match first {
            '+' | '-' | '0'..='9' => parse_number(view),
            '"' => parse_string(view),
            '[' => self.parse_list(view),
            '{' => self.parse_object(view),
            't' | 'f' | 'n' => parse_keyword(view, first),
            found => Err(ParseError::UnexpectedToken { offset: 0, found }),
        }
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(ParseError::DepthLimitExceeded {
                offset: 0,
                limit: self.options.max_depth,
            });
        }
        Ok(())
    }

    fn parse_list(&mut self, view: &str) -> Result<(Value, usize)> {
        self.enter()?;
        let bytes = view.as_bytes();
        let mut items = Vec::new();
        let mut i = 1;

        loop {
            i += skip_whitespace(&view[i..]);
            match bytes.get(i) {
                None => {
                    return Err(ParseError::InvalidContainer {
                        offset: 0,
                        message: "list is missing its closing ']'".to_string(),
                    });
                }
                Some(b']') => {
                    i += 1;
                    break;
                }
                Some(_) => {
                    let (item, len) = self.parse_value(&view[i..]).map_err(|e| e.shifted(i))?;
                    items.push(item);
                    i += len;
                    i += skip_whitespace(&view[i..]);
                    if bytes.get(i) == Some(&b',') {
                        i += 1;
                    }
                }
            }
        }

        self.depth -= 1;
        debug!("parsed list of {} items spanning {i} bytes", items.len());
        Ok((Value::List(items), i))
    }

    fn parse_object(&mut self, view: &str) -> Result<(Value, usize)> {
        self.enter()?;
        let bytes = view.as_bytes();
        let mut map = Map::new();
        let mut i = 1;

        loop {
            i += skip_whitespace(&view[i..]);
            match bytes.get(i) {
                None => {
                    return Err(ParseError::InvalidContainer {
                        offset: 0,
                        message: "object is missing its closing '}'".to_string(),
                    });
                }
                Some(b'}') => {
                    i += 1;
                    break;
                }
                Some(_) => {}
            }

            let key_at = i;
            let (key, len) = self.parse_value(&view[i..]).map_err(|e| e.shifted(i))?;
            let key = match key {
                Value::String(key) => key,
                other => {
                    return Err(ParseError::NonStringKey {
                        offset: key_at,
                        found: other.type_name(),
                    });
                }
            };
            i += len;
            i += skip_whitespace(&view[i..]);
            if bytes.get(i) == Some(&b':') {
                i += 1;
            }
            i += skip_whitespace(&view[i..]);
            if bytes.get(i) == Some(&b'}') {
                return Err(ParseError::InvalidContainer {
                    offset: i,
                    message: format!("key {key:?} has no value"),
                });
            }

            let (value, len) = self.parse_value(&view[i..]).map_err(|e| e.shifted(i))?;
            if map.insert(key, value).is_some() {
                trace!("duplicate key at offset {key_at} overwritten");
            }
            i += len;
            i += skip_whitespace(&view[i..]);
            if bytes.get(i) == Some(&b',') {
                i += 1;
            }
        }

        self.depth -= 1;
        debug!("parsed object of {} keys spanning {i} bytes", map.len());
        Ok((Value::Object(map), i))
    }
}

/// Integer first, then float. Overflowing floats (`1e400`) are rejected.
fn parse_number(view: &str) -> Result<(Value, usize)> {
    let span = number_span(view.as_bytes());
    let literal = &view[..span];

    if span > 0 {
        if let Ok(n) = literal.parse::<i64>() {
            return Ok((Value::Int(n), span));
        }
        if let Ok(x) = literal.parse::<f64>() {
            if x.is_finite() {
                return Ok((Value::Float(x), span));
            }
        }
    }

    let literal = if span > 0 {
        literal
    } else {
        offending_token(view)
    };
    Err(ParseError::InvalidNumber {
        offset: 0,
        literal: literal.to_string(),
    })
}

/// Two-state scan from just after the opening quote. Consumed length covers the
/// raw text, both quotes included.
fn parse_string(view: &str) -> Result<(Value, usize)> {
    let mut out = String::new();
    let mut state = Scan::Normal;

    for (i, ch) in view.char_indices().skip(1) {
        match state {
            Scan::Normal => match ch {
                '\\' => state = Scan::Escape,
                '"' => return Ok((Value::String(out), i + 1)),
                _ => out.push(ch),
            },
            Scan::Escape => {
                out.push(unescape(ch));
                state = Scan::Normal;
            }
        }
    }

    Err(ParseError::UnterminatedString { offset: 0 })
}

fn parse_keyword(view: &str, first: char) -> Result<(Value, usize)> {
    for (word, value) in [
        ("true", Value::Bool(true)),
        ("false", Value::Bool(false)),
        ("null", Value::Null),
    ] {
        if view.starts_with(word) {
            return Ok((value, word.len()));
        }
    }
    Err(ParseError::UnexpectedToken {
        offset: 0,
        found: first,
    })
}

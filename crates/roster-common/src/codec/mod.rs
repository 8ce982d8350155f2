//! Custom-id codec
//!
//! Packs a small string map into the opaque id a button carries, so a click can
//! be routed back to its roster without server-side session state.
//!
//! Entries are written in ascending key order as
//! `<len(key)>:<key><len(value)>:<value>` with no separators, where `len` is the
//! byte length. The encoded token is limited to [`MAX_TOKEN_LEN`] bytes.

use std::collections::BTreeMap;

use thiserror::Error;

/// Upper bound on an encoded token, matching the platform's custom-id limit
pub const MAX_TOKEN_LEN: usize = 100;

/// Codec errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    #[error("Token too long: {len} bytes (max {max})")]
    SizeExceeded { len: usize, max: usize },
}

/// Encode a map into a token
pub fn encode(items: &BTreeMap<String, String>) -> Result<String, CodecError> {
    let mut token = String::new();
    for (key, value) in items {
        push_field(&mut token, key);
        push_field(&mut token, value);
    }

    if token.len() > MAX_TOKEN_LEN {
        return Err(CodecError::SizeExceeded {
            len: token.len(),
            max: MAX_TOKEN_LEN,
        });
    }

    Ok(token)
}

/// Decode a token produced by [`encode`].
///
/// Never panics; any input that does not follow the layout is a
/// [`CodecError::MalformedToken`]. A repeated key keeps its last value.
pub fn decode(token: &str) -> Result<BTreeMap<String, String>, CodecError> {
    let mut items = BTreeMap::new();
    let mut rest = token;

    while !rest.is_empty() {
        let (key, tail) = read_field(rest, "key")?;
        let (value, tail) = read_field(tail, "value")?;
        items.insert(key.to_string(), value.to_string());
        rest = tail;
    }

    Ok(items)
}

fn push_field(token: &mut String, field: &str) {
    token.push_str(&field.len().to_string());
    token.push(':');
    token.push_str(field);
}

/// Split one length-prefixed field off the front of `input`
fn read_field<'a>(input: &'a str, what: &str) -> Result<(&'a str, &'a str), CodecError> {
    let colon = input
        .find(':')
        .ok_or_else(|| malformed(format!("missing colon after {what} length")))?;

    let digits = &input[..colon];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(format!("invalid {what} length {digits:?}")));
    }
    let len: usize = digits
        .parse()
        .map_err(|_| malformed(format!("invalid {what} length {digits:?}")))?;

    // ':' is a single byte, so colon + 1 is always a char boundary
    let body = &input[colon + 1..];
    if len > body.len() {
        return Err(malformed(format!("{what} length {len} exceeds remaining input")));
    }
    if !body.is_char_boundary(len) {
        return Err(malformed(format!("{what} length {len} splits a character")));
    }

    Ok(body.split_at(len))
}

fn malformed(reason: String) -> CodecError {
    CodecError::MalformedToken(reason)
}

//! Unicode escaping for generated source text
//!
//! Generated sources must survive any locale the compiler runs under, so
//! everything outside 7-bit ASCII is written as `\uXXXX` escapes. The
//! platform's `char` is a UTF-16 code unit, which means characters outside
//! the basic plane become a surrogate pair of escapes.

use std::fmt::Write;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EscapeError {
    #[error("Truncated unicode escape at offset {0}")]
    Truncated(usize),

    #[error("Invalid hex digit in unicode escape at offset {0}")]
    InvalidHex(usize),

    #[error("Unpaired surrogate in decoded text")]
    UnpairedSurrogate,
}

/// Escape every UTF-16 code unit at or above 128 as `\uXXXX`
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for unit in text.encode_utf16() {
        if unit < 128 {
            out.push(char::from(unit as u8));
        } else {
            let _ = write!(out, "\\u{:04x}", unit);
        }
    }
    out
}

/// Decode `\uXXXX` escapes the way the platform's lexer does.
///
/// A backslash only starts an escape when it is preceded by an even number
/// of backslashes; any number of `u` markers is accepted.
pub fn decode(text: &str) -> Result<String, EscapeError> {
    let chars: Vec<char> = text.chars().collect();
    let mut units: Vec<u16> = Vec::with_capacity(chars.len());
    let mut backslashes = 0usize;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let starts_escape = ch == '\\'
            && backslashes % 2 == 0
            && chars.get(i + 1) == Some(&'u');

        if !starts_escape {
            backslashes = if ch == '\\' { backslashes + 1 } else { 0 };
            let mut buf = [0u16; 2];
            units.extend_from_slice(ch.encode_utf16(&mut buf));
            i += 1;
            continue;
        }

        let start = i;
        i += 1;
        while chars.get(i) == Some(&'u') {
            i += 1;
        }
        if i + 4 > chars.len() {
            return Err(EscapeError::Truncated(start));
        }
        let mut unit: u16 = 0;
        for &digit in &chars[i..i + 4] {
            let value = digit.to_digit(16).ok_or(EscapeError::InvalidHex(start))?;
            unit = unit * 16 + value as u16;
        }
        units.push(unit);
        backslashes = 0;
        i += 4;
    }

    String::from_utf16(&units).map_err(|_| EscapeError::UnpairedSurrogate)
}

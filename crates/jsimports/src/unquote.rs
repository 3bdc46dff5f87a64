//! Decoding of raw quoted string literals.
//!
//! The scanner captures literals verbatim, delimiters included. This
//! module turns such a capture into the string value a module-resolution
//! step would use, applying JavaScript escape conventions: `\n`, `\t`,
//! `\xHH`, `\uHHHH`, `\u{…}` and friends decode, any other escaped
//! character stands for itself, and the quote character that is not the
//! delimiter may appear unescaped in the body.

use std::str::Chars;

use thiserror::Error;

/// Failure to decode a quoted string literal.
///
/// Each variant carries the offending raw text so callers can point a
/// diagnostic at the exact literal in the source.
#[derive(Debug, Error)]
pub enum UnquoteError {
    #[error("unterminated string literal {raw}")]
    Unterminated { raw: String },

    #[error("invalid escape sequence in string literal {raw}")]
    InvalidEscape { raw: String },

    #[error("content after closing quote in string literal {raw}")]
    TrailingContent { raw: String },
}

enum EscapeFault {
    /// Input ended in the middle of an escape sequence.
    End,
    /// The escape payload is malformed (bad hex digit, invalid code point).
    Invalid,
}

/// Decode a raw quoted literal, delimiters included, into its value.
///
/// The first character selects the delimiter (`'` or `"`); the matching
/// unescaped delimiter must be the final character.
pub fn unquote(raw: &str) -> Result<String, UnquoteError> {
    let mut chars = raw.chars();
    let delimiter = match chars.next() {
        Some(c @ ('\'' | '"')) => c,
        _ => return Err(UnquoteError::Unterminated { raw: raw.to_string() }),
    };

    let mut value = String::with_capacity(raw.len());
    loop {
        match chars.next() {
            None => return Err(UnquoteError::Unterminated { raw: raw.to_string() }),
            Some(c) if c == delimiter => {
                if chars.next().is_some() {
                    return Err(UnquoteError::TrailingContent { raw: raw.to_string() });
                }
                return Ok(value);
            }
            Some('\\') => match decode_escape(&mut chars) {
                Ok(c) => value.push(c),
                Err(EscapeFault::End) => {
                    return Err(UnquoteError::Unterminated { raw: raw.to_string() })
                }
                Err(EscapeFault::Invalid) => {
                    return Err(UnquoteError::InvalidEscape { raw: raw.to_string() })
                }
            },
            Some(c) => value.push(c),
        }
    }
}

fn decode_escape(chars: &mut Chars<'_>) -> Result<char, EscapeFault> {
    let c = chars.next().ok_or(EscapeFault::End)?;
    Ok(match c {
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'b' => '\u{0008}',
        'f' => '\u{000C}',
        'v' => '\u{000B}',
        '0' => '\0',
        'x' => hex_escape(chars, 2)?,
        'u' => unicode_escape(chars)?,
        // JavaScript treats any other escaped character as itself,
        // including quotes and backslash.
        other => other,
    })
}

/// Decode exactly `len` hex digits into a character.
fn hex_escape(chars: &mut Chars<'_>, len: u32) -> Result<char, EscapeFault> {
    let mut value = 0u32;
    for _ in 0..len {
        let digit = chars
            .next()
            .ok_or(EscapeFault::End)?
            .to_digit(16)
            .ok_or(EscapeFault::Invalid)?;
        value = value * 16 + digit;
    }
    char::from_u32(value).ok_or(EscapeFault::Invalid)
}

/// Decode `\uHHHH` or the brace form `\u{H…}`.
fn unicode_escape(chars: &mut Chars<'_>) -> Result<char, EscapeFault> {
    let mut probe = chars.clone();
    if probe.next() != Some('{') {
        return hex_escape(chars, 4);
    }
    *chars = probe;

    let mut value = 0u32;
    let mut digits = 0;
    loop {
        let c = chars.next().ok_or(EscapeFault::End)?;
        if c == '}' {
            break;
        }
        let digit = c.to_digit(16).ok_or(EscapeFault::Invalid)?;
        value = value
            .checked_mul(16)
            .and_then(|v| v.checked_add(digit))
            .ok_or(EscapeFault::Invalid)?;
        digits += 1;
    }
    if digits == 0 {
        return Err(EscapeFault::Invalid);
    }
    char::from_u32(value).ok_or(EscapeFault::Invalid)
}

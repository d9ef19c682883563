//! Byte classes of the build language.
//!
//! Words (keywords) and numeric literals only end at a *boundary*: end of
//! input, whitespace, or one of the punctuator bytes. Anything else glued
//! to them turns a keyword into an identifier and a number into a
//! malformed literal.

/// Whitespace as understood by C `isspace`: space and `\t \n \v \f \r`.
#[inline]
pub const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t'..=b'\r')
}

/// Skippable bytes between tokens. A backslash is a line continuation
/// marker and is discarded like whitespace.
#[inline]
pub const fn is_blank(byte: u8) -> bool {
    is_space(byte) || byte == b'\\'
}

/// Bytes that may start or continue an operator or delimiter.
#[inline]
pub const fn is_punct(byte: u8) -> bool {
    matches!(
        byte,
        b'(' | b')'
            | b'{'
            | b'}'
            | b'['
            | b']'
            | b'.'
            | b','
            | b':'
            | b'?'
            | b'+'
            | b'-'
            | b'*'
            | b'/'
            | b'%'
            | b'='
            | b'<'
            | b'>'
            | b'!'
    )
}

/// First byte of an identifier.
#[inline]
pub const fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Continuation byte of an identifier.
#[inline]
pub const fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Digit of a numeric literal in the given radix (2, 8, 10 or 16).
#[inline]
pub const fn is_radix_digit(byte: u8, radix: u32) -> bool {
    match radix {
        2 => matches!(byte, b'0' | b'1'),
        8 => matches!(byte, b'0'..=b'7'),
        16 => byte.is_ascii_hexdigit(),
        _ => byte.is_ascii_digit(),
    }
}

/// Whether a word or number may end before `next`.
///
/// `None` means end of input.
#[inline]
pub const fn is_boundary(next: Option<u8>) -> bool {
    match next {
        None => true,
        Some(byte) => is_space(byte) || is_punct(byte),
    }
}

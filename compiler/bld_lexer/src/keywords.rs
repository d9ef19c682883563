//! Reserved-word resolution for the cooking layer.
//!
//! The lookup uses the identifier's length as a first-pass filter
//! (keywords range from 2 to 10 bytes), then matches against the keywords
//! of that length.
//!
//! A word that spells a keyword is only *treated* as one when the byte after
//! it is a boundary (see [`bld_lexer_core::class::is_boundary`]); the cooker
//! applies that rule, this module only answers "is this text a keyword".

use bld_ir::TokenKind;

/// Look up a reserved word by its exact text.
///
/// Returns `None` for ordinary identifiers. Case-sensitive: `If` and `TRUE`
/// are identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    // Guard: all keywords are 2-10 lowercase ASCII bytes
    if !(2..=10).contains(&text.len()) {
        return None;
    }
    if !text.as_bytes()[0].is_ascii_lowercase() {
        return None;
    }

    match text.len() {
        2 => match text {
            "if" => Some(TokenKind::If),
            "in" => Some(TokenKind::In),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "not" => Some(TokenKind::Not),
            _ => None,
        },
        4 => match text {
            "elif" => Some(TokenKind::Elif),
            "else" => Some(TokenKind::Else),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "break" => Some(TokenKind::Break),
            "endif" => Some(TokenKind::EndIf),
            "false" => Some(TokenKind::False),
            _ => None,
        },
        7 => match text {
            "foreach" => Some(TokenKind::Foreach),
            _ => None,
        },
        8 => match text {
            "continue" => Some(TokenKind::Continue),
            _ => None,
        },
        10 => match text {
            "endforeach" => Some(TokenKind::EndForeach),
            _ => None,
        },
        _ => None,
    }
}

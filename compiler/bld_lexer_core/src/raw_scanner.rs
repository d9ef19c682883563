//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner works on a sentinel-terminated [`Cursor`] and never
//! allocates. It does not resolve keywords or compute literal values; the
//! cooking layer in `bld_lexer` does that. It does decide token extents:
//! maximal-munch identifiers, radix and boundary checks for numbers,
//! single- and triple-quoted strings, and `=`-suffixed operators.
//!
//! # Design
//!
//! The main dispatch covers all 256 byte values. Each arm calls a focused
//! method that advances the cursor and returns `RawToken { tag, len }`.
//! Malformed input is encoded as an error `RawTag`, never as `Err`.

use crate::class::{is_blank, is_boundary, is_ident_continue, is_ident_start, is_radix_digit};
use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Allocation-free scanner. Trivia (whitespace, continuations, comments)
/// is returned as tokens so lengths always add up to the source length.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Byte offset of the next token.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` once the source is exhausted,
    /// and keeps returning it on later calls.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t'..=b'\r' | b'\\' => self.whitespace(start),
            b'#' => self.line_comment(start),
            byte if is_ident_start(byte) => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'\'' => self.string(start),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b'.' => self.single(start, RawTag::Dot),
            b',' => self.single(start, RawTag::Comma),
            b':' => self.single(start, RawTag::Colon),
            b'?' => self.single(start, RawTag::Question),
            b'+' => self.with_equal(start, RawTag::Plus, RawTag::PlusEqual),
            b'-' => self.with_equal(start, RawTag::Minus, RawTag::MinusEqual),
            b'*' => self.with_equal(start, RawTag::Star, RawTag::StarEqual),
            b'/' => self.with_equal(start, RawTag::Slash, RawTag::SlashEqual),
            b'%' => self.with_equal(start, RawTag::Percent, RawTag::PercentEqual),
            b'<' => self.with_equal(start, RawTag::Less, RawTag::LessEqual),
            b'>' => self.with_equal(start, RawTag::Greater, RawTag::GreaterEqual),
            b'=' => self.with_equal(start, RawTag::Equal, RawTag::EqualEqual),
            b'!' => self.with_equal(start, RawTag::LoneBang, RawTag::BangEqual),
            // Everything else: control bytes, DEL, `"`, `;`, `@`, non-ASCII, ...
            _ => self.invalid_byte(start),
        }
    }

    #[inline]
    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── EOF ─────────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior NUL.
            self.invalid_byte(start)
        }
    }

    // ─── Trivia ──────────────────────────────────────────────────────

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(is_blank);
        self.token(start, RawTag::Whitespace)
    }

    fn line_comment(&mut self, start: u32) -> RawToken {
        self.cursor.eat_until_newline_or_eof();
        self.token(start, RawTag::LineComment)
    }

    // ─── Identifiers ─────────────────────────────────────────────────

    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(is_ident_continue);
        self.token(start, RawTag::Ident)
    }

    // ─── Numbers ─────────────────────────────────────────────────────

    fn number(&mut self, start: u32) -> RawToken {
        if self.cursor.current() == b'0' {
            let radix = match self.cursor.peek() {
                b'b' => Some((RawTag::BinInt, 2)),
                b'o' => Some((RawTag::OctInt, 8)),
                b'x' => Some((RawTag::HexInt, 16)),
                _ => None,
            };
            if let Some((tag, radix)) = radix {
                self.cursor.advance_n(2); // consume `0` and the radix marker
                if !is_radix_digit(self.cursor.current(), radix) {
                    return self.malformed_number(start);
                }
                self.cursor.eat_while(|b| is_radix_digit(b, radix));
                return self.finish_number(start, tag);
            }
        }

        self.cursor.eat_while(|b| is_radix_digit(b, 10));
        self.finish_number(start, RawTag::DecInt)
    }

    fn finish_number(&mut self, start: u32, tag: RawTag) -> RawToken {
        if is_boundary(self.cursor.current_opt()) {
            self.token(start, tag)
        } else {
            self.malformed_number(start)
        }
    }

    /// The error token swallows the rest of the word so `0x1g` is one token.
    fn malformed_number(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(is_ident_continue);
        self.token(start, RawTag::MalformedNumber)
    }

    // ─── Strings ─────────────────────────────────────────────────────

    fn string(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'\'' && self.cursor.peek2() == b'\'' {
            self.cursor.advance_n(3); // consume opening `'''`
            return if self.cursor.eat_past(b"'''") {
                self.token(start, RawTag::TripleString)
            } else {
                self.token(start, RawTag::UnterminatedTripleString)
            };
        }

        self.cursor.advance(); // consume opening `'`
        if self.cursor.eat_past_byte(b'\'') {
            self.token(start, RawTag::String)
        } else {
            self.token(start, RawTag::UnterminatedString)
        }
    }

    // ─── Operators & delimiters ──────────────────────────────────────

    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    /// `op` or, when directly followed by `=`, `op_equal`.
    fn with_equal(&mut self, start: u32, op: RawTag, op_equal: RawTag) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.token(start, op_equal)
        } else {
            self.token(start, op)
        }
    }

    // ─── Errors ──────────────────────────────────────────────────────

    /// Consumes a whole UTF-8 character so token boundaries stay on
    /// character boundaries.
    fn invalid_byte(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.token(start, RawTag::InvalidByte)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

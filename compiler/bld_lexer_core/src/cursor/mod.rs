//! Byte cursor over a sentinel-terminated buffer.
//!
//! EOF is the sentinel (`0x00`) at or past the source length. A zero byte
//! before the source length is an interior NUL, which the scanner reports
//! as an invalid byte rather than end of input.

/// Byte cursor over a [`SourceBuffer`](crate::SourceBuffer).
///
/// The cursor is [`Copy`]; saving one is a cheap snapshot.
///
/// # Invariant
///
/// `buf[source_len..]` is all zeros and at least three bytes long.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) + 2 < buf.len(),
            "sentinel and peek padding must be within buffer bounds"
        );
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte at the current position; `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Byte one position ahead. Only valid while not at EOF.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Byte two positions ahead. Only valid while not at EOF.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// `true` once the cursor sits on the sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// The current byte, or `None` at EOF.
    #[inline]
    pub fn current_opt(&self) -> Option<u8> {
        if self.is_eof() {
            None
        } else {
            Some(self.current())
        }
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// `pred(0)` must be `false` so the sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Width in bytes of the UTF-8 character whose leading byte is `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character, never beyond the source end.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source_len.max(self.pos + 1));
    }

    /// Remaining source content, sentinel excluded.
    #[inline]
    fn rest(&self) -> &'a [u8] {
        let end = self.source_len as usize;
        let start = (self.pos as usize).min(end);
        &self.buf[start..end]
    }

    /// Move to the next `\n` (left unconsumed) or to EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset is bounded by source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.rest()) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
    }

    /// Move just past the next occurrence of `byte`.
    ///
    /// Returns `false` and stops at EOF if there is none.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset is bounded by source_len which fits in u32"
    )]
    pub fn eat_past_byte(&mut self, byte: u8) -> bool {
        match memchr::memchr(byte, self.rest()) {
            Some(offset) => {
                self.pos += offset as u32 + 1;
                true
            }
            None => {
                self.pos = self.source_len;
                false
            }
        }
    }

    /// Move just past the next occurrence of `needle`.
    ///
    /// Returns `false` and stops at EOF if there is none.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset and needle length are bounded by source_len which fits in u32"
    )]
    pub fn eat_past(&mut self, needle: &[u8]) -> bool {
        match memchr::memmem::find(self.rest(), needle) {
            Some(offset) => {
                self.pos += (offset + needle.len()) as u32;
                true
            }
            None => {
                self.pos = self.source_len;
                false
            }
        }
    }
}

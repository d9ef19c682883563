//! Sentinel-terminated source buffer.
//!
//! The buffer holds the source bytes followed by at least three `0x00`
//! bytes, rounded up to a 64-byte boundary. The first zero is the EOF
//! sentinel; the rest let [`Cursor::peek`](crate::Cursor::peek) and
//! [`Cursor::peek2`](crate::Cursor::peek2) read past the end without a
//! bounds check in the scanner.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Minimum number of zero bytes after the source (sentinel + two peeks).
const TAIL_ZEROS: usize = 3;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, 0x00, 0x00, padding_zeros...]
///  ^                ^                 ^
///  0                source_len        rounded up to 64 bytes
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source_bytes..., sentinel, padding...]`.
    buf: Vec<u8>,
    /// Length of the source content, excluding sentinel and padding.
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// Sources longer than `u32::MAX` bytes are truncated to that length;
    /// build descriptions are nowhere near that size.
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let source_len = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
        let content = &bytes[..source_len as usize];

        let padded_len = (content.len() + TAIL_ZEROS + CACHE_LINE - 1) & !(CACHE_LINE - 1);
        let mut buf = vec![0u8; padded_len];
        buf[..content.len()].copy_from_slice(content);

        Self { buf, source_len }
    }

    /// A [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// A [`Cursor`] positioned at byte `pos`, clamped to the end of input.
    ///
    /// Lets a pull-based lexer resume scanning without holding a cursor
    /// that borrows the buffer.
    pub fn cursor_at(&self, pos: u32) -> Cursor<'_> {
        let mut cursor = self.cursor();
        cursor.advance_n(pos.min(self.source_len));
        cursor
    }
}

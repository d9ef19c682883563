//! Low-level scanner for the bld build language.
//!
//! This crate splits source text into `(RawTag, len)` pairs without
//! allocating and without knowing anything about keywords or the parser.
//! Keyword resolution, lexeme extraction and error reporting happen one
//! layer up in `bld_lexer`.
//!
//! - [`SourceBuffer`]: source bytes followed by a zero sentinel
//! - [`Cursor`]: byte cursor over a `SourceBuffer`
//! - [`RawScanner`]: produces [`RawToken`]s, trivia included
//! - [`class`]: byte classes shared with the cooking layer

pub mod class;
mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};

//! Grammar productions.
//!
//! Each module extends `Parser` with methods for one part of the language:
//!
//! - [`expr`]: expressions, from assignment down to literals
//! - [`stmt`]: statement sequences, `if`, `foreach`, `break`, `continue`
//!
//! # Design
//!
//! Plain recursive descent with one token of lookahead. A production that
//! finds nothing it recognizes returns `Ok(None)` without consuming input;
//! its immediate caller either accepts that or reports what it expected.
//! Errors from deeper productions are never reworded on the way up.

mod expr;
mod stmt;

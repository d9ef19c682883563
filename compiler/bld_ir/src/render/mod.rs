//! Textual renderings of a tree: an s-expression dump for diagnostics and
//! tests, and build-language source.

mod sexpr;
mod source;

pub use sexpr::SexprDisplay;
pub(crate) use source::render as render_source;

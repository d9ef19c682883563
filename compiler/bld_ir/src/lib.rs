//! bld IR - shared data types for the bld front end
//!
//! This crate contains the core data structures for the build language:
//! - Spans for source locations
//! - Token kinds produced by the lexer
//! - Syntax tree nodes and their operator payloads
//! - Arena allocation for nodes, child lists and text
//! - Renderers: s-expression dump and source text
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: no `Box<Node>`, children are `NodeId(u32)` indices
//! - **Own by Construction**: a tree and everything in it lives in one
//!   [`NodeArena`]; dropping the arena frees the tree
//! - **Fail, Don't Abort**: every allocation returns `Result`

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod node_id;
mod render;
mod span;
mod token;
mod tree;

pub use arena::{ArenaFull, NodeArena};
pub use ast::{ArithOp, AssignOp, JumpKind, LogicalOp, Node, NodeKind, RelOp, UnaryOp};
pub use node_id::{NodeId, NodeRange, TextId};
pub use render::SexprDisplay;
pub use span::Span;
pub use token::TokenKind;
pub use tree::Ast;

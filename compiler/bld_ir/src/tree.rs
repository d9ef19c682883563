//! A finished syntax tree.

use std::fmt;

use crate::ast::Node;
use crate::render::{render_source, SexprDisplay};
use crate::{NodeArena, NodeId, TextId};

/// A parsed program: the arena holding every node plus the root.
///
/// The root is a [`Node::Sequence`], or [`Node::Empty`] when the source
/// holds no statements.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Ast {
    arena: NodeArena,
    root: NodeId,
}

impl Ast {
    pub fn new(arena: NodeArena, root: NodeId) -> Self {
        Ast { arena, root }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn root_node(&self) -> &Node {
        self.arena.get(self.root)
    }

    #[inline]
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    #[inline]
    #[track_caller]
    pub fn node(&self, id: NodeId) -> &Node {
        self.arena.get(id)
    }

    #[inline]
    #[track_caller]
    pub fn text(&self, id: TextId) -> &str {
        self.arena.text(id)
    }

    /// Lazy s-expression rendering of the whole tree.
    pub fn sexpr(&self) -> SexprDisplay<'_> {
        SexprDisplay::new(&self.arena, self.root)
    }

    pub fn to_sexpr(&self) -> String {
        self.sexpr().to_string()
    }

    /// Render back to source. Parsing the result yields an identical tree.
    ///
    /// Returns `None` if the tree has no spelling, e.g. a string holding
    /// `'''` or a statement that would merge with the expression before it.
    pub fn to_source(&self) -> Option<String> {
        render_source(&self.arena, self.root)
    }

    /// Number of distinct nodes reachable from the root.
    ///
    /// Equal to `arena().len()` for every tree the parser returns.
    pub fn reachable_count(&self) -> usize {
        let mut seen = vec![false; self.arena.len()];
        let mut stack = vec![self.root];
        let mut count = 0;
        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut seen[id.index()], true) {
                continue;
            }
            count += 1;
            stack.extend(self.arena.children(id));
        }
        count
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.sexpr(), f)
    }
}

#[cfg(test)]
mod tests;

//! Arena allocation for the flat syntax tree.
//!
//! - Contiguous storage for all nodes of one parse
//! - Child lists share a single flat `Vec<NodeId>`
//! - Bulk deallocation: dropping the arena frees every node at once
//!
//! Every allocation is fallible. The arena refuses to grow past its
//! configured node limit and reports allocator failure instead of
//! aborting, so a parse can surface "out of memory" as an ordinary error.

use std::fmt;

use crate::ast::Node;
use crate::{NodeId, NodeRange, TextId};

/// The arena cannot take another allocation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("node arena is full")]
pub struct ArenaFull;

/// Contiguous storage for all nodes of a tree.
///
/// # Design
/// - All nodes stored in one `Vec`, addressed by [`NodeId`]
/// - Ordered child collections are [`NodeRange`]s into `lists`
/// - Identifier names and string payloads are owned by `texts`
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct NodeArena {
    /// All nodes (indexed by `NodeId`).
    nodes: Vec<Node>,

    /// Flattened child lists (sequence statements, array elements, ...).
    lists: Vec<NodeId>,

    /// Owned text payloads (indexed by `TextId`).
    texts: Vec<Box<str>>,

    /// Upper bound on `nodes.len()`, if any.
    max_nodes: Option<usize>,
}

impl NodeArena {
    /// Create a new empty, unlimited arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with estimated capacity based on source size.
    /// Heuristic: ~1 node per 4 bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated_nodes = source_len / 4;
        NodeArena {
            nodes: Vec::with_capacity(estimated_nodes),
            lists: Vec::with_capacity(estimated_nodes / 2),
            texts: Vec::with_capacity(estimated_nodes / 4),
            max_nodes: None,
        }
    }

    /// Cap the number of nodes this arena will hold. `None` means no cap.
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: Option<usize>) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    // ===== Nodes =====

    /// Allocate a node, return its ID.
    ///
    /// # Errors
    /// [`ArenaFull`] when the node limit is reached or storage cannot grow.
    pub fn alloc(&mut self, node: Node) -> Result<NodeId, ArenaFull> {
        if self.max_nodes.is_some_and(|max| self.nodes.len() >= max) {
            return Err(ArenaFull);
        }
        let index = u32::try_from(self.nodes.len()).map_err(|_| ArenaFull)?;
        self.nodes.try_reserve(1).map_err(|_| ArenaFull)?;
        self.nodes.push(node);
        Ok(NodeId::new(index))
    }

    /// Get node by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Number of allocated nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ===== Child lists =====

    /// Store an ordered child list, return its range.
    ///
    /// # Errors
    /// [`ArenaFull`] when list storage cannot grow; nothing is kept in that case.
    pub fn alloc_list(
        &mut self,
        ids: impl IntoIterator<Item = NodeId>,
    ) -> Result<NodeRange, ArenaFull> {
        let start_index = self.lists.len();
        let start = u32::try_from(start_index).map_err(|_| ArenaFull)?;
        for id in ids {
            if self.lists.try_reserve(1).is_err() {
                self.lists.truncate(start_index);
                return Err(ArenaFull);
            }
            self.lists.push(id);
        }
        let Ok(len) = u32::try_from(self.lists.len() - start_index) else {
            self.lists.truncate(start_index);
            return Err(ArenaFull);
        };
        Ok(NodeRange::new(start, len))
    }

    /// Get child list by range.
    ///
    /// # Panics
    /// Panics if `range` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn list(&self, range: NodeRange) -> &[NodeId] {
        let start = range.start as usize;
        &self.lists[start..start + range.len()]
    }

    // ===== Text =====

    /// Copy `text` into the arena, return its ID.
    ///
    /// # Errors
    /// [`ArenaFull`] when the copy cannot be allocated.
    pub fn alloc_text(&mut self, text: &str) -> Result<TextId, ArenaFull> {
        let index = u32::try_from(self.texts.len()).map_err(|_| ArenaFull)?;
        let mut owned = String::new();
        owned.try_reserve_exact(text.len()).map_err(|_| ArenaFull)?;
        owned.push_str(text);
        self.texts.try_reserve(1).map_err(|_| ArenaFull)?;
        self.texts.push(owned.into_boxed_str());
        Ok(TextId::new(index))
    }

    /// Get text by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn text(&self, id: TextId) -> &str {
        &self.texts[id.index()]
    }

    // ===== Traversal =====

    /// Direct children of `id`, in source order.
    ///
    /// Range-backed children (statements, clauses, list elements, call
    /// arguments) come from list storage; the rest are single fields.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        match *self.get(id) {
            Node::Empty
            | Node::Jump(_)
            | Node::Ident(_)
            | Node::Bool(_)
            | Node::Number(_)
            | Node::Str(_) => Vec::new(),
            Node::Sequence(range) | Node::Array(range) | Node::Dictionary(range) => {
                self.list(range).to_vec()
            }
            Node::If { clauses, else_body } => {
                let mut out = self.list(clauses).to_vec();
                out.extend(else_body);
                out
            }
            Node::Foreach {
                vars,
                iterable,
                body,
            } => {
                let mut out = self.list(vars).to_vec();
                out.extend([iterable, body]);
                out
            }
            Node::Application {
                callee,
                args,
                kwargs,
            } => {
                let mut out = vec![callee];
                out.extend_from_slice(self.list(args));
                out.extend_from_slice(self.list(kwargs));
                out
            }
            Node::Unary { operand, .. } => vec![operand],
            Node::Ternary {
                condition,
                then_branch,
                else_branch,
            } => vec![condition, then_branch, else_branch],
            Node::Assignment {
                target: a,
                value: b,
                ..
            }
            | Node::IfClause {
                predicate: a,
                body: b,
            }
            | Node::Logical { lhs: a, rhs: b, .. }
            | Node::Arithmetic { lhs: a, rhs: b, .. }
            | Node::Relational { lhs: a, rhs: b, .. }
            | Node::Member {
                object: a,
                field: b,
            }
            | Node::Index {
                target: a,
                index: b,
            }
            | Node::KeywordArg { name: a, value: b }
            | Node::KeyValue { key: a, value: b } => vec![a, b],
        }
    }
}

impl fmt::Debug for NodeArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeArena")
            .field("nodes", &self.nodes.len())
            .field("lists", &self.lists.len())
            .field("texts", &self.texts.len())
            .field("max_nodes", &self.max_nodes)
            .finish()
    }
}

//! Compact handles into a [`NodeArena`](crate::NodeArena).

use std::fmt;

/// Index of a node in its arena.
///
/// # Layout
/// Four bytes, `Copy`, hashable; children are stored as `NodeId`s instead
/// of boxes so the whole tree lives in one contiguous `Vec`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Window into the arena's flat child-list storage.
///
/// Used for every ordered child collection: sequence statements, array
/// elements, dictionary entries, call arguments, `if` clauses and
/// `foreach` variables.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(C)]
pub struct NodeRange {
    pub start: u32,
    pub len: u32,
}

impl NodeRange {
    pub const EMPTY: Self = Self { start: 0, len: 0 };

    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        Self { start, len }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

impl fmt::Debug for NodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeRange({}..{})", self.start, self.start + self.len)
    }
}

/// Index of an owned string (identifier name or string literal) in the
/// arena's text table.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct TextId(u32);

impl TextId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        TextId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextId({})", self.0)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{NodeId, NodeRange, TextId};
    crate::static_assert_size!(NodeId, 4);
    crate::static_assert_size!(TextId, 4);
    crate::static_assert_size!(NodeRange, 8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_roundtrip() {
        let id = NodeId::new(42);
        assert_eq!(id.index(), 42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{id:?}"), "NodeId(42)");
    }

    #[test]
    fn test_range_empty() {
        assert!(NodeRange::EMPTY.is_empty());
        assert_eq!(NodeRange::default(), NodeRange::EMPTY);
        let range = NodeRange::new(3, 2);
        assert_eq!(range.len(), 2);
        assert_eq!(format!("{range:?}"), "NodeRange(3..5)");
    }
}

//! Per-parse configuration.

/// Settings for one call to [`parse_with_options`](crate::parse_with_options).
///
/// The default places no limit on the tree size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    /// Most nodes the tree may hold. A parse that needs more fails with
    /// [`ParseError::OutOfMemory`](crate::ParseError::OutOfMemory).
    pub max_nodes: Option<usize>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }
}

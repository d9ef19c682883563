//! Recursive descent parser for the bld build language.
//!
//! Pulls tokens from `bld_lexer` one at a time and builds an [`Ast`] whose
//! nodes live in a per-parse [`NodeArena`].
//!
//! Every production returns a three-way outcome:
//! - `Ok(Some(id))`: a node was built
//! - `Ok(None)`: nothing here; the caller decides whether that is fine or
//!   turns it into its own "expected ..." error
//! - `Err(_)`: a syntax error or allocation failure, passed up unchanged
//!
//! On failure the arena is dropped with the parser, so no partial tree
//! survives.

mod cursor;
mod error;
mod grammar;
mod options;

pub use bld_ir::Ast;
pub use error::ParseError;
pub use options::ParseOptions;

use bld_ir::{Node, NodeArena, NodeId, TokenKind};
use tracing::debug;

use cursor::Cursor;

/// Outcome of one production: a node, nothing, or an error.
pub(crate) type ParseResult<T = Option<NodeId>> = Result<T, ParseError>;

/// Parser state for a single source text.
pub(crate) struct Parser<'src> {
    cursor: Cursor<'src>,
    arena: NodeArena,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str, options: &ParseOptions) -> Self {
        Parser {
            cursor: Cursor::new(source),
            arena: NodeArena::with_capacity(source.len()).with_max_nodes(options.max_nodes),
        }
    }

    #[inline]
    fn alloc(&mut self, node: Node) -> ParseResult<NodeId> {
        Ok(self.arena.alloc(node)?)
    }

    /// Materialize "nothing here" as an [`Node::Empty`] node.
    #[inline]
    fn or_empty(&mut self, id: Option<NodeId>) -> ParseResult<NodeId> {
        match id {
            Some(id) => Ok(id),
            None => self.alloc(Node::Empty),
        }
    }

    fn is_ident(&self, id: NodeId) -> bool {
        self.arena.get(id).is_ident()
    }

    /// Parse the whole source: a statement sequence, then end of input.
    fn parse_program(mut self) -> ParseResult<Ast> {
        let root = self.parse_sequence()?;
        // A sequence stops at the first token no statement can start with
        // (`)`, `endif`, a lexer error). Without this check the rest of the
        // source would be dropped silently.
        if !self.cursor.check(TokenKind::End) {
            return Err(ParseError::expected("program", "end of input"));
        }
        Ok(Ast::new(self.arena, root))
    }
}

/// Parse `source` with default options.
pub fn parse(source: &str) -> Result<Ast, ParseError> {
    parse_with_options(source, &ParseOptions::default())
}

/// Parse `source`, building at most `options.max_nodes` nodes.
pub fn parse_with_options(source: &str, options: &ParseOptions) -> Result<Ast, ParseError> {
    debug!(len = source.len(), max_nodes = ?options.max_nodes, "parse");
    let result = Parser::new(source, options).parse_program();
    match &result {
        Ok(ast) => debug!(nodes = ast.arena().len(), "parse succeeded"),
        Err(err) => debug!(error = %err, "parse failed"),
    }
    result
}

#[cfg(test)]
mod tests;

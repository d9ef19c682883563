//! Parse error type.
//!
//! A failed parse reports exactly one diagnostic: the first problem the
//! grammar ran into. Syntax errors carry their finished message text;
//! running out of node storage carries none and is told apart so callers
//! can react to it separately.

use bld_ir::ArenaFull;

#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseError {
    /// A grammar rule rejected the input.
    #[error("{0}")]
    Syntax(String),
    /// The node arena refused an allocation.
    #[error("not enough memory")]
    OutOfMemory,
}

impl ParseError {
    #[cold]
    pub(crate) fn syntax(message: &str) -> Self {
        ParseError::Syntax(message.to_owned())
    }

    /// `"<production>: expected <what>"`.
    #[cold]
    pub(crate) fn expected(production: &str, what: &str) -> Self {
        ParseError::Syntax(format!("{production}: expected {what}"))
    }

    /// The diagnostic text, as displayed.
    pub fn message(&self) -> &str {
        match self {
            ParseError::Syntax(message) => message,
            ParseError::OutOfMemory => "not enough memory",
        }
    }

    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, ParseError::OutOfMemory)
    }
}

impl From<ArenaFull> for ParseError {
    fn from(_: ArenaFull) -> Self {
        ParseError::OutOfMemory
    }
}

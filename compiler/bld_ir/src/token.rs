//! Token kinds of the build language.

use std::fmt;

/// Kind of a lexed token.
///
/// The set is closed: every byte sequence the lexer accepts maps to exactly
/// one of these, and everything it rejects becomes [`TokenKind::Error`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// End of input.
    End,
    /// Malformed literal, unterminated string or stray character.
    Error,

    // Reserved words
    And,
    Break,
    Continue,
    Elif,
    Else,
    EndForeach,
    EndIf,
    False,
    Foreach,
    If,
    In,
    Not,
    Or,
    True,

    Ident,

    // Numbers
    BinNumber,
    DecNumber,
    OctNumber,
    HexNumber,

    // Strings
    String,
    TripleString,

    // Brackets
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Punctuators
    Assign,
    Dot,
    Colon,
    Comma,
    Question,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Compound assignment
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,

    // Relational & equality
    Lt,
    LtEq,
    Gt,
    GtEq,
    EqEq,
    NotEq,

    /// `++`, reserved. The lexer never produces it.
    Increment,
    /// `--`, reserved. The lexer never produces it.
    Decrement,
}

impl TokenKind {
    /// Human-readable name for diagnostics and debug output.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::End => "end of input",
            Self::Error => "invalid token",
            Self::And => "`and`",
            Self::Break => "`break`",
            Self::Continue => "`continue`",
            Self::Elif => "`elif`",
            Self::Else => "`else`",
            Self::EndForeach => "`endforeach`",
            Self::EndIf => "`endif`",
            Self::False => "`false`",
            Self::Foreach => "`foreach`",
            Self::If => "`if`",
            Self::In => "`in`",
            Self::Not => "`not`",
            Self::Or => "`or`",
            Self::True => "`true`",
            Self::Ident => "identifier",
            Self::BinNumber => "binary number",
            Self::DecNumber => "decimal number",
            Self::OctNumber => "octal number",
            Self::HexNumber => "hexadecimal number",
            Self::String => "string",
            Self::TripleString => "triple-quoted string",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::LBrace => "`{`",
            Self::RBrace => "`}`",
            Self::LBracket => "`[`",
            Self::RBracket => "`]`",
            Self::Assign => "`=`",
            Self::Dot => "`.`",
            Self::Colon => "`:`",
            Self::Comma => "`,`",
            Self::Question => "`?`",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Star => "`*`",
            Self::Slash => "`/`",
            Self::Percent => "`%`",
            Self::PlusEq => "`+=`",
            Self::MinusEq => "`-=`",
            Self::StarEq => "`*=`",
            Self::SlashEq => "`/=`",
            Self::PercentEq => "`%=`",
            Self::Lt => "`<`",
            Self::LtEq => "`<=`",
            Self::Gt => "`>`",
            Self::GtEq => "`>=`",
            Self::EqEq => "`==`",
            Self::NotEq => "`!=`",
            Self::Increment => "`++`",
            Self::Decrement => "`--`",
        }
    }

    /// Reserved words.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::And
                | Self::Break
                | Self::Continue
                | Self::Elif
                | Self::Else
                | Self::EndForeach
                | Self::EndIf
                | Self::False
                | Self::Foreach
                | Self::If
                | Self::In
                | Self::Not
                | Self::Or
                | Self::True
        )
    }

    /// Radix of a numeric literal kind, `None` for everything else.
    pub const fn radix(self) -> Option<u32> {
        match self {
            Self::BinNumber => Some(2),
            Self::OctNumber => Some(8),
            Self::DecNumber => Some(10),
            Self::HexNumber => Some(16),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

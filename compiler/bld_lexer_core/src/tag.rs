//! Raw token tags produced by the scanner.

/// Classification of one raw token.
///
/// Discriminants are grouped into ranges so families can be tested with a
/// single comparison:
///
/// | Range   | Family                   |
/// |---------|--------------------------|
/// | 0-15    | identifiers and literals |
/// | 32-63   | operators and punctuators|
/// | 80-95   | delimiters               |
/// | 112-127 | trivia                   |
/// | 240-254 | errors                   |
/// | 255     | end of input             |
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // Identifiers & literals
    Ident = 0,
    DecInt = 1,
    BinInt = 2,
    OctInt = 3,
    HexInt = 4,
    String = 5,
    TripleString = 6,

    // Operators & punctuators
    Plus = 32,
    Minus = 33,
    Star = 34,
    Slash = 35,
    Percent = 36,
    PlusEqual = 37,
    MinusEqual = 38,
    StarEqual = 39,
    SlashEqual = 40,
    PercentEqual = 41,
    Equal = 42,
    EqualEqual = 43,
    BangEqual = 44,
    Less = 45,
    LessEqual = 46,
    Greater = 47,
    GreaterEqual = 48,
    Dot = 49,
    Colon = 50,
    Comma = 51,
    Question = 52,

    // Delimiters
    LeftParen = 80,
    RightParen = 81,
    LeftBrace = 82,
    RightBrace = 83,
    LeftBracket = 84,
    RightBracket = 85,

    // Trivia
    /// Whitespace and `\` continuation markers.
    Whitespace = 112,
    /// `#` up to, not including, the newline.
    LineComment = 113,

    // Errors
    /// A byte that starts no token (including interior NUL).
    InvalidByte = 240,
    /// `'` without a closing `'`.
    UnterminatedString = 241,
    /// `'''` without a closing `'''`.
    UnterminatedTripleString = 242,
    /// Radix marker without digits, or a number glued to a non-boundary.
    MalformedNumber = 243,
    /// `!` not followed by `=`.
    LoneBang = 244,

    Eof = 255,
}

impl RawTag {
    /// Fixed source text for operators and delimiters.
    pub const fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::PlusEqual => "+=",
            Self::MinusEqual => "-=",
            Self::StarEqual => "*=",
            Self::SlashEqual => "/=",
            Self::PercentEqual => "%=",
            Self::Equal => "=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Dot => ".",
            Self::Colon => ":",
            Self::Comma => ",",
            Self::Question => "?",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            _ => return None,
        })
    }

    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self as u8, 112..=127)
    }
}

/// One raw token: a tag and its byte length.
///
/// The start offset is implicit: it is the sum of the lengths of every
/// token before it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);

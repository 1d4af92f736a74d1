use logos::Logos;
use std::ops::Range;

/// Every kind of token the scanner recognizes.
///
/// Anything else in the input is an [`UnknownCharacter`](super::UnknownCharacter).
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Times,

    #[token("/")]
    Slash,

    #[token("^")]
    Caret,

    #[token("=")]
    Equals,

    #[token("(")]
    LeftParen,

    #[token(")")]
    RightParen,

    /// A maximal run of decimal digits. There is no upper bound on its length.
    #[regex(r"[0-9]+")]
    Integer,

    /// A letter followed by any number of letters, digits and underscores.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*")]
    Name,
}

/// A token along with the slice of input it was scanned from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// Byte range of the token in the input.
    pub span: Range<usize>,

    pub kind: TokenKind,

    /// The text of the token, as written.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Whitespace separates tokens but never reaches the tree builder.
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

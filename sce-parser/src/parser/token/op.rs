//! Binary and unary operators recognized by the tree builder.

use crate::tokenizer::TokenKind;
use std::{fmt, ops::Range};

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Precedence of the equation operator `=`.
    Eq,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of unary negation (`-`).
    Neg,

    /// Precedence of exponentiation (`^`).
    Exp,
}

/// The unary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOpKind {
    Neg,
}

impl UnaryOpKind {
    /// Returns the precedence of the unary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Neg => Precedence::Neg,
        }
    }
}

impl fmt::Display for UnaryOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neg => write!(f, "-"),
        }
    }
}

/// A unary operator that takes one operand.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOp {
    /// The kind of unary operator.
    pub kind: UnaryOpKind,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    Exp,
    Mul,
    Div,
    Add,
    Sub,
    Eq,
}

impl BinOpKind {
    /// Returns the binary operation the given token stands for, if any.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Caret => Some(Self::Exp),
            TokenKind::Times => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Equals => Some(Self::Eq),
            _ => None,
        }
    }

    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Exp => Precedence::Exp,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Add | Self::Sub => Precedence::Term,
            Self::Eq => Precedence::Eq,
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Exp => "^",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Eq => "=",
        };
        write!(f, "{}", symbol)
    }
}

/// A binary operator that takes two operands.
#[derive(Debug, Clone, PartialEq)]
pub struct BinOp {
    /// The kind of binary operator.
    pub kind: BinOpKind,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

impl BinOp {
    /// Returns the precedence of the binary operator.
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }
}

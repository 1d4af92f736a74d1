//! The syntax tree produced by the tree builder.
//!
//! Every node remembers the byte range of the input it covers. Displaying a node writes it back
//! out without whitespace, keeping every pair of parentheses from the input.

use crate::parser::token::op::{BinOp, UnaryOp};
use std::{fmt, ops::Range};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Paren(Paren),
    Unary(Unary),
    Binary(Binary),
}

impl Expr {
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(Literal::Integer(int)) => int.span.clone(),
            Expr::Literal(Literal::Symbol(sym)) => sym.span.clone(),
            Expr::Paren(Paren { span, .. })
                | Expr::Unary(Unary { span, .. })
                | Expr::Binary(Binary { span, .. }) => span.clone(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(Literal::Integer(int)) => f.write_str(&int.value),
            Expr::Literal(Literal::Symbol(sym)) => f.write_str(&sym.name),
            Expr::Paren(paren) => write!(f, "({})", paren.expr),
            Expr::Unary(unary) => write!(f, "{}{}", unary.op.kind, unary.operand),
            Expr::Binary(binary) => write!(f, "{}{}{}", binary.lhs, binary.op.kind, binary.rhs),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(LitInt),
    Symbol(LitSym),
}

/// An integer literal. The digits are kept as written, so their size is unbounded.
#[derive(Debug, Clone, PartialEq)]
pub struct LitInt {
    /// Decimal digits, preceded by `-` once a unary minus has been folded in.
    pub value: String,
    pub span: Range<usize>,
}

impl LitInt {
    /// Folds a unary minus at `minus_span` into the literal. Negating twice restores the digits.
    pub fn negate(self, minus_span: Range<usize>) -> Self {
        let value = match self.value.strip_prefix('-') {
            Some(digits) => digits.to_string(),
            None => format!("-{}", self.value),
        };
        Self { value, span: minus_span.start..self.span.end }
    }
}

/// A name, such as `x` or `rate_2`.
#[derive(Debug, Clone, PartialEq)]
pub struct LitSym {
    pub name: String,
    pub span: Range<usize>,
}

/// A parenthesized group. It survives into the engine as a bracket node.
#[derive(Debug, Clone, PartialEq)]
pub struct Paren {
    pub expr: Box<Expr>,
    pub span: Range<usize>,
}

/// A unary minus applied to anything other than an integer literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    pub operand: Box<Expr>,
    pub op: UnaryOp,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub lhs: Box<Expr>,
    pub op: BinOp,
    pub rhs: Box<Expr>,
    pub span: Range<usize>,
}

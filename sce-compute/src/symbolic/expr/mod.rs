//! The expression model that the simplifier rewrites.
//!
//! The [`Expr`](sce_parser::parser::ast::Expr) type from `sce_parser` mirrors the source text: it
//! keeps spans, binary operators and unary minus. This module defines a separate [`Expr`] that
//! only keeps what matters to simplification. Subtraction becomes addition of `-1 * rhs`, unary
//! minus becomes multiplication by `-1`, and the children of sums and products are held in a
//! [`Terms`] multiset.
//!
//! Trees are never mutated in place. A rewrite either returns an equal tree or builds a new one
//! out of cloned and newly simplified children.
//!
//! # Structural equality
//!
//! The [`PartialEq`] and [`Eq`] implementations for [`Expr`] compare **structure**, not
//! mathematical value. Two expressions are equal if they are the same variant with equal parts,
//! where the children of [`Expr::Plus`] and [`Expr::Multiply`] are compared as multisets, in any
//! order. `x + 1` and `1 + x` are equal; `2 * x` and `x + x` are not, and neither are `(x)` and
//! `x`.
//!
//! The fixed-point driver relies on this equality to decide when to stop.

mod iter;
mod terms;

use crate::{config, primitive::{int, int_from_str}};
pub use iter::ExprIter;
use rug::Integer;
use sce_parser::parser::{
    ast::{Expr as AstExpr, Literal},
    token::op::{BinOpKind, UnaryOpKind},
};
use std::fmt;

pub use terms::Terms;

/// An expression in the model.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer of arbitrary size, such as `2` or `-144`.
    Constant(Integer),

    /// A variable, such as `x` or `x_1`. The variable named by [`config::imaginary_unit`] is
    /// treated as the imaginary unit.
    Variable(String),

    /// An expression that was written in brackets. Brackets only group; they have no meaning of
    /// their own.
    Bracket(Box<Expr>),

    /// A numerator divided by a denominator.
    Fraction(Box<Expr>, Box<Expr>),

    /// A base raised to an exponent.
    Power(Box<Expr>, Box<Expr>),

    /// A sum. The identity element is `0`.
    Plus(Terms),

    /// A product. The identity element is `1`.
    Multiply(Terms),

    /// Two expressions that are stated to be equal. Both sides are simplified, but the equation
    /// is never solved.
    Equation(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Creates a [`Expr::Constant`] with the given value.
    pub fn int<T>(n: T) -> Self
    where
        Integer: From<T>,
    {
        Self::Constant(int(n))
    }

    /// Creates a [`Expr::Variable`] with the given name.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Wraps the expression in a [`Expr::Bracket`].
    pub fn bracket(inner: Self) -> Self {
        Self::Bracket(Box::new(inner))
    }

    /// Creates a [`Expr::Fraction`].
    pub fn frac(numerator: Self, denominator: Self) -> Self {
        Self::Fraction(Box::new(numerator), Box::new(denominator))
    }

    /// Creates a [`Expr::Power`].
    pub fn pow(base: Self, exponent: Self) -> Self {
        Self::Power(Box::new(base), Box::new(exponent))
    }

    /// Creates a [`Expr::Plus`] from the given terms, merging equal terms.
    pub fn plus(terms: impl IntoIterator<Item = Self>) -> Self {
        Self::Plus(terms.into_iter().collect())
    }

    /// Creates a [`Expr::Multiply`] from the given factors, merging equal factors.
    pub fn multiply(factors: impl IntoIterator<Item = Self>) -> Self {
        Self::Multiply(factors.into_iter().collect())
    }

    /// Creates a [`Expr::Equation`].
    pub fn equation(lhs: Self, rhs: Self) -> Self {
        Self::Equation(Box::new(lhs), Box::new(rhs))
    }

    /// Creates the variable that acts as the imaginary unit.
    pub fn imaginary_unit() -> Self {
        Self::var(config::imaginary_unit())
    }

    /// If the expression is a [`Expr::Constant`], returns a reference to the contained integer.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Constant(n) => Some(n),
            _ => None,
        }
    }

    /// Returns true if the expression is the constant `n`.
    pub fn is_int<T>(&self, n: T) -> bool
    where
        Integer: PartialEq<T>,
    {
        self.as_integer().is_some_and(|value| *value == n)
    }

    /// If the expression is a [`Expr::Variable`], returns its name.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if the expression is the variable that acts as the imaginary unit.
    pub fn is_imaginary_unit(&self) -> bool {
        self.as_variable() == Some(config::imaginary_unit())
    }

    /// Returns true if the expression is a [`Expr::Constant`] or a [`Expr::Variable`]. Atoms are
    /// never wrapped in parentheses when rendered.
    pub fn is_atom(&self) -> bool {
        matches!(self, Self::Constant(_) | Self::Variable(_))
    }

    /// Returns true if the expression is a [`Expr::Constant`] below zero. Such a constant needs
    /// parentheses as the base of a power, or the minus would apply to the whole power.
    pub fn is_negative_constant(&self) -> bool {
        matches!(self, Self::Constant(n) if *n < 0)
    }

    /// Returns true if the expression contains no variables.
    pub fn is_constant(&self) -> bool {
        match self {
            Self::Constant(_) => true,
            Self::Variable(_) => false,
            Self::Bracket(inner) => inner.is_constant(),
            Self::Fraction(lhs, rhs) | Self::Power(lhs, rhs) | Self::Equation(lhs, rhs) => {
                lhs.is_constant() && rhs.is_constant()
            },
            Self::Plus(terms) | Self::Multiply(terms) => terms.iter().all(Self::is_constant),
        }
    }

    /// Returns true if the expression is a constant, or a fraction of two constants. Constant-like
    /// expressions are the ones folded together inside sums and products.
    pub fn is_constant_like(&self) -> bool {
        match self {
            Self::Constant(_) => true,
            Self::Fraction(numerator, denominator) => {
                matches!((&**numerator, &**denominator), (Self::Constant(_), Self::Constant(_)))
            },
            _ => false,
        }
    }

    /// If the expression is constant-like, returns its value as a numerator and denominator. The
    /// pair is not necessarily in lowest terms.
    pub fn as_rational(&self) -> Option<(Integer, Integer)> {
        match self {
            Self::Constant(n) => Some((n.clone(), int(1))),
            Self::Fraction(numerator, denominator) => match (&**numerator, &**denominator) {
                (Self::Constant(n), Self::Constant(d)) => Some((n.clone(), d.clone())),
                _ => None,
            },
            _ => None,
        }
    }

    /// Returns the number of nodes in the tree, counting every occurrence of a repeated child.
    pub fn size(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }
}

/// Writes the expression, wrapping it in parentheses if `paren` is true.
fn fmt_child(f: &mut fmt::Formatter, expr: &Expr, paren: bool) -> fmt::Result {
    if paren {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(n) => write!(f, "{}", n),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Bracket(inner) => write!(f, "({})", inner),
            Self::Fraction(numerator, denominator) => {
                fmt_child(f, numerator, !numerator.is_atom())?;
                write!(f, "/")?;
                fmt_child(f, denominator, !denominator.is_atom())
            },
            Self::Power(base, exponent) => {
                fmt_child(f, base, !base.is_atom() || base.is_negative_constant())?;
                write!(f, "^")?;
                fmt_child(f, exponent, !exponent.is_atom())
            },
            Self::Plus(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        write!(f, "+")?;
                    }
                    write!(f, "{}", term)?;
                }
                Ok(())
            },
            Self::Multiply(factors) => {
                for (i, factor) in factors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "*")?;
                    }
                    let paren = matches!(factor, Self::Plus(_) | Self::Fraction(..) | Self::Equation(..));
                    fmt_child(f, factor, paren)?;
                }
                Ok(())
            },
            Self::Equation(lhs, rhs) => write!(f, "{}={}", lhs, rhs),
        }
    }
}

impl From<AstExpr> for Expr {
    fn from(expr: AstExpr) -> Self {
        match expr {
            AstExpr::Literal(Literal::Integer(int)) => Self::Constant(int_from_str(&int.value)),
            AstExpr::Literal(Literal::Symbol(sym)) => Self::Variable(sym.name),
            AstExpr::Paren(paren) => Self::bracket(Self::from(*paren.expr)),
            AstExpr::Unary(unary) => match unary.op.kind {
                // treat this as -1 * operand
                UnaryOpKind::Neg => Self::multiply([Self::int(-1), Self::from(*unary.operand)]),
            },
            AstExpr::Binary(bin) => {
                let lhs = Self::from(*bin.lhs);
                let rhs = Self::from(*bin.rhs);
                match bin.op.kind {
                    BinOpKind::Exp => Self::pow(lhs, rhs),
                    BinOpKind::Mul => Self::multiply([lhs, rhs]),
                    BinOpKind::Div => Self::frac(lhs, rhs),
                    BinOpKind::Add => Self::plus([lhs, rhs]),
                    // treat this as lhs + -1 * rhs
                    BinOpKind::Sub => Self::plus([lhs, Self::multiply([Self::int(-1), rhs])]),
                    BinOpKind::Eq => Self::equation(lhs, rhs),
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sce_parser::parser::Parser;
    use super::*;

    fn convert(input: &str) -> Expr {
        Expr::from(Parser::new(input).parse().unwrap())
    }

    #[test]
    fn subtraction() {
        assert_eq!(
            convert("1-2"),
            Expr::plus([Expr::int(1), Expr::multiply([Expr::int(-1), Expr::int(2)])]),
        );
    }

    #[test]
    fn negative_literal() {
        assert_eq!(convert("-1"), Expr::int(-1));
        assert_eq!(convert("(1)"), Expr::bracket(Expr::int(1)));
        assert_eq!(convert("-x"), Expr::multiply([Expr::int(-1), Expr::var("x")]));
    }

    #[test]
    fn repeated_children_merge() {
        let expr = convert("x*x");
        let Expr::Multiply(factors) = &expr else {
            panic!("expected a product, found {:?}", expr);
        };
        assert_eq!(factors.entries(), &[(Expr::var("x"), 2)]);
    }

    #[test]
    fn equality_ignores_order() {
        assert_eq!(convert("x+1"), convert("1+x"));
        assert_ne!(convert("x+x"), convert("2*x"));
        assert_ne!(convert("(x)"), convert("x"));
    }

    #[test]
    fn size() {
        assert_eq!(convert("x").size(), 1);
        assert_eq!(convert("x+x").size(), 3);
        assert_eq!(convert("(2/3)^3").size(), 6);
    }

    #[test]
    fn constant_checks() {
        assert!(convert("2/3").is_constant_like());
        assert!(!convert("(2/3)").is_constant_like());
        assert!(convert("(2/3)").is_constant());
        assert!(!convert("2/x").is_constant());
        assert_eq!(convert("2/3").as_rational(), Some((int(2), int(3))));
    }

    #[test]
    fn display() {
        assert_eq!(convert("(1+x)*2^-3").to_string(), "(1+x)*2^-3");
        assert_eq!(Expr::frac(Expr::plus([Expr::var("x"), Expr::int(1)]), Expr::int(2)).to_string(), "(x+1)/2");
        assert_eq!(Expr::multiply([Expr::int(-1), Expr::var("i")]).to_string(), "-1*i");
        assert_eq!(convert("x = 2").to_string(), "x=2");
    }
}

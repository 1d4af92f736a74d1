//! The tree builder.
//!
//! Unlike a recursive-descent parser, the [`Parser`] builds the tree by **iterated reduction**.
//! The token stream is turned into a work list of [`Item`]s (integer and name tokens become
//! trees immediately), and the list is then scanned from left to right in repeated passes. Each
//! pass replaces every reducible window of items with a single tree:
//!
//! 1. `a ^ b` windows,
//! 2. `a * b` and `a / b` windows,
//! 3. `a + b`, `a - b` and `a = b` windows, fully bracketed groups `( a )`, and unary minus.
//!
//! A binary window is only reduced when its operands are not claimed by a tighter-binding
//! neighbour operator, so `1 + 2 * (3 + 4)` waits for the bracket to close before the
//! multiplication (and then the addition) is reduced. Operators of equal precedence reduce from
//! left to right, so `3^3^3` is `(3^3)^3`.
//!
//! Parsing stops when a single tree remains. A pass that reduces nothing while more than one item
//! remains is an [`InvalidExpression`] error.

pub mod ast;
pub mod error;
pub mod token;

use ast::{Binary, Expr, Literal, LitInt, LitSym, Paren, Unary};
use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use error::{EmptyExpression, EmptyParenthesis, Error, InvalidExpression, UnclosedParenthesis};
use std::{fmt, ops::Range};
use token::op::{BinOp, BinOpKind, Precedence, UnaryOp, UnaryOpKind};

/// An entry of the work list: a token that has not been consumed yet, or an already reduced tree.
#[derive(Debug, Clone, PartialEq)]
enum Item<'source> {
    Token(Token<'source>),
    Expr(Expr),
}

impl<'source> From<Token<'source>> for Item<'source> {
    fn from(token: Token<'source>) -> Self {
        match token.kind {
            TokenKind::Integer => Item::Expr(Expr::Literal(Literal::Integer(LitInt {
                value: token.lexeme.to_string(),
                span: token.span,
            }))),
            TokenKind::Name => Item::Expr(Expr::Literal(Literal::Symbol(LitSym {
                name: token.lexeme.to_string(),
                span: token.span,
            }))),
            _ => Item::Token(token),
        }
    }
}

impl Item<'_> {
    /// Returns the span of the item.
    fn span(&self) -> Range<usize> {
        match self {
            Item::Token(token) => token.span.clone(),
            Item::Expr(expr) => expr.span(),
        }
    }

    /// Returns true if the item is a reduced tree.
    fn is_expr(&self) -> bool {
        matches!(self, Item::Expr(_))
    }

    /// Returns the kind of the token, if the item is a token.
    fn token_kind(&self) -> Option<TokenKind> {
        match self {
            Item::Token(token) => Some(token.kind),
            Item::Expr(_) => None,
        }
    }

    /// Unwraps the reduced tree. Must only be called after checking the item with
    /// [`Item::is_expr`].
    fn into_expr(self) -> Expr {
        match self {
            Item::Expr(expr) => expr,
            Item::Token(token) => unreachable!("expected a reduced tree, found token {:?}", token),
        }
    }
}

impl fmt::Display for Item<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Token(token) => write!(f, "{}", token.lexeme),
            Item::Expr(expr) => write!(f, "{}", expr),
        }
    }
}

/// Returns the precedence of the operator token at `idx`, or [`None`] if there is no operator
/// there. A `-` with no tree directly before it is a unary minus.
fn operator_precedence(items: &[Item], idx: usize) -> Option<Precedence> {
    let kind = items.get(idx)?.token_kind()?;
    if kind == TokenKind::Minus && (idx == 0 || !items[idx - 1].is_expr()) {
        return Some(UnaryOpKind::Neg.precedence());
    }
    BinOpKind::from_token(kind).map(|op| op.precedence())
}

/// Reduces `lhs op rhs` at `idx` if `op` is one of `ops` and neither neighbour operator binds
/// the operands more tightly. Returns true if the window was reduced.
fn reduce_binary(items: &mut Vec<Item>, idx: usize, ops: &[BinOpKind]) -> bool {
    if idx + 2 >= items.len() || !items[idx].is_expr() || !items[idx + 2].is_expr() {
        return false;
    }
    let Some(kind) = items[idx + 1].token_kind()
        .and_then(BinOpKind::from_token)
        .filter(|kind| ops.contains(kind)) else {
        return false;
    };

    let precedence = kind.precedence();
    if idx > 0 && operator_precedence(items, idx - 1).is_some_and(|left| left >= precedence) {
        return false;
    }
    if operator_precedence(items, idx + 3).is_some_and(|right| right > precedence) {
        return false;
    }

    let rhs = items.remove(idx + 2).into_expr();
    let op_span = items.remove(idx + 1).span();
    let lhs = items.remove(idx).into_expr();
    let span = lhs.span().start..rhs.span().end;
    items.insert(idx, Item::Expr(Expr::Binary(Binary {
        lhs: Box::new(lhs),
        op: BinOp { kind, span: op_span },
        rhs: Box::new(rhs),
        span,
    })));
    true
}

/// Reduces a fully bracketed group `( expr )` at `idx`. Returns true if the group was reduced.
fn reduce_paren(items: &mut Vec<Item>, idx: usize) -> bool {
    if idx + 2 >= items.len()
        || items[idx].token_kind() != Some(TokenKind::LeftParen)
        || !items[idx + 1].is_expr()
        || items[idx + 2].token_kind() != Some(TokenKind::RightParen)
    {
        return false;
    }

    let close = items.remove(idx + 2);
    let expr = items.remove(idx + 1).into_expr();
    let span = items[idx].span().start..close.span().end;
    items[idx] = Item::Expr(Expr::Paren(Paren {
        expr: Box::new(expr),
        span,
    }));
    true
}

/// Reduces a unary minus at `idx`. A negated integer literal is folded into the literal itself.
/// Returns true if the window was reduced.
fn reduce_unary(items: &mut Vec<Item>, idx: usize) -> bool {
    if idx + 1 >= items.len()
        || items[idx].token_kind() != Some(TokenKind::Minus)
        || (idx > 0 && items[idx - 1].is_expr())
        || !items[idx + 1].is_expr()
    {
        return false;
    }

    // `-2^x` negates the power, so wait until the power is reduced
    if operator_precedence(items, idx + 2).is_some_and(|right| right > UnaryOpKind::Neg.precedence()) {
        return false;
    }

    let operand = items.remove(idx + 1).into_expr();
    let minus_span = items[idx].span();
    let reduced = match operand {
        Expr::Literal(Literal::Integer(int)) => Expr::Literal(Literal::Integer(int.negate(minus_span))),
        operand => {
            let span = minus_span.start..operand.span().end;
            Expr::Unary(Unary {
                operand: Box::new(operand),
                op: UnaryOp { kind: UnaryOpKind::Neg, span: minus_span },
                span,
            })
        },
    };
    items[idx] = Item::Expr(reduced);
    true
}

/// Checks that every bracket is matched and that no pair of brackets is empty.
fn check_parens(tokens: &[Token]) -> Result<(), Vec<Error>> {
    let mut errors = Vec::new();
    let mut open = Vec::new();

    for (idx, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::LeftParen => open.push(token.span.clone()),
            TokenKind::RightParen => match open.pop() {
                Some(open_span) => {
                    if idx > 0 && tokens[idx - 1].kind == TokenKind::LeftParen {
                        errors.push(Error::new(vec![open_span.start..token.span.end], EmptyParenthesis));
                    }
                },
                None => errors.push(Error::new(
                    vec![token.span.clone()],
                    UnclosedParenthesis { opening: false },
                )),
            },
            _ => (),
        }
    }

    errors.extend(open.into_iter().map(|span| Error::new(vec![span], UnclosedParenthesis { opening: true })));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Builds an expression tree from source code.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The source code to parse.
    source: &'source str,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self { source }
    }

    /// Returns the source code of the parser.
    pub fn source(&self) -> &'source str {
        self.source
    }

    /// Scans the source and reduces the tokens into a single expression tree.
    pub fn parse(&self) -> Result<Expr, Vec<Error>> {
        let tokens = tokenize_complete(self.source).map_err(|err| vec![err])?;
        let tokens = tokens.into_vec()
            .into_iter()
            .filter(|token| !token.is_whitespace())
            .collect::<Vec<_>>();
        if tokens.is_empty() {
            return Err(vec![Error::new(vec![0..self.source.len()], EmptyExpression)]);
        }
        check_parens(&tokens)?;

        let mut items = tokens.into_iter().map(Item::from).collect::<Vec<_>>();
        while items.len() > 1 {
            let start_len = items.len();
            reduce_pass(&mut items, |items, idx| reduce_binary(items, idx, &[BinOpKind::Exp]));
            reduce_pass(&mut items, |items, idx| {
                reduce_binary(items, idx, &[BinOpKind::Mul, BinOpKind::Div])
            });
            reduce_pass(&mut items, |items, idx| {
                reduce_binary(items, idx, &[BinOpKind::Add, BinOpKind::Sub, BinOpKind::Eq])
                    || reduce_paren(items, idx)
                    || reduce_unary(items, idx)
            });

            if items.len() == start_len {
                return Err(vec![invalid_expression(&items)]);
            }
        }

        match items.pop() {
            Some(Item::Expr(expr)) => Ok(expr),
            Some(item) => Err(vec![invalid_expression(&[item])]),
            None => unreachable!("the work list starts non-empty and reductions never empty it"),
        }
    }
}

/// Applies the reduction `f` at every index of the work list, from left to right.
fn reduce_pass<'source>(
    items: &mut Vec<Item<'source>>,
    mut f: impl FnMut(&mut Vec<Item<'source>>, usize) -> bool,
) {
    let mut idx = 0;
    while idx < items.len() {
        f(items, idx);
        idx += 1;
    }
}

/// Builds the error reported when the work list cannot be reduced any further.
fn invalid_expression(items: &[Item]) -> Error {
    let remaining = items.iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let start = items.first().map_or(0, |item| item.span().start);
    let end = items.last().map_or(0, |item| item.span().end);
    Error::new(vec![start..end], InvalidExpression { remaining })
}

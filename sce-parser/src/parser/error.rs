//! Errors that can occur while building the expression tree.

use ariadne::Fmt;
use sce_attrs::ErrorKind;
use sce_error::{ErrorKind, EXPR};

pub use sce_error::Error;

/// The source code contained no tokens at all.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression",
    labels = ["here"],
    help = format!("type an {} to simplify, such as `1/2 + 1/3`", "expression".fg(EXPR)),
)]
pub struct EmptyExpression;

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// A reduction pass made no progress, so the remaining items cannot form one expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid expression: '{}'", remaining),
    labels = [format!("I could not combine this into a single {}", "expression".fg(EXPR))],
    help = "check for missing operands or operators",
)]
pub struct InvalidExpression {
    /// The items that were left over, rendered in order and separated by spaces.
    pub remaining: String,
}

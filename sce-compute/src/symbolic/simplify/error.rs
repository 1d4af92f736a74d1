//! Errors that can occur while simplifying an expression.

use ariadne::Fmt;
use sce_attrs::ErrorKind;
use sce_error::{ErrorKind, EXPR};

pub use sce_error::Error;

/// A constant exponent is too large to raise a constant base to.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the exponent `{}` is too large", exponent),
    labels = ["in this expression"],
    help = format!("only exponents up to {} can be folded into a constant", u32::MAX.fg(EXPR)),
)]
pub struct ExponentTooLarge {
    /// The exponent, rendered in decimal.
    pub exponent: String,
}

/// A fraction of two constants has a denominator of zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["in this expression"],
    help = format!("the {} must not simplify to zero", "denominator".fg(EXPR)),
)]
pub struct DivisionByZero;

/// The fixed-point driver gave up before the expression stopped changing.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the expression did not settle after {} iterations", iterations),
    labels = ["while simplifying this expression"],
    help = "this is a bug in the simplification rules; please report it along with the input",
)]
pub struct NoFixedPoint {
    /// The number of iterations that were run.
    pub iterations: usize,
}

//! Rules that remove brackets.

use crate::symbolic::{
    expr::Expr,
    simplify::{error::Error, simplify_with, step::Step},
    step_collector::StepCollector,
};
use super::Rule;

/// The bracket rules, in the order they are tried.
pub const RULES: &[Rule] = &[unwrap_atom, unwrap_fraction];

/// `(x) = x`
/// `(2) = 2`
pub fn unwrap_atom(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let Expr::Bracket(inner) = expr else { return Ok(None) };
    if !inner.is_atom() {
        return Ok(None);
    }

    step_collector.push(Step::UnwrapBracket);
    Ok(Some((**inner).clone()))
}

/// `(a/b) = a/b`, simplifying `a` and `b`.
pub fn unwrap_fraction(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let Expr::Bracket(inner) = expr else { return Ok(None) };
    let Expr::Fraction(numerator, denominator) = &**inner else { return Ok(None) };

    step_collector.push(Step::UnwrapFraction);
    Ok(Some(Expr::frac(
        simplify_with(numerator, step_collector)?,
        simplify_with(denominator, step_collector)?,
    )))
}

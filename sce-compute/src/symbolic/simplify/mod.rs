//! One layer of simplification.
//!
//! [`simplify()`] picks the rules for the variant at the root of the expression and applies the
//! first one that matches. A rule may simplify some children as part of its rewrite, but no rule
//! runs to completion by itself; the result is only guaranteed to be simpler than, or equal to,
//! the input. Running [`simplify()`] until its output stops changing is the job of the
//! fixed-point driver in [`crate::symbolic::solve`].
//!
//! If no rule matches, every child is simplified independently and the same variant is rebuilt
//! around the results.
//!
//! ```
//! use sce_compute::symbolic::{simplify, Expr};
//!
//! // `x + (1 + 2)` flattens first, and folds its constants on the next call
//! let expr = Expr::plus([Expr::var("x"), Expr::plus([Expr::int(1), Expr::int(2)])]);
//! let once = simplify(&expr).unwrap();
//! assert_eq!(once, Expr::plus([Expr::var("x"), Expr::int(1), Expr::int(2)]));
//! assert_eq!(simplify(&once).unwrap(), Expr::plus([Expr::var("x"), Expr::int(3)]));
//! ```

pub mod error;
pub mod rules;
pub mod step;

use crate::symbolic::{expr::{Expr, Terms}, step_collector::StepCollector};
use error::Error;
use step::Step;

/// Simplifies children independently and rebuilds the same variant around them.
fn simplify_children(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Expr, Error> {
    Ok(match expr {
        Expr::Constant(_) | Expr::Variable(_) => expr.clone(),
        Expr::Bracket(inner) => Expr::bracket(simplify_with(inner, step_collector)?),
        Expr::Fraction(numerator, denominator) => Expr::frac(
            simplify_with(numerator, step_collector)?,
            simplify_with(denominator, step_collector)?,
        ),
        Expr::Power(base, exponent) => Expr::pow(
            simplify_with(base, step_collector)?,
            simplify_with(exponent, step_collector)?,
        ),
        Expr::Plus(terms) => Expr::Plus(simplify_terms(terms, step_collector)?),
        Expr::Multiply(factors) => Expr::Multiply(simplify_terms(factors, step_collector)?),
        Expr::Equation(lhs, rhs) => Expr::equation(
            simplify_with(lhs, step_collector)?,
            simplify_with(rhs, step_collector)?,
        ),
    })
}

/// Simplifies each distinct child once, keeping its multiplicity. Children that become equal are
/// merged.
pub(crate) fn simplify_terms(terms: &Terms, step_collector: &mut dyn StepCollector<Step>) -> Result<Terms, Error> {
    let mut simplified = Terms::new();
    for (child, count) in terms.entries() {
        simplified.push_n(simplify_with(child, step_collector)?, *count);
    }
    Ok(simplified)
}

/// Applies one layer of simplification to the expression.
pub fn simplify(expr: &Expr) -> Result<Expr, Error> {
    simplify_with(expr, &mut ())
}

/// Applies one layer of simplification to the expression, returning the rules that were applied
/// anywhere in the tree, in order.
pub fn simplify_with_steps(expr: &Expr) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let simplified = simplify_with(expr, &mut steps)?;
    Ok((simplified, steps))
}

/// Applies one layer of simplification to the expression, reporting the rules that were applied
/// to the given [`StepCollector`].
pub fn simplify_with(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Expr, Error> {
    match rules::all(expr, step_collector)? {
        Some(simplified) => Ok(simplified),
        None => simplify_children(expr, step_collector),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::var("x")
    }

    #[test]
    fn atoms_are_unchanged() {
        assert_eq!(simplify(&Expr::int(5)).unwrap(), Expr::int(5));
        assert_eq!(simplify(&x()).unwrap(), x());
    }

    #[test]
    fn general_case_recurses() {
        let expr = Expr::plus([x(), Expr::multiply([Expr::int(3), Expr::int(4)])]);
        let (simplified, steps) = simplify_with_steps(&expr).unwrap();
        assert_eq!(simplified, Expr::plus([x(), Expr::multiply([Expr::int(12)])]));
        assert_eq!(steps, vec![Step::FoldConstants, Step::UnitDenominator]);
    }

    #[test]
    fn equation_sides() {
        let expr = Expr::equation(
            Expr::plus([x(), Expr::int(0)]),
            Expr::frac(Expr::int(6), Expr::int(8)),
        );
        assert_eq!(
            simplify(&expr).unwrap(),
            Expr::equation(Expr::plus([x()]), Expr::frac(Expr::int(3), Expr::int(4))),
        );
    }
}

//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Ok(Some(expr))` with the rewritten expression if the rule applies, or `Ok(None)`
//! if the rule does not apply. Rules that simplify children as part of their rewrite propagate
//! any error from doing so.

pub mod assoc;
pub mod bracket;
pub mod fraction;
pub mod imaginary;
pub mod power;

use crate::symbolic::{expr::Expr, step_collector::StepCollector};
use super::{error::Error, step::Step};

/// The signature shared by every rule.
pub type Rule = fn(&Expr, &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error>;

/// Applies the first rule in `rules` that matches the expression.
pub(crate) fn first_match(
    expr: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
    rules: &[Rule],
) -> Result<Option<Expr>, Error> {
    for rule in rules {
        if let Some(rewritten) = rule(expr, step_collector)? {
            return Ok(Some(rewritten));
        }
    }
    Ok(None)
}

/// If the expression is a fraction, calls the given transformation function with the numerator
/// and denominator.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_fraction<'a, T>(expr: &'a Expr, f: impl FnOnce(&'a Expr, &'a Expr) -> Option<T>) -> Option<T> {
    if let Expr::Fraction(numerator, denominator) = expr {
        f(numerator, denominator)
    } else {
        None
    }
}

/// If the expression is a power, calls the given transformation function with the base and
/// exponent.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_power<'a, T>(expr: &'a Expr, f: impl FnOnce(&'a Expr, &'a Expr) -> Option<T>) -> Option<T> {
    if let Expr::Power(base, exponent) = expr {
        f(base, exponent)
    } else {
        None
    }
}

/// Applies the rules for the variant at the root of the expression.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    match expr {
        Expr::Bracket(_) => first_match(expr, step_collector, bracket::RULES),
        Expr::Plus(_) | Expr::Multiply(_) => first_match(expr, step_collector, assoc::RULES),
        Expr::Fraction(..) => first_match(expr, step_collector, fraction::RULES),
        Expr::Power(..) => first_match(expr, step_collector, power::RULES),
        Expr::Constant(_) | Expr::Variable(_) | Expr::Equation(..) => Ok(None),
    }
}

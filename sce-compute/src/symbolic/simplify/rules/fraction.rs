//! Rules for fractions.
//!
//! Canonical fractions of two constants are in lowest terms, with the sign carried by the
//! numerator. A denominator of `1` never survives.

use crate::symbolic::{
    expr::Expr,
    simplify::{error::{DivisionByZero, Error}, simplify_with, step::Step},
    step_collector::StepCollector,
};
use super::{do_fraction, Rule};

/// The fraction rules, in the order they are tried.
pub const RULES: &[Rule] = &[
    unit_denominator,
    nested_numerator,
    nested_denominator,
    nested_both,
    reduce,
];

/// `a/1 = a`
pub fn unit_denominator(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let Some(numerator) = do_fraction(expr, |numerator, denominator| {
        denominator.is_int(1).then(|| numerator.clone())
    }) else {
        return Ok(None);
    };

    step_collector.push(Step::UnitDenominator);
    Ok(Some(numerator))
}

/// `(a/b)/c = a/(b*c)`, where `c` is a constant.
pub fn nested_numerator(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let Some((a, b, c)) = do_fraction(expr, |numerator, denominator| match (numerator, denominator) {
        (Expr::Fraction(a, b), Expr::Constant(_)) => Some((a, b, denominator)),
        _ => None,
    }) else {
        return Ok(None);
    };

    step_collector.push(Step::NestedNumerator);
    Ok(Some(Expr::frac(
        simplify_with(a, step_collector)?,
        simplify_with(&Expr::multiply([(**b).clone(), c.clone()]), step_collector)?,
    )))
}

/// `c/(a/b) = (c*b)/a`, where `c` is a constant.
pub fn nested_denominator(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let Some((c, a, b)) = do_fraction(expr, |numerator, denominator| match (numerator, denominator) {
        (Expr::Constant(_), Expr::Fraction(a, b)) => Some((numerator, a, b)),
        _ => None,
    }) else {
        return Ok(None);
    };

    step_collector.push(Step::NestedDenominator);
    Ok(Some(Expr::frac(
        simplify_with(&Expr::multiply([c.clone(), (**b).clone()]), step_collector)?,
        simplify_with(a, step_collector)?,
    )))
}

/// `(a/b)/(c/d) = (a*d)/(b*c)`
pub fn nested_both(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let Some((a, b, c, d)) = do_fraction(expr, |numerator, denominator| match (numerator, denominator) {
        (Expr::Fraction(a, b), Expr::Fraction(c, d)) => Some((a, b, c, d)),
        _ => None,
    }) else {
        return Ok(None);
    };

    step_collector.push(Step::NestedBoth);
    Ok(Some(Expr::frac(
        simplify_with(&Expr::multiply([(**a).clone(), (**d).clone()]), step_collector)?,
        simplify_with(&Expr::multiply([(**b).clone(), (**c).clone()]), step_collector)?,
    )))
}

/// `6/8 = 3/4`
/// `2/-3 = -2/3`
/// `-2/-3 = 2/3`
///
/// Reduces a fraction of two constants by their greatest common divisor and moves the sign to the
/// numerator. Returns [`DivisionByZero`] if the denominator is zero.
pub fn reduce(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let Some((numerator, denominator)) = do_fraction(expr, |numerator, denominator| {
        match (numerator, denominator) {
            (Expr::Constant(n), Expr::Constant(d)) => Some((n, d)),
            _ => None,
        }
    }) else {
        return Ok(None);
    };

    if denominator.is_zero() {
        return Err(Error::new(Vec::new(), DivisionByZero));
    }

    let gcd = numerator.clone().gcd(denominator);
    let mut reduced_numerator = numerator.clone() / &gcd;
    let mut reduced_denominator = denominator.clone() / &gcd;
    if reduced_denominator < 0 {
        reduced_numerator = -reduced_numerator;
        reduced_denominator = -reduced_denominator;
    }

    if reduced_numerator == *numerator && reduced_denominator == *denominator {
        return Ok(None);
    }

    step_collector.push(Step::ReduceFraction);
    Ok(Some(Expr::frac(Expr::Constant(reduced_numerator), Expr::Constant(reduced_denominator))))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::symbolic::simplify::simplify;
    use super::*;

    fn frac(n: i32, d: i32) -> Expr {
        Expr::frac(Expr::int(n), Expr::int(d))
    }

    #[test]
    fn unit() {
        assert_eq!(simplify(&Expr::frac(Expr::var("x"), Expr::int(1))).unwrap(), Expr::var("x"));
        assert_eq!(simplify(&frac(5, 1)).unwrap(), Expr::int(5));
    }

    #[test]
    fn lowest_terms() {
        assert_eq!(simplify(&frac(6, 8)).unwrap(), frac(3, 4));
        assert_eq!(simplify(&frac(0, 5)).unwrap(), frac(0, 1));
    }

    #[test]
    fn sign_normalization() {
        assert_eq!(simplify(&frac(2, -3)).unwrap(), frac(-2, 3));
        assert_eq!(simplify(&frac(-2, -3)).unwrap(), frac(2, 3));
        assert_eq!(simplify(&frac(-4, 6)).unwrap(), frac(-2, 3));
        assert_eq!(simplify(&frac(4, -6)).unwrap(), frac(-2, 3));
    }

    #[test]
    fn canonical_is_unchanged() {
        let (simplified, steps) = crate::symbolic::simplify::simplify_with_steps(&frac(-2, 3)).unwrap();
        assert_eq!(simplified, frac(-2, 3));
        assert!(steps.is_empty());
    }

    #[test]
    fn division_by_zero() {
        let err = simplify(&frac(1, 0)).unwrap_err();
        assert!(err.is::<DivisionByZero>());
    }

    #[test]
    fn nested() {
        assert_eq!(
            simplify(&Expr::frac(frac(2, 3), Expr::int(4))).unwrap(),
            Expr::frac(Expr::int(2), Expr::multiply([Expr::int(12)])),
        );
        assert_eq!(
            simplify(&Expr::frac(Expr::int(2), frac(3, 4))).unwrap(),
            Expr::frac(Expr::multiply([Expr::int(8)]), Expr::int(3)),
        );
        assert_eq!(
            simplify(&Expr::frac(frac(2, 3), frac(4, 5))).unwrap(),
            Expr::frac(Expr::multiply([Expr::int(10)]), Expr::multiply([Expr::int(12)])),
        );
    }

    #[test]
    fn symbolic_parts() {
        let expr = Expr::frac(Expr::plus([Expr::var("x"), Expr::int(0)]), Expr::var("y"));
        assert_eq!(
            simplify(&expr).unwrap(),
            Expr::frac(Expr::plus([Expr::var("x")]), Expr::var("y")),
        );
    }
}

//! Rules for powers.

use crate::symbolic::{
    expr::Expr,
    simplify::{error::{Error, ExponentTooLarge}, simplify_with, step::Step},
    step_collector::StepCollector,
};
use rug::ops::Pow;
use super::{do_power, imaginary, Rule};

/// The power rules, in the order they are tried.
pub const RULES: &[Rule] = &[
    power_zero,
    power_one,
    power_one_left,
    fold_power,
    distribute_power,
    imaginary::imaginary_cycle,
];

/// `a^0 = 1`
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    if do_power(expr, |_, exponent| exponent.is_int(0).then_some(())).is_none() {
        return Ok(None);
    }

    step_collector.push(Step::PowerZero);
    Ok(Some(Expr::int(1)))
}

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let Some(base) = do_power(expr, |base, exponent| exponent.is_int(1).then_some(base)) else {
        return Ok(None);
    };

    step_collector.push(Step::PowerOne);
    Ok(Some(base.clone()))
}

/// `1^a = 1`
pub fn power_one_left(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    if do_power(expr, |base, _| base.is_int(1).then_some(())).is_none() {
        return Ok(None);
    }

    step_collector.push(Step::PowerOneLeft);
    Ok(Some(Expr::int(1)))
}

/// `2^3 = 8`
/// `2^-3 = 1/2^3`
///
/// Folds a constant raised to a constant. A negative exponent is moved into the denominator of a
/// fraction first. Returns [`ExponentTooLarge`] if the exponent does not fit in a [`u32`].
pub fn fold_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let Some((base, exponent)) = do_power(expr, |base, exponent| {
        Some((base.as_integer()?, exponent.as_integer()?))
    }) else {
        return Ok(None);
    };

    if *exponent < 0 {
        step_collector.push(Step::NegativeExponent);
        return Ok(Some(Expr::frac(
            Expr::int(1),
            Expr::pow(Expr::Constant(base.clone()), Expr::Constant(-exponent.clone())),
        )));
    }

    let Some(exponent) = exponent.to_u32() else {
        return Err(Error::new(Vec::new(), ExponentTooLarge { exponent: exponent.to_string() }));
    };

    step_collector.push(Step::FoldPower);
    Ok(Some(Expr::Constant(base.clone().pow(exponent))))
}

/// `(2/3)^a = 2^a/3^a`
///
/// Distributes the exponent over a fraction of two constants, simplifying both new powers.
pub fn distribute_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let Some((numerator, denominator, exponent)) = do_power(expr, |base, exponent| match base {
        Expr::Fraction(numerator, denominator) if base.is_constant_like() => {
            Some((numerator, denominator, exponent))
        },
        _ => None,
    }) else {
        return Ok(None);
    };

    step_collector.push(Step::DistributePower);
    Ok(Some(Expr::frac(
        simplify_with(&Expr::pow((**numerator).clone(), exponent.clone()), step_collector)?,
        simplify_with(&Expr::pow((**denominator).clone(), exponent.clone()), step_collector)?,
    )))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::symbolic::simplify::simplify;
    use super::*;

    fn pow(base: Expr, exponent: Expr) -> Expr {
        Expr::pow(base, exponent)
    }

    #[test]
    fn fold() {
        assert_eq!(simplify(&pow(Expr::int(2), Expr::int(10))).unwrap(), Expr::int(1024));
        assert_eq!(simplify(&pow(Expr::int(-3), Expr::int(3))).unwrap(), Expr::int(-27));
        assert_eq!(simplify(&pow(Expr::int(0), Expr::int(2))).unwrap(), Expr::int(0));
    }

    #[test]
    fn identities() {
        let x = Expr::var("x");
        assert_eq!(simplify(&pow(x.clone(), Expr::int(0))).unwrap(), Expr::int(1));
        assert_eq!(simplify(&pow(x.clone(), Expr::int(1))).unwrap(), x.clone());
        assert_eq!(simplify(&pow(Expr::int(1), x)).unwrap(), Expr::int(1));
        assert_eq!(simplify(&pow(Expr::int(2), Expr::int(0))).unwrap(), Expr::int(1));
    }

    #[test]
    fn negative_exponent() {
        assert_eq!(
            simplify(&pow(Expr::int(2), Expr::int(-3))).unwrap(),
            Expr::frac(Expr::int(1), pow(Expr::int(2), Expr::int(3))),
        );
    }

    #[test]
    fn exponent_too_large() {
        let exponent = Expr::Constant(rug::Integer::from(u32::MAX) + 1);
        let err = simplify(&pow(Expr::int(2), exponent)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ExponentTooLarge>(),
            Some(&ExponentTooLarge { exponent: "4294967296".to_string() }),
        );
    }

    #[test]
    fn distribute() {
        let base = Expr::frac(Expr::int(2), Expr::int(3));
        assert_eq!(
            simplify(&pow(base, Expr::int(3))).unwrap(),
            Expr::frac(Expr::int(8), Expr::int(27)),
        );

        let base = Expr::frac(Expr::int(2), Expr::int(3));
        assert_eq!(
            simplify(&pow(base, Expr::var("x"))).unwrap(),
            Expr::frac(pow(Expr::int(2), Expr::var("x")), pow(Expr::int(3), Expr::var("x"))),
        );
    }

    #[test]
    fn general() {
        let expr = pow(Expr::bracket(Expr::var("x")), Expr::plus([Expr::int(1), Expr::int(1)]));
        assert_eq!(simplify(&expr).unwrap(), pow(Expr::var("x"), Expr::plus([Expr::int(2)])));
    }
}

//! Powers of the imaginary unit.

use crate::symbolic::{
    expr::Expr,
    simplify::{error::Error, step::Step},
    step_collector::StepCollector,
};
use super::do_power;

/// `i^0 = 1`
/// `i^1 = i`
/// `i^2 = -1`
/// `i^3 = -1*i`
///
/// The exponent is reduced modulo 4 first, rounding towards negative infinity, so that
/// `i^-1 = i^3`.
pub fn imaginary_cycle(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let Some(remainder) = do_power(expr, |base, exponent| {
        if !base.is_imaginary_unit() {
            return None;
        }
        exponent.as_integer().map(|n| n.mod_u(4))
    }) else {
        return Ok(None);
    };

    step_collector.push(Step::ImaginaryCycle);
    Ok(Some(match remainder {
        0 => Expr::int(1),
        1 => Expr::imaginary_unit(),
        2 => Expr::int(-1),
        _ => Expr::multiply([Expr::int(-1), Expr::imaginary_unit()]),
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::symbolic::simplify::simplify;
    use super::*;

    fn i_pow(n: i32) -> Expr {
        Expr::pow(Expr::var("i"), Expr::int(n))
    }

    #[test]
    fn cycle() {
        let minus_i = Expr::multiply([Expr::int(-1), Expr::var("i")]);
        assert_eq!(simplify(&i_pow(2)).unwrap(), Expr::int(-1));
        assert_eq!(simplify(&i_pow(3)).unwrap(), minus_i);
        assert_eq!(simplify(&i_pow(4)).unwrap(), Expr::int(1));
        assert_eq!(simplify(&i_pow(5)).unwrap(), Expr::var("i"));
        assert_eq!(simplify(&i_pow(7)).unwrap(), minus_i);
        assert_eq!(simplify(&i_pow(-1)).unwrap(), minus_i);
    }

    #[test]
    fn other_variables_are_not_cycled() {
        let expr = Expr::pow(Expr::var("j"), Expr::int(2));
        assert_eq!(simplify(&expr).unwrap(), expr);
    }
}

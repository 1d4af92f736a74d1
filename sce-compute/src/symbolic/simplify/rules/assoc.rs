//! Rules for sums and products.
//!
//! [`Expr::Plus`] and [`Expr::Multiply`] share one set of rules, parameterized by an [`AssocOp`]
//! that supplies the identity element, the way two rational constants fold together, and the way
//! repeated children merge. The rules are tried in this order:
//!
//! 1. [`collapse_singleton`]
//! 2. [`flatten`]
//! 3. [`remove_identity`]
//! 4. [`multiply_zero`] (products only)
//! 5. [`merge_like`]
//! 6. [`fold_constants`]
//! 7. [`absorb_into_fraction`] (products only)

use crate::primitive::int;
use crate::symbolic::{
    expr::{Expr, Terms},
    simplify::{error::Error, simplify_with, step::Step},
    step_collector::StepCollector,
};
use rug::Integer;
use super::Rule;

/// The rules for sums and products, in the order they are tried.
pub const RULES: &[Rule] = &[
    collapse_singleton,
    flatten,
    remove_identity,
    multiply_zero,
    merge_like,
    fold_constants,
    absorb_into_fraction,
];

/// The associative and commutative operation of a [`Expr::Plus`] or [`Expr::Multiply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssocOp {
    Plus,
    Multiply,
}

impl AssocOp {
    /// If the expression is a sum or product, returns its operation and children.
    pub fn of(expr: &Expr) -> Option<(Self, &Terms)> {
        match expr {
            Expr::Plus(terms) => Some((Self::Plus, terms)),
            Expr::Multiply(factors) => Some((Self::Multiply, factors)),
            _ => None,
        }
    }

    /// Returns the identity element of the operation.
    pub fn identity(self) -> Integer {
        match self {
            Self::Plus => int(0),
            Self::Multiply => int(1),
        }
    }

    /// Builds an expression of this operation with the given children.
    pub fn build(self, terms: Terms) -> Expr {
        match self {
            Self::Plus => Expr::Plus(terms),
            Self::Multiply => Expr::Multiply(terms),
        }
    }

    /// Folds two rationals together. Neither needs to be in lowest terms, and neither is the
    /// result.
    ///
    /// - addition: `n1/d1 + n2/d2 = (n1*d2 + n2*d1) / (d1*d2)`
    /// - multiplication: `n1/d1 * n2/d2 = (n1*n2) / (d1*d2)`
    pub fn fold(self, (n1, d1): (Integer, Integer), (n2, d2): (Integer, Integer)) -> (Integer, Integer) {
        match self {
            Self::Plus => (n1 * &d2 + n2 * &d1, d1 * d2),
            Self::Multiply => (n1 * n2, d1 * d2),
        }
    }

    /// Merges `count` occurrences of the same child into one child.
    ///
    /// - addition: `a+a+a = 3*a`
    /// - multiplication: `a*a*a = a^3`
    pub fn merge(self, child: Expr, count: usize) -> Expr {
        match self {
            Self::Plus => Expr::multiply([Expr::int(count), child]),
            Self::Multiply => Expr::pow(child, Expr::int(count)),
        }
    }
}

/// A sum or product with a single child is that child.
pub fn collapse_singleton(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let Some((_, terms)) = AssocOp::of(expr) else { return Ok(None) };
    if terms.len() != 1 {
        return Ok(None);
    }

    step_collector.push(Step::CollapseSingleton);
    Ok(terms.iter().next().cloned())
}

/// `a+(b+c) = a+b+c`
/// `a*(b*c) = a*b*c`
///
/// Only one level of nesting is removed per call.
pub fn flatten(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let Some((op, terms)) = AssocOp::of(expr) else { return Ok(None) };
    let is_nested = |child: &Expr| AssocOp::of(child).is_some_and(|(child_op, _)| child_op == op);
    if !terms.entries().iter().any(|(child, _)| is_nested(child)) {
        return Ok(None);
    }

    let mut flattened = Terms::new();
    for (child, count) in terms.entries() {
        match AssocOp::of(child) {
            Some((child_op, grandchildren)) if child_op == op => {
                for (grandchild, inner_count) in grandchildren.entries() {
                    flattened.push_n(grandchild.clone(), count * inner_count);
                }
            },
            _ => flattened.push_n(child.clone(), *count),
        }
    }

    step_collector.push(Step::Flatten);
    Ok(Some(op.build(flattened)))
}

/// `a+0 = a`
/// `a*1 = a`
///
/// If every child is the identity, the result is the identity itself.
pub fn remove_identity(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let Some((op, terms)) = AssocOp::of(expr) else { return Ok(None) };
    let identity = op.identity();
    if !terms.entries().iter().any(|(child, _)| child.as_integer() == Some(&identity)) {
        return Ok(None);
    }

    let remaining = terms.entries()
        .iter()
        .filter(|(child, _)| child.as_integer() != Some(&identity))
        .cloned()
        .collect::<Terms>();

    step_collector.push(Step::RemoveIdentity);
    if remaining.is_empty() {
        Ok(Some(Expr::Constant(identity)))
    } else {
        Ok(Some(op.build(remaining)))
    }
}

/// `a*0 = 0`
///
/// Does not fire next to a constant fraction with a zero denominator, so that folding the
/// constants reports the division by zero.
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let Expr::Multiply(factors) = expr else { return Ok(None) };
    if !factors.entries().iter().any(|(factor, _)| factor.is_int(0)) {
        return Ok(None);
    }
    let divides_by_zero = |(factor, _): &(Expr, usize)| {
        factor.as_rational().is_some_and(|(_, denominator)| denominator.is_zero())
    };
    if factors.entries().iter().any(divides_by_zero) {
        return Ok(None);
    }

    step_collector.push(Step::MultiplyZero);
    Ok(Some(Expr::int(0)))
}

/// `a+a = 2*a`
/// `a*a = a^2`
///
/// Constant-like children are left alone, since [`fold_constants`] combines them.
pub fn merge_like(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let Some((op, terms)) = AssocOp::of(expr) else { return Ok(None) };
    let is_mergeable = |(child, count): &(Expr, usize)| *count > 1 && !child.is_constant_like();
    if !terms.entries().iter().any(is_mergeable) {
        return Ok(None);
    }

    let mut merged = Terms::new();
    for entry in terms.entries() {
        let (child, count) = entry;
        if is_mergeable(entry) {
            merged.push(op.merge(child.clone(), *count));
        } else {
            merged.push_n(child.clone(), *count);
        }
    }

    step_collector.push(Step::MergeLike);
    Ok(Some(op.build(merged)))
}

/// `1+x+2 = 3+x`
/// `x*2*3 = x*6`
///
/// Applies when at least two children are constant-like. The constant-like children are folded
/// from left to right into one rational, which takes the place of the first of them; every other
/// child is simplified where it stands.
pub fn fold_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let Some((op, terms)) = AssocOp::of(expr) else { return Ok(None) };
    if terms.iter().filter(|child| child.is_constant_like()).count() < 2 {
        return Ok(None);
    }
    step_collector.push(Step::FoldConstants);

    let mut accumulator: Option<(Integer, Integer)> = None;
    let mut position = 0;
    let mut others = Vec::new();
    for (child, count) in terms.entries() {
        match child.as_rational() {
            Some(value) => {
                if accumulator.is_none() {
                    position = others.len();
                }
                for _ in 0..*count {
                    accumulator = Some(match accumulator.take() {
                        Some(acc) => op.fold(acc, value.clone()),
                        None => value.clone(),
                    });
                }
            },
            None => others.push((simplify_with(child, step_collector)?, *count)),
        }
    }

    // at least two constant-like children exist, so the accumulator is always set here
    if let Some((numerator, denominator)) = accumulator {
        let folded = simplify_with(&Expr::frac(Expr::Constant(numerator), Expr::Constant(denominator)), step_collector)?;
        others.insert(position, (folded, 1));
    }
    Ok(Some(op.build(others.into_iter().collect())))
}

/// `2*(3/x) = (2*3)/x`
///
/// The first fraction among the factors whose parts are not both constants absorbs every other
/// factor into its numerator, in order.
pub fn absorb_into_fraction(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let Expr::Multiply(factors) = expr else { return Ok(None) };
    if factors.len() < 2 {
        return Ok(None);
    }
    let Some(fraction_idx) = factors.iter()
        .position(|factor| matches!(factor, Expr::Fraction(..)) && !factor.is_constant_like())
    else {
        return Ok(None);
    };

    let mut denominator = None;
    let numerator = factors.iter()
        .enumerate()
        .map(|(idx, factor)| match factor {
            Expr::Fraction(n, d) if idx == fraction_idx => {
                denominator = Some((**d).clone());
                (**n).clone()
            },
            _ => factor.clone(),
        })
        .collect::<Vec<_>>();
    let Some(denominator) = denominator else { return Ok(None) };

    step_collector.push(Step::AbsorbIntoFraction);
    Ok(Some(Expr::frac(Expr::multiply(numerator), denominator)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::symbolic::simplify::{error::DivisionByZero, simplify, simplify_with_steps};
    use super::*;

    fn x() -> Expr {
        Expr::var("x")
    }

    #[test]
    fn singleton() {
        assert_eq!(simplify(&Expr::plus([x()])).unwrap(), x());
        assert_eq!(simplify(&Expr::multiply([Expr::int(4)])).unwrap(), Expr::int(4));
    }

    #[test]
    fn flatten_one_level() {
        let expr = Expr::plus([
            Expr::plus([x(), Expr::plus([Expr::var("y"), Expr::var("z")])]),
            Expr::int(1),
        ]);
        assert_eq!(
            simplify(&expr).unwrap(),
            Expr::plus([x(), Expr::plus([Expr::var("y"), Expr::var("z")]), Expr::int(1)]),
        );
    }

    #[test]
    fn flatten_keeps_multiplicity() {
        let inner = Expr::multiply([x(), Expr::var("y")]);
        let expr = Expr::multiply([inner.clone(), inner]);
        let Expr::Multiply(factors) = simplify(&expr).unwrap() else {
            panic!("expected a product");
        };
        assert_eq!(factors.entries(), &[(x(), 2), (Expr::var("y"), 2)]);
    }

    #[test]
    fn identity_removal() {
        assert_eq!(
            simplify(&Expr::plus([Expr::int(0), x(), Expr::int(0)])).unwrap(),
            Expr::plus([x()]),
        );
        assert_eq!(simplify(&Expr::multiply([x(), Expr::int(1)])).unwrap(), Expr::multiply([x()]));
    }

    #[test]
    fn identity_removal_to_empty() {
        assert_eq!(simplify(&Expr::plus([Expr::int(0), Expr::int(0)])).unwrap(), Expr::int(0));
        assert_eq!(simplify(&Expr::multiply([Expr::int(1), Expr::int(1)])).unwrap(), Expr::int(1));
    }

    #[test]
    fn zero_factor() {
        let expr = Expr::multiply([x(), Expr::int(0), Expr::var("y")]);
        assert_eq!(simplify(&expr).unwrap(), Expr::int(0));
    }

    #[test]
    fn zero_factor_beside_zero_denominator() {
        let expr = Expr::multiply([Expr::int(0), Expr::frac(Expr::int(1), Expr::int(0))]);
        let err = simplify(&expr).unwrap_err();
        assert!(err.is::<DivisionByZero>());
    }

    #[test]
    fn merge() {
        let sum = Expr::plus([x(), Expr::int(3), x()]);
        assert_eq!(
            simplify(&sum).unwrap(),
            Expr::plus([Expr::multiply([Expr::int(2), x()]), Expr::int(3)]),
        );

        let product = Expr::multiply([x(), Expr::int(3), x()]);
        assert_eq!(
            simplify(&product).unwrap(),
            Expr::multiply([Expr::pow(x(), Expr::int(2)), Expr::int(3)]),
        );
    }

    #[test]
    fn merge_leaves_constants_to_folding() {
        let (simplified, steps) = simplify_with_steps(&Expr::plus([Expr::int(1), Expr::int(1)])).unwrap();
        assert_eq!(simplified, Expr::plus([Expr::int(2)]));
        assert_eq!(steps, vec![Step::FoldConstants, Step::UnitDenominator]);
    }

    #[test]
    fn fold_at_first_constant() {
        let expr = Expr::plus([x(), Expr::int(1), Expr::int(2)]);
        let Expr::Plus(terms) = simplify(&expr).unwrap() else {
            panic!("expected a sum");
        };
        assert_eq!(terms.entries(), &[(x(), 1), (Expr::int(3), 1)]);

        let expr = Expr::multiply([Expr::int(2), x(), Expr::int(3)]);
        let Expr::Multiply(factors) = simplify(&expr).unwrap() else {
            panic!("expected a product");
        };
        assert_eq!(factors.entries(), &[(Expr::int(6), 1), (x(), 1)]);
    }

    #[test]
    fn fold_rationals() {
        let expr = Expr::plus([Expr::int(2), Expr::frac(Expr::int(1), Expr::int(3))]);
        assert_eq!(simplify(&expr).unwrap(), Expr::plus([Expr::frac(Expr::int(7), Expr::int(3))]));

        let expr = Expr::multiply([
            Expr::frac(Expr::int(2), Expr::int(3)),
            Expr::frac(Expr::int(3), Expr::int(4)),
        ]);
        assert_eq!(simplify(&expr).unwrap(), Expr::multiply([Expr::frac(Expr::int(1), Expr::int(2))]));
    }

    #[test]
    fn fold_simplifies_other_children() {
        let expr = Expr::plus([
            Expr::int(1),
            Expr::bracket(x()),
            Expr::int(2),
        ]);
        assert_eq!(simplify(&expr).unwrap(), Expr::plus([Expr::int(3), x()]));
    }

    #[test]
    fn absorb() {
        let expr = Expr::multiply([Expr::int(2), Expr::frac(Expr::int(3), x())]);
        assert_eq!(
            simplify(&expr).unwrap(),
            Expr::frac(Expr::multiply([Expr::int(2), Expr::int(3)]), x()),
        );
    }

    #[test]
    fn constant_fraction_is_not_absorbed() {
        let expr = Expr::multiply([x(), Expr::frac(Expr::int(1), Expr::int(3))]);
        assert_eq!(simplify(&expr).unwrap(), expr);
    }
}

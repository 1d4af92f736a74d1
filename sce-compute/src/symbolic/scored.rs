//! An alternative engine that searches for the smallest rewrite.
//!
//! [`simplify`](super::simplify()) tries rules in a fixed order and applies the first match at
//! each node. This engine instead lists every [`Move`] that applies anywhere in the tree, scores
//! each resulting tree by [`Expr::size`], and keeps the smallest one, provided it is strictly
//! smaller than the current tree. Because every accepted move shrinks the tree, [`minimize`]
//! always terminates.
//!
//! A move that keeps the size the same is never taken. For example, `x+x` and `2*x` have the same
//! size, so this engine leaves `x+x` alone where [`solve`](super::solve()) would merge it. The
//! same goes for reducing `6/8` to `3/4`.

use super::{
    expr::{Expr, Terms},
    simplify::{
        error::Error,
        rules::{assoc, bracket, first_match, fraction, imaginary, power},
    },
};
use tracing::trace;

/// A local rewrite at a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Removes a bracket around an atom or a fraction.
    UnwrapBracket,

    /// Replaces a sum or product of one child with that child.
    CollapseSingleton,

    /// Splices nested sums or products into their parent.
    Flatten,

    /// Removes `0` from a sum or `1` from a product.
    RemoveIdentity,

    /// Replaces a product containing `0` with `0`.
    MultiplyZero,

    /// Merges repeated children of a sum or product.
    MergeLike,

    /// Folds the constant-like children of a sum or product together.
    FoldConstants,

    /// Moves the factors of a product into the numerator of a fraction among them.
    AbsorbIntoFraction,

    /// Replaces `a/1` with `a`.
    UnitDenominator,

    /// Combines a fraction nested inside a fraction.
    NestedFraction,

    /// Reduces a fraction of two constants to lowest terms.
    ReduceFraction,

    /// Applies `a^0 = 1`, `a^1 = a` or `1^a = 1`.
    PowerIdentity,

    /// Folds a constant raised to a constant.
    FoldPower,

    /// Distributes an exponent over a fraction of two constants.
    DistributePower,

    /// Reduces a power of the imaginary unit.
    ImaginaryCycle,
}

impl Move {
    /// Every move, in the order they are tried at each node.
    pub const ALL: [Self; 15] = [
        Self::UnwrapBracket,
        Self::CollapseSingleton,
        Self::Flatten,
        Self::RemoveIdentity,
        Self::MultiplyZero,
        Self::MergeLike,
        Self::FoldConstants,
        Self::AbsorbIntoFraction,
        Self::UnitDenominator,
        Self::NestedFraction,
        Self::ReduceFraction,
        Self::PowerIdentity,
        Self::FoldPower,
        Self::DistributePower,
        Self::ImaginaryCycle,
    ];

    /// Applies the move at the root of the expression, returning the rewritten node if the move
    /// applies.
    pub fn apply(self, expr: &Expr) -> Result<Option<Expr>, Error> {
        let sc = &mut ();
        match self {
            Self::UnwrapBracket => first_match(expr, sc, bracket::RULES),
            Self::CollapseSingleton => assoc::collapse_singleton(expr, sc),
            Self::Flatten => assoc::flatten(expr, sc),
            Self::RemoveIdentity => assoc::remove_identity(expr, sc),
            Self::MultiplyZero => assoc::multiply_zero(expr, sc),
            Self::MergeLike => assoc::merge_like(expr, sc),
            Self::FoldConstants => assoc::fold_constants(expr, sc),
            Self::AbsorbIntoFraction => assoc::absorb_into_fraction(expr, sc),
            Self::UnitDenominator => fraction::unit_denominator(expr, sc),
            Self::NestedFraction => first_match(expr, sc, &[
                fraction::nested_numerator,
                fraction::nested_denominator,
                fraction::nested_both,
            ]),
            Self::ReduceFraction => fraction::reduce(expr, sc),
            Self::PowerIdentity => first_match(expr, sc, &[
                power::power_zero,
                power::power_one,
                power::power_one_left,
            ]),
            Self::FoldPower => power::fold_power(expr, sc),
            Self::DistributePower => power::distribute_power(expr, sc),
            Self::ImaginaryCycle => imaginary::imaginary_cycle(expr, sc),
        }
    }
}

/// A move that applies somewhere in a tree, and the whole tree after applying it.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The child indices leading from the root to the node the move applies to. The children of a
    /// sum or product are indexed by distinct child.
    pub path: Vec<usize>,

    /// The move.
    pub mv: Move,

    /// The whole tree with the move applied.
    pub result: Expr,
}

/// Returns the direct children of the expression, with the children of a sum or product listed
/// once per distinct child.
fn children(expr: &Expr) -> Vec<&Expr> {
    match expr {
        Expr::Constant(_) | Expr::Variable(_) => Vec::new(),
        Expr::Bracket(inner) => vec![inner],
        Expr::Fraction(lhs, rhs) | Expr::Power(lhs, rhs) | Expr::Equation(lhs, rhs) => vec![lhs, rhs],
        Expr::Plus(terms) | Expr::Multiply(terms) => terms.entries().iter().map(|(child, _)| child).collect(),
    }
}

/// Returns the expression with the node at `path` replaced.
fn replace_at(expr: &Expr, path: &[usize], replacement: Expr) -> Expr {
    let Some((&idx, rest)) = path.split_first() else {
        return replacement;
    };

    let pair = |lhs: &Expr, rhs: &Expr, replacement: Expr| {
        if idx == 0 {
            (replace_at(lhs, rest, replacement), rhs.clone())
        } else {
            (lhs.clone(), replace_at(rhs, rest, replacement))
        }
    };
    let terms = |terms: &Terms, replacement: Expr| {
        let mut replacement = Some(replacement);
        let mut replaced = Terms::new();
        for (i, (child, count)) in terms.entries().iter().enumerate() {
            let taken = if i == idx { replacement.take() } else { None };
            let child = match taken {
                Some(replacement) => replace_at(child, rest, replacement),
                None => child.clone(),
            };
            replaced.push_n(child, *count);
        }
        replaced
    };

    match expr {
        Expr::Constant(_) | Expr::Variable(_) => expr.clone(),
        Expr::Bracket(inner) => Expr::bracket(replace_at(inner, rest, replacement)),
        Expr::Fraction(lhs, rhs) => {
            let (lhs, rhs) = pair(lhs, rhs, replacement);
            Expr::frac(lhs, rhs)
        },
        Expr::Power(lhs, rhs) => {
            let (lhs, rhs) = pair(lhs, rhs, replacement);
            Expr::pow(lhs, rhs)
        },
        Expr::Equation(lhs, rhs) => {
            let (lhs, rhs) = pair(lhs, rhs, replacement);
            Expr::equation(lhs, rhs)
        },
        Expr::Plus(children) => Expr::Plus(terms(children, replacement)),
        Expr::Multiply(children) => Expr::Multiply(terms(children, replacement)),
    }
}

/// Lists every move that applies anywhere in the tree, visiting nodes in pre-order.
pub fn candidates(expr: &Expr) -> Result<Vec<Candidate>, Error> {
    let mut candidates = Vec::new();
    let mut stack = vec![(expr, Vec::new())];
    while let Some((node, path)) = stack.pop() {
        for mv in Move::ALL {
            if let Some(rewritten) = mv.apply(node)? {
                candidates.push(Candidate {
                    path: path.clone(),
                    mv,
                    result: replace_at(expr, &path, rewritten),
                });
            }
        }

        for (idx, child) in children(node).into_iter().enumerate().rev() {
            let mut child_path = path.clone();
            child_path.push(idx);
            stack.push((child, child_path));
        }
    }
    Ok(candidates)
}

/// Lists every move that applies anywhere in the tree, with the path to the node it applies to.
pub fn moves(expr: &Expr) -> Result<Vec<(Vec<usize>, Move)>, Error> {
    Ok(candidates(expr)?
        .into_iter()
        .map(|candidate| (candidate.path, candidate.mv))
        .collect())
}

/// Applies the move that results in the smallest tree, if that tree is strictly smaller than the
/// input. Otherwise, returns the input unchanged. Ties go to the move found first.
pub fn step(expr: &Expr) -> Result<Expr, Error> {
    let size = expr.size();
    let best = candidates(expr)?
        .into_iter()
        .map(|candidate| (candidate.result.size(), candidate))
        .filter(|(candidate_size, _)| *candidate_size < size)
        .min_by_key(|(candidate_size, _)| *candidate_size);

    Ok(match best {
        Some((new_size, candidate)) => {
            trace!(mv = ?candidate.mv, path = ?candidate.path, size, new_size, "applied move");
            candidate.result
        },
        None => expr.clone(),
    })
}

/// Applies [`step`] until the tree stops shrinking.
pub fn minimize(expr: &Expr) -> Result<Expr, Error> {
    let mut current = expr.clone();
    loop {
        let next = step(&current)?;
        if next == current {
            return Ok(current);
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn frac(n: i32, d: i32) -> Expr {
        Expr::frac(Expr::int(n), Expr::int(d))
    }

    #[test]
    fn lists_moves_with_paths() {
        let expr = Expr::plus([Expr::var("x"), Expr::int(0), Expr::bracket(Expr::var("y"))]);
        assert_eq!(
            moves(&expr).unwrap(),
            vec![(vec![], Move::RemoveIdentity), (vec![2], Move::UnwrapBracket)],
        );
    }

    #[test]
    fn step_picks_smallest() {
        // removing the bracket saves one node; folding the product saves two
        let expr = Expr::plus([
            Expr::bracket(Expr::var("y")),
            Expr::multiply([Expr::int(3), Expr::int(4)]),
        ]);
        assert_eq!(
            step(&expr).unwrap(),
            Expr::plus([
                Expr::bracket(Expr::var("y")),
                Expr::multiply([Expr::int(12)]),
            ]),
        );
    }

    #[test]
    fn step_keeps_canonical_tree() {
        let expr = Expr::plus([Expr::var("x"), Expr::int(1)]);
        assert_eq!(step(&expr).unwrap(), expr);
    }

    #[test]
    fn minimize_constants() {
        // 2+3*4
        let expr = Expr::plus([Expr::int(2), Expr::multiply([Expr::int(3), Expr::int(4)])]);
        assert_eq!(minimize(&expr).unwrap(), Expr::int(14));

        // (2/3)^3
        let expr = Expr::pow(Expr::bracket(frac(2, 3)), Expr::int(3));
        assert_eq!(minimize(&expr).unwrap(), frac(8, 27));
    }

    #[test]
    fn minimize_does_not_grow() {
        let expr = Expr::plus([Expr::var("x"), Expr::var("x")]);
        assert_eq!(minimize(&expr).unwrap(), expr);
        assert_eq!(minimize(&frac(6, 8)).unwrap(), frac(6, 8));
    }
}

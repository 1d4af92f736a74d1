//! The fixed-point driver.
//!
//! [`simplify`] only rewrites one layer of an expression. The driver feeds each result back into
//! [`simplify`] until the output is structurally equal to its input, and returns that output as
//! the canonical form.

use super::{
    expr::Expr,
    simplify::{error::{Error, NoFixedPoint}, simplify_with, step::Step},
    step_collector::StepCollector,
};
use tracing::{debug, trace, warn};

/// The number of iterations after which [`solve`] gives up.
pub const MAX_ITERATIONS: usize = 1024;

/// Simplifies the expression until it stops changing.
pub fn solve(expr: &Expr) -> Result<Expr, Error> {
    solve_with(expr, &mut (), MAX_ITERATIONS)
}

/// Simplifies the expression until it stops changing, returning every intermediate form in
/// order. The last intermediate form, if any, is the result.
pub fn solve_with_steps(expr: &Expr) -> Result<(Expr, Vec<Expr>), Error> {
    let mut steps = Vec::new();
    let result = solve_with(expr, &mut steps, MAX_ITERATIONS)?;
    Ok((result, steps))
}

/// Simplifies the expression until it stops changing, reporting every intermediate form to the
/// given [`StepCollector`].
///
/// Returns [`NoFixedPoint`] if the expression still changes after `max_iterations` calls to
/// [`simplify`](super::simplify()).
pub fn solve_with(
    expr: &Expr,
    step_collector: &mut dyn StepCollector<Expr>,
    max_iterations: usize,
) -> Result<Expr, Error> {
    let mut current = expr.clone();
    for iteration in 1..=max_iterations {
        let mut rules: Vec<Step> = Vec::new();
        let next = simplify_with(&current, &mut rules)?;
        if next == current {
            debug!(iterations = iteration, result = %current, "reached fixed point");
            return Ok(current);
        }

        trace!(iteration, ?rules, expr = %next, "simplified");
        step_collector.push(next.clone());
        current = next;
    }

    warn!(max_iterations, last = %current, "no fixed point");
    Err(Error::new(Vec::new(), NoFixedPoint { iterations: max_iterations }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn collects_each_intermediate_form() {
        // (2+3)*4
        let expr = Expr::multiply([
            Expr::bracket(Expr::plus([Expr::int(2), Expr::int(3)])),
            Expr::int(4),
        ]);
        let (result, steps) = solve_with_steps(&expr).unwrap();
        assert_eq!(result, Expr::int(20));
        assert_eq!(steps.last(), Some(&Expr::int(20)));
        assert_eq!(steps.first(), Some(&Expr::multiply([
            Expr::bracket(Expr::plus([Expr::int(5)])),
            Expr::int(4),
        ])));
    }

    #[test]
    fn fixed_point_has_no_steps() {
        let expr = Expr::plus([Expr::var("x"), Expr::int(1)]);
        let (result, steps) = solve_with_steps(&expr).unwrap();
        assert_eq!(result, expr);
        assert!(steps.is_empty());
    }

    #[test]
    fn iteration_cap() {
        let expr = Expr::plus([Expr::plus([Expr::plus([Expr::var("x")])])]);
        let err = solve_with(&expr, &mut (), 1).unwrap_err();
        assert_eq!(err.downcast_ref::<NoFixedPoint>(), Some(&NoFixedPoint { iterations: 1 }));
    }

    #[test]
    fn errors_propagate() {
        let expr = Expr::plus([Expr::var("x"), Expr::frac(Expr::int(1), Expr::int(0))]);
        assert!(solve(&expr).is_err());
    }
}

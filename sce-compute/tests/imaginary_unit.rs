//! Runs in its own process, so the imaginary unit can be renamed before anything reads it.

use pretty_assertions::assert_eq;
use sce_compute::{config, symbolic::{solve, Expr}};
use sce_parser::parser::Parser;

fn solve_str(input: &str) -> Expr {
    solve(&Expr::from(Parser::new(input).parse().unwrap())).unwrap()
}

#[test]
fn renamed_imaginary_unit() {
    config::set_imaginary_unit("j").unwrap();
    assert_eq!(config::imaginary_unit(), "j");

    assert_eq!(solve_str("j^2"), Expr::int(-1));
    assert_eq!(solve_str("j*j"), Expr::int(-1));
    assert_eq!(solve_str("j^3"), Expr::multiply([Expr::int(-1), Expr::var("j")]));

    // `i` is an ordinary variable now
    assert_eq!(solve_str("i^2"), Expr::pow(Expr::var("i"), Expr::int(2)));

    assert!(config::set_imaginary_unit("k").is_err());
}

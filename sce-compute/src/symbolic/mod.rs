//! Symbolic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions in this module are trees of [`Expr`] nodes. An [`Expr`] is built from the
//! [`sce_parser::parser::ast::Expr`] produced by [`sce_parser`] using the [`From`] trait. The
//! conversion drops spans and rewrites subtraction and negation in terms of addition and
//! multiplication by `-1`, but otherwise keeps the shape of the input, brackets included.
//!
//! ```
//! use sce_compute::symbolic::Expr;
//! use sce_parser::parser::Parser;
//!
//! let ast = Parser::new("x - 2").parse().unwrap();
//! assert_eq!(Expr::from(ast), Expr::plus([
//!     Expr::var("x"),
//!     Expr::multiply([Expr::int(-1), Expr::int(2)]),
//! ]));
//! ```
//!
//! # Simplification
//!
//! [`simplify()`] applies one layer of rewrite rules, and [`solve()`] repeats it until the
//! expression reaches a fixed point. The fixed point is the canonical form of the expression: it
//! has its constants folded, its fractions in lowest terms, its sums and products flattened and
//! its repeated children merged.
//!
//! ```
//! use sce_compute::symbolic::{solve, Expr};
//! use sce_parser::parser::Parser;
//!
//! let ast = Parser::new("x + 3 + x").parse().unwrap();
//! assert_eq!(solve(&Expr::from(ast)).unwrap(), Expr::plus([
//!     Expr::multiply([Expr::int(2), Expr::var("x")]),
//!     Expr::int(3),
//! ]));
//! ```
//!
//! The [`scored`] module contains a second engine that chooses among all applicable rewrites by
//! the size of the resulting tree.

pub mod expr;
pub mod scored;
pub mod simplify;
pub mod solve;
pub mod step_collector;

pub use expr::{Expr, Terms};
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use solve::{solve, solve_with, solve_with_steps};
pub use step_collector::StepCollector;

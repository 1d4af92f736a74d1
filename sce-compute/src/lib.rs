//! The core of the symbolic calculus engine.
//!
//! An expression tree produced by [`sce_parser`] is converted into a [`symbolic::Expr`], then
//! rewritten one layer at a time by [`symbolic::simplify()`]. The fixed-point driver,
//! [`symbolic::solve()`], repeats that until the tree stops changing; the tree it settles on is
//! the canonical form of the input.
//!
//! ```
//! use sce_compute::symbolic::{solve, Expr};
//! use sce_parser::parser::Parser;
//!
//! let ast = Parser::new("1/2 + 1/3").parse().unwrap();
//! let result = solve(&Expr::from(ast)).unwrap();
//! assert_eq!(result, Expr::frac(Expr::int(5), Expr::int(6)));
//! assert_eq!(result.to_string(), "5/6");
//! ```

pub mod config;
pub mod fmt;
pub mod primitive;
pub mod symbolic;

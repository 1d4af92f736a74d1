//! Scanner and tree builder for the symbolic calculus engine.
//!
//! Source text is first split into [`tokenizer::Token`]s, which the [`parser::Parser`] reduces
//! into a single [`parser::ast::Expr`]. The resulting tree keeps the span of every node, so that
//! errors can point back into the source.

pub mod parser;
pub mod tokenizer;

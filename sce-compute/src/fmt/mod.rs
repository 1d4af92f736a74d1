//! Renderers for expressions besides the plain-text [`Display`](std::fmt::Display) form.

pub mod decimal;
pub mod latex;

pub use decimal::decimal;
pub use latex::{Latex, LatexFormatter};

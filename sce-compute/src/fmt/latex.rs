use crate::symbolic::Expr;
use std::fmt::{Display, Formatter, Result};

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// Formats the expression, wrapping it in `\left(` and `\right)` if `paren` is true.
fn fmt_child(f: &mut Formatter, expr: &Expr, paren: bool) -> Result {
    if paren {
        write!(f, "\\left(")?;
        expr.fmt_latex(f)?;
        write!(f, "\\right)")
    } else {
        expr.fmt_latex(f)
    }
}

impl Latex for Expr {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Constant(n) => write!(f, "{}", n),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Bracket(inner) => fmt_child(f, inner, true),
            Self::Fraction(numerator, denominator) => {
                write!(f, "\\frac{{")?;
                numerator.fmt_latex(f)?;
                write!(f, "}}{{")?;
                denominator.fmt_latex(f)?;
                write!(f, "}}")
            },
            Self::Power(base, exponent) => {
                fmt_child(f, base, !base.is_atom() || base.is_negative_constant())?;
                write!(f, "^{{")?;
                exponent.fmt_latex(f)?;
                write!(f, "}}")
            },
            Self::Plus(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        write!(f, "+")?;
                    }
                    term.fmt_latex(f)?;
                }
                Ok(())
            },
            Self::Multiply(factors) => {
                for (i, factor) in factors.iter().enumerate() {
                    if i > 0 {
                        write!(f, " \\cdot ")?;
                    }
                    fmt_child(f, factor, matches!(factor, Self::Plus(_) | Self::Equation(..)))?;
                }
                Ok(())
            },
            Self::Equation(lhs, rhs) => {
                lhs.fmt_latex(f)?;
                write!(f, " = ")?;
                rhs.fmt_latex(f)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn fraction() {
        let expr = Expr::frac(Expr::int(-2), Expr::int(3));
        assert_eq!(expr.as_display().to_string(), "\\frac{-2}{3}");
    }

    #[test]
    fn power_of_sum() {
        let expr = Expr::pow(Expr::plus([Expr::var("x"), Expr::int(1)]), Expr::int(2));
        assert_eq!(expr.as_display().to_string(), "\\left(x+1\\right)^{2}");
    }

    #[test]
    fn power_of_negative_constant() {
        let expr = Expr::pow(Expr::int(-2), Expr::frac(Expr::int(1), Expr::int(2)));
        assert_eq!(expr.as_display().to_string(), "\\left(-2\\right)^{\\frac{1}{2}}");
    }

    #[test]
    fn product() {
        let expr = Expr::multiply([
            Expr::int(2),
            Expr::plus([Expr::var("x"), Expr::int(1)]),
            Expr::bracket(Expr::var("y")),
        ]);
        assert_eq!(
            expr.as_display().to_string(),
            "2 \\cdot \\left(x+1\\right) \\cdot \\left(y\\right)",
        );
    }

    #[test]
    fn equation() {
        let expr = Expr::equation(Expr::var("x"), Expr::frac(Expr::int(1), Expr::var("y")));
        assert_eq!(expr.as_display().to_string(), "x = \\frac{1}{y}");
    }
}

use super::Expr;

/// Post-order traversal of an expression tree: children left to right, then their parent.
///
/// A child of [`Expr::Plus`] or [`Expr::Multiply`] with multiplicity `k` is visited `k` times, so
/// the number of items is the size of the tree as written out in full.
///
/// Created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    /// Pending nodes, each flagged with whether its children are already on the stack.
    stack: Vec<(&'a Expr, bool)>,
}

impl<'a> ExprIter<'a> {
    pub fn new(expr: &'a Expr) -> Self {
        Self { stack: vec![(expr, false)] }
    }

    /// Pushes the children of `expr` so that the leftmost one is popped first.
    fn expand(&mut self, expr: &'a Expr) {
        match expr {
            Expr::Constant(_) | Expr::Variable(_) => (),
            Expr::Bracket(inner) => self.stack.push((inner, false)),
            Expr::Plus(terms) | Expr::Multiply(terms) => {
                self.stack.extend(terms.iter().rev().map(|child| (child, false)));
            },
            Expr::Fraction(lhs, rhs) | Expr::Power(lhs, rhs) | Expr::Equation(lhs, rhs) => {
                self.stack.push((rhs, false));
                self.stack.push((lhs, false));
            },
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (expr, expanded) = self.stack.pop()?;
            if expanded {
                return Some(expr);
            }
            self.stack.push((expr, true));
            self.expand(expr);
        }
    }
}

use super::Expr;

/// The children of a [`Expr::Plus`] or [`Expr::Multiply`]: a multiset that remembers the order in
/// which distinct children were first inserted.
///
/// Inserting a child that is structurally equal to one already present increments that child's
/// multiplicity instead of adding a new slot, so `x + 3 + x` holds `x` twice in the first slot and
/// `3` once in the second.
///
/// Two [`Terms`] are equal if they map the same children to the same multiplicities, in any
/// order.
#[derive(Debug, Clone, Default, Eq)]
pub struct Terms {
    entries: Vec<(Expr, usize)>,
}

impl Terms {
    /// Creates an empty multiset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one occurrence of the given expression.
    pub fn push(&mut self, expr: Expr) {
        self.push_n(expr, 1);
    }

    /// Inserts `count` occurrences of the given expression.
    pub fn push_n(&mut self, expr: Expr, count: usize) {
        if count == 0 {
            return;
        }
        match self.entries.iter_mut().find(|(existing, _)| *existing == expr) {
            Some((_, multiplicity)) => *multiplicity += count,
            None => self.entries.push((expr, count)),
        }
    }

    /// Returns the number of children, counting every occurrence.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Returns true if there are no children.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the distinct children with their multiplicities, in insertion order.
    pub fn entries(&self) -> &[(Expr, usize)] {
        &self.entries
    }

    /// Returns an iterator over the children in order, repeating each one as many times as it
    /// occurs.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Expr> + '_ {
        self.entries.iter().flat_map(|(expr, count)| (0..*count).map(move |_| expr))
    }
}

impl PartialEq for Terms {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|entry| other.entries.contains(entry))
    }
}

impl FromIterator<Expr> for Terms {
    fn from_iter<I: IntoIterator<Item = Expr>>(iter: I) -> Self {
        let mut terms = Self::new();
        terms.extend(iter);
        terms
    }
}

impl FromIterator<(Expr, usize)> for Terms {
    fn from_iter<I: IntoIterator<Item = (Expr, usize)>>(iter: I) -> Self {
        let mut terms = Self::new();
        for (expr, count) in iter {
            terms.push_n(expr, count);
        }
        terms
    }
}

impl Extend<Expr> for Terms {
    fn extend<I: IntoIterator<Item = Expr>>(&mut self, iter: I) {
        for expr in iter {
            self.push(expr);
        }
    }
}

impl IntoIterator for Terms {
    type Item = (Expr, usize);
    type IntoIter = std::vec::IntoIter<(Expr, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn merges_into_first_slot() {
        let terms = [Expr::var("x"), Expr::int(3), Expr::var("x")].into_iter().collect::<Terms>();
        assert_eq!(terms.entries(), &[(Expr::var("x"), 2), (Expr::int(3), 1)]);
        assert_eq!(terms.len(), 3);
        assert_eq!(
            terms.iter().cloned().collect::<Vec<_>>(),
            vec![Expr::var("x"), Expr::var("x"), Expr::int(3)],
        );
    }

    #[test]
    fn order_insensitive_equality() {
        let a = [Expr::var("x"), Expr::int(3), Expr::var("x")].into_iter().collect::<Terms>();
        let b = [Expr::int(3), Expr::var("x"), Expr::var("x")].into_iter().collect::<Terms>();
        let c = [Expr::int(3), Expr::int(3), Expr::var("x")].into_iter().collect::<Terms>();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

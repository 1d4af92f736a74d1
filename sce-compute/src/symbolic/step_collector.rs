/// Receives the steps taken by [`simplify_with`](super::simplify_with) or
/// [`solve_with`](super::solve_with), in the order they are taken.
pub trait StepCollector<S> {
    fn push(&mut self, step: S);
}

/// Discards every step.
impl<S> StepCollector<S> for () {
    fn push(&mut self, _: S) {}
}

/// Records every step.
impl<S> StepCollector<S> for Vec<S> {
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

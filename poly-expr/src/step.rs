//! Collection of the steps taken by the simplifier.

/// A type that collects the steps of an algorithm.
///
/// Implementations are provided for:
///
/// - `()`, which discards every step. Use this when the steps are not needed.
/// - [`Vec<S>`], which records every step in the order it was taken.
/// - [`usize`], which only counts the steps.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

impl<S> StepCollector<S> for usize {
    #[inline]
    fn push(&mut self, _: S) {
        *self += 1;
    }
}

//! Simplification rules for sums.

use crate::{expr::Expr, simplify::step::Step, step::StepCollector};
use super::record;

/// Applies all addition rules to the simplified operands of `left + right`.
///
/// In order:
///
/// - `0+a = a`
/// - `a+0 = a`
/// - `3+5 = 8`
///
/// Operands are never reordered, so `X + X` stays as it is.
pub fn all(left: Expr, right: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    if left.is_zero() {
        record(step_collector, Step::AddZero);
        return right;
    }

    if right.is_zero() {
        record(step_collector, Step::AddZero);
        return left;
    }

    match (left, right) {
        (Expr::Constant(left), Expr::Constant(right)) => {
            record(step_collector, Step::AddConstants);
            Expr::Constant(left + right)
        },
        (left, right) => Expr::sum(left, right),
    }
}

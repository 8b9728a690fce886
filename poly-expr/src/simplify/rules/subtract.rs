//! Simplification rules for differences.

use crate::{expr::Expr, simplify::step::Step, step::StepCollector};
use super::record;

/// Applies all subtraction rules to the simplified operands of `left - right`.
///
/// In order:
///
/// - `a-0 = a`
/// - `5-3 = 2`
///
/// There is no rule for a zero on the left: `0 - a` is kept as a difference rather than being
/// rewritten into a negation.
pub fn all(left: Expr, right: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    if right.is_zero() {
        record(step_collector, Step::SubtractZero);
        return left;
    }

    match (left, right) {
        (Expr::Constant(left), Expr::Constant(right)) => {
            record(step_collector, Step::SubtractConstants);
            Expr::Constant(left - right)
        },
        (left, right) => Expr::difference(left, right),
    }
}

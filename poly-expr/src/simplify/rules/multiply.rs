//! Simplification rules for products.

use crate::{expr::Expr, primitive::constant, simplify::step::Step, step::StepCollector};
use super::record;

/// `0*a = 0`
/// `a*0 = 0`
///
/// Checked before every other multiplication rule. Whatever the other operand is, it is
/// discarded.
fn multiply_zero(left: &Expr, right: &Expr) -> bool {
    left.is_zero() || right.is_zero()
}

/// Applies all multiplication rules to the simplified operands of `left * right`.
///
/// In order:
///
/// - `0*a = 0`, `a*0 = 0`
/// - `1*a = a`
/// - `a*1 = a`
/// - `3*5 = 15`
pub fn all(left: Expr, right: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    if multiply_zero(&left, &right) {
        record(step_collector, Step::MultiplyZero);
        return constant(0);
    }

    if left.is_one() {
        record(step_collector, Step::MultiplyOne);
        return right;
    }

    if right.is_one() {
        record(step_collector, Step::MultiplyOne);
        return left;
    }

    match (left, right) {
        (Expr::Constant(left), Expr::Constant(right)) => {
            record(step_collector, Step::MultiplyConstants);
            Expr::Constant(left * right)
        },
        (left, right) => Expr::product(left, right),
    }
}

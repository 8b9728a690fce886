//! Simplification rules for quotients.

use crate::{ctxt::Ctxt, error::DivisionByZero, expr::Expr, simplify::step::Step, step::StepCollector};
use super::record;

/// Applies all division rules to the simplified operands of `left / right`.
///
/// In order:
///
/// - `7/2 = 3`, rounded according to [`Ctxt::div_mode`]. If the divisor is zero, a
///   [`DivisionByZero`] error is returned immediately.
/// - `a/1 = a`, only if [`Ctxt::divide_by_one`] is set.
pub fn all(
    left: Expr,
    right: Expr,
    ctxt: &Ctxt,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, DivisionByZero> {
    match (left, right) {
        (Expr::Constant(left), Expr::Constant(right)) => {
            let quotient = ctxt.div_mode.divide(left, right)?;
            record(step_collector, Step::DivideConstants);
            Ok(Expr::Constant(quotient))
        },
        (left, right) if ctxt.divide_by_one && right.is_one() => {
            record(step_collector, Step::DivideOne);
            Ok(left)
        },
        (left, right) => Ok(Expr::quotient(left, right)),
    }
}

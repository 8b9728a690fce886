//! Error kinds produced while evaluating or simplifying expressions.

use ariadne::{Fmt, Report};
use crate::expr::{Expr, Side};
use poly_error::{report, Error, ErrorKind, EXPR};
use std::{any::Any, ops::Range};

/// The divisor of a quotient is zero.
///
/// Raised by evaluation when the right side of a [`Expr::Quotient`] evaluates to zero, and by
/// simplification when both sides of a [`Expr::Quotient`] fold to constants and the right one is
/// zero. The spans of the [`Error`] point at the dividend, the `/` operator and the divisor, in
/// that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionByZero;

impl ErrorKind for DivisionByZero {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn message(&self) -> String {
        "division by zero".to_string()
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        let help = format!(
            "only divide by expressions that cannot be zero, such as {}",
            "X * X + 1".fg(EXPR),
        );
        report(
            src_id,
            spans,
            self.message(),
            &["", "this division", "this divisor is zero"],
            Some(help.as_str()),
        )
    }
}

/// Creates an [`Error`] of the given kind spanning the operands and operator of `expr`.
pub(crate) fn at_operator(expr: &Expr, kind: impl ErrorKind + 'static) -> Error {
    let spans = expr.operand_spans()
        .map(Vec::from)
        .unwrap_or_default();
    Error::new(spans, kind)
}

/// Translates an error raised by the operand of `expr` on the given side, so that its spans are
/// relative to the rendering of `expr` instead of the operand.
pub(crate) fn lift(expr: &Expr, side: Side, err: Error) -> Error {
    match expr.operand_offset(side) {
        Some(offset) => err.shifted(offset),
        None => err,
    }
}

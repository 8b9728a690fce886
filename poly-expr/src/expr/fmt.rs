//! Rendering of expressions.
//!
//! Operators are padded with a single space on both sides, and parenthesized operands are padded
//! with a single space inside the parentheses, e.g. `( X + 1 ) * X`. Whether an operand is
//! parenthesized is decided by [`BinOp::parenthesize`].

use std::{fmt::{self, Display, Formatter}, ops::Range};
use super::{BinOp, Expr, Side};

/// The token used to render [`Expr::Variable`].
pub const VARIABLE: &str = "X";

/// Writes an operand of `op`, wrapping it in parentheses if needed.
fn fmt_operand(f: &mut Formatter<'_>, op: BinOp, operand: &Expr) -> fmt::Result {
    if op.parenthesize(operand) {
        write!(f, "( {} )", operand)
    } else {
        write!(f, "{}", operand)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable => write!(f, "{}", VARIABLE),
            Self::Constant(value) => write!(f, "{}", value),
            Self::Sum(left, right) => fmt_binary(f, BinOp::Add, left, right),
            Self::Product(left, right) => fmt_binary(f, BinOp::Mul, left, right),
            Self::Difference(left, right) => fmt_binary(f, BinOp::Sub, left, right),
            Self::Quotient(left, right) => fmt_binary(f, BinOp::Div, left, right),
        }
    }
}

fn fmt_binary(f: &mut Formatter<'_>, op: BinOp, left: &Expr, right: &Expr) -> fmt::Result {
    fmt_operand(f, op, left)?;
    write!(f, " {} ", op.symbol())?;
    fmt_operand(f, op, right)
}

impl Expr {
    /// Returns the regions of the left operand, the operator, and the right operand, in that
    /// order, within the rendering of this expression. The padding parentheses around an operand
    /// are not included in its region.
    ///
    /// Returns [`None`] if the expression is not a composite node.
    ///
    /// This renders both operands, so it should be kept off hot paths.
    pub fn operand_spans(&self) -> Option<[Range<usize>; 3]> {
        let (op, left, right) = self.as_binary()?;
        let padding = |operand: &Expr| if op.parenthesize(operand) { 2 } else { 0 };

        let left_start = padding(left);
        let left_span = left_start..left_start + left.to_string().len();

        // " op "
        let op_start = left_span.end + padding(left) + 1;
        let op_span = op_start..op_start + op.symbol().len();

        let right_start = op_span.end + 1 + padding(right);
        let right_span = right_start..right_start + right.to_string().len();

        Some([left_span, op_span, right_span])
    }

    /// Returns where the rendering of the operand on the given side begins within the rendering
    /// of this expression, or [`None`] if the expression is not a composite node.
    pub fn operand_offset(&self, side: Side) -> Option<usize> {
        let [left, _, right] = self.operand_spans()?;
        Some(match side {
            Side::Left => left.start,
            Side::Right => right.start,
        })
    }
}

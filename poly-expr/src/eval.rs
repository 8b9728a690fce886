//! Numeric evaluation of expressions.

use crate::{
    ctxt::Ctxt,
    error::{at_operator, lift},
    expr::{Expr, Side},
};
use poly_error::Error;
use rug::Integer;

/// Evaluates the expression for the given value of `X`, using the default context.
///
/// Fails with a [`DivisionByZero`](crate::error::DivisionByZero) error if the right side of any
/// quotient in the expression evaluates to zero.
pub fn evaluate(expr: &Expr, x: &Integer) -> Result<Integer, Error> {
    expr.eval(x)
}

impl Expr {
    /// Evaluates the expression for the given value of `X`, using the default context.
    pub fn eval(&self, x: &Integer) -> Result<Integer, Error> {
        self.eval_with(x, &Ctxt::default())
    }

    /// Evaluates the expression for the given value of `X`, using the given context.
    ///
    /// Both operands of every composite node are always evaluated, so a zero divisor is reported
    /// even if it is multiplied by zero.
    pub fn eval_with(&self, x: &Integer, ctxt: &Ctxt) -> Result<Integer, Error> {
        match self {
            Self::Variable => Ok(x.clone()),
            Self::Constant(value) => Ok(value.clone()),
            Self::Sum(left, right) => {
                let (left, right) = self.eval_operands(left, right, x, ctxt)?;
                Ok(left + right)
            },
            Self::Product(left, right) => {
                let (left, right) = self.eval_operands(left, right, x, ctxt)?;
                Ok(left * right)
            },
            Self::Difference(left, right) => {
                let (left, right) = self.eval_operands(left, right, x, ctxt)?;
                Ok(left - right)
            },
            Self::Quotient(left, right) => {
                let (left, right) = self.eval_operands(left, right, x, ctxt)?;
                ctxt.div_mode.divide(left, right)
                    .map_err(|kind| at_operator(self, kind))
            },
        }
    }

    /// Evaluates both operands of this composite node.
    fn eval_operands(
        &self,
        left: &Expr,
        right: &Expr,
        x: &Integer,
        ctxt: &Ctxt,
    ) -> Result<(Integer, Integer), Error> {
        let left = left.eval_with(x, ctxt).map_err(|err| lift(self, Side::Left, err))?;
        let right = right.eval_with(x, ctxt).map_err(|err| lift(self, Side::Right, err))?;
        Ok((left, right))
    }
}

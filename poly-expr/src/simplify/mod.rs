//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression into an
//! equivalent, reduced form. It works bottom-up in a single pass: both operands of a node are
//! simplified first, then the rules for that node (see [`rules`]) are applied to the simplified
//! operands, in priority order.
//!
//! The rewrites are limited to constant folding and the identities listed on [`Step`]. In
//! particular, like terms are not combined, so `X + X` stays as it is instead of becoming
//! `2 * X`.
//!
//! Because the operands are always simplified first, a quotient with a zero divisor is reported
//! even if it is multiplied by zero, as long as both of its sides fold to constants. A quotient
//! whose dividend does not fold, such as `X / 0`, is kept as it is and can then be discarded by
//! the `0*a = 0` rule.

pub mod rules;
pub mod step;

use crate::{
    ctxt::Ctxt,
    error::{at_operator, lift},
    expr::{Expr, Side},
    step::StepCollector,
};
use poly_error::Error;
use step::Step;

/// Base implementation of the simplification algorithm.
fn inner_simplify(
    expr: &Expr,
    ctxt: &Ctxt,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    match expr {
        Expr::Variable | Expr::Constant(_) => Ok(expr.clone()),
        Expr::Sum(left, right) => {
            let (left, right) = simplify_operands(expr, left, right, ctxt, step_collector)?;
            Ok(rules::add::all(left, right, step_collector))
        },
        Expr::Product(left, right) => {
            let (left, right) = simplify_operands(expr, left, right, ctxt, step_collector)?;
            Ok(rules::multiply::all(left, right, step_collector))
        },
        Expr::Difference(left, right) => {
            let (left, right) = simplify_operands(expr, left, right, ctxt, step_collector)?;
            Ok(rules::subtract::all(left, right, step_collector))
        },
        Expr::Quotient(left, right) => {
            let (left, right) = simplify_operands(expr, left, right, ctxt, step_collector)?;
            rules::divide::all(left, right, ctxt, step_collector)
                .map_err(|kind| at_operator(expr, kind))
        },
    }
}

/// Simplifies both operands of the composite node `expr`.
fn simplify_operands(
    expr: &Expr,
    left: &Expr,
    right: &Expr,
    ctxt: &Ctxt,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<(Expr, Expr), Error> {
    let left = inner_simplify(left, ctxt, step_collector)
        .map_err(|err| lift(expr, Side::Left, err))?;
    let right = inner_simplify(right, ctxt, step_collector)
        .map_err(|err| lift(expr, Side::Right, err))?;
    Ok((left, right))
}

/// Simplify the given expression, using the default context.
///
/// Fails with a [`DivisionByZero`](crate::error::DivisionByZero) error if a quotient whose sides
/// both fold to constants has a zero divisor.
pub fn simplify(expr: &Expr) -> Result<Expr, Error> {
    inner_simplify(expr, &Ctxt::default(), &mut ())
}

/// Simplify the given expression, using the given context.
pub fn simplify_with(expr: &Expr, ctxt: &Ctxt) -> Result<Expr, Error> {
    inner_simplify(expr, ctxt, &mut ())
}

/// Simplify the given expression, using the default context. The steps taken by the simplifier
/// will also be collected and returned, in the order they were taken. This is useful for
/// debugging, and also for displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps: Vec<Step> = Vec::new();
    let expr = inner_simplify(expr, &Ctxt::default(), &mut steps)?;
    Ok((expr, steps))
}

impl Expr {
    /// Simplify this expression, using the default context. See [`simplify`].
    pub fn simplify(&self) -> Result<Expr, Error> {
        simplify(self)
    }
}

//! Single-variable integer polynomial expressions.
//!
//! An expression is a tree of [`Expr`] nodes built directly by the caller. Three operations are
//! provided over it:
//!
//! - [`evaluate`] computes the integer value of the expression for a given value of `X`.
//! - [`simplify`] rewrites the expression into an equivalent, reduced form by folding constants
//!   and eliminating the identities `0 + a`, `a - 0`, `1 * a` and the annihilator `0 * a`.
//! - The [`Display`](std::fmt::Display) implementation of [`Expr`] renders the expression with
//!   only the parentheses needed to read it back unambiguously.
//!
//! ```
//! use poly_expr::{evaluate, simplify, Expr};
//! use rug::Integer;
//!
//! let expr = (Expr::variable() + Expr::constant(0)) * (Expr::constant(2) + Expr::constant(3));
//! assert_eq!(expr.to_string(), "( X + 0 ) * ( 2 + 3 )");
//!
//! let simplified = simplify(&expr).unwrap();
//! assert_eq!(simplified.to_string(), "X * 5");
//! assert_eq!(evaluate(&simplified, &Integer::from(4)).unwrap(), 20);
//! ```
//!
//! # Integers
//!
//! Constants and results are arbitrary-precision [`rug::Integer`]s, so sums, products and
//! differences never overflow. Integer division rounds toward negative infinity by default; see
//! [`ctxt::DivMode`] for the alternatives. The same [`ctxt::Ctxt`] must be used for evaluation and
//! simplification for constant folding to agree with evaluation, which is what the
//! `*_with` functions are for.
//!
//! # Errors
//!
//! The only failure is division by zero, reported as an [`poly_error::Error`] of kind
//! [`error::DivisionByZero`]. Its spans point into the rendering of the expression that was passed
//! in.

pub mod ctxt;
pub mod error;
pub mod eval;
pub mod expr;
pub mod primitive;
pub mod simplify;
pub mod step;

#[cfg(test)]
mod proptests;

pub use eval::evaluate;
pub use expr::{BinOp, Expr};
pub use simplify::simplify;

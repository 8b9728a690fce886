//! Functions to construct [`Integer`]s and constant expressions from various types.

use crate::expr::Expr;
use rug::Integer;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates an [`Expr::Constant`] with the given value.
pub fn constant<T>(n: T) -> Expr
where
    Integer: From<T>,
{
    Expr::Constant(int(n))
}

//! The expression tree.
//!
//! An [`Expr`] is a closed set of node variants: the variable `X`, an integer constant, and the
//! four binary operations. Every composite node owns its two children outright, so a tree can
//! never contain shared or cyclic structure.
//!
//! # Equality
//!
//! The [`PartialEq`] and [`Eq`] implementations for [`Expr`] compare **structure**, not meaning.
//! Two separately built trees with the same shape are equal, but `X + X` and `2 * X` are not,
//! even though they evaluate to the same value for every `X`.

mod fmt;

use rug::Integer;
use std::ops::{Add, Div, Mul, Sub};

pub use fmt::VARIABLE;

/// A single-variable integer polynomial expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// The free variable, rendered as `X`.
    Variable,

    /// A literal integer, such as `2` or `-144`.
    Constant(Integer),

    /// `left + right`.
    Sum(Box<Expr>, Box<Expr>),

    /// `left * right`.
    Product(Box<Expr>, Box<Expr>),

    /// `left - right`.
    Difference(Box<Expr>, Box<Expr>),

    /// `left / right`, using integer division.
    Quotient(Box<Expr>, Box<Expr>),
}

/// The operation performed by a composite [`Expr`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Mul,
    Sub,
    Div,
}

impl BinOp {
    /// Returns the symbol used to render the operation.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Mul => "*",
            Self::Sub => "-",
            Self::Div => "/",
        }
    }

    /// Returns true if the given operand of this operation must be wrapped in parentheses when
    /// rendered.
    ///
    /// Multiplication binds tighter than addition, so a [`Expr::Sum`] operand of a product is
    /// parenthesized. Subtraction and division are not associative, so any [`Expr::Sum`] or
    /// [`Expr::Difference`] operand on either side of them is parenthesized. Addition never
    /// parenthesizes its operands.
    pub fn parenthesize(&self, operand: &Expr) -> bool {
        match self {
            Self::Add => false,
            Self::Mul => matches!(operand, Expr::Sum(..)),
            Self::Sub | Self::Div => matches!(operand, Expr::Sum(..) | Expr::Difference(..)),
        }
    }
}

/// One of the two operands of a composite [`Expr`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Expr {
    /// Creates the free variable `X`.
    pub fn variable() -> Self {
        Self::Variable
    }

    /// Creates a constant with the given value.
    pub fn constant(value: impl Into<Integer>) -> Self {
        Self::Constant(value.into())
    }

    /// Creates the sum `left + right`.
    pub fn sum(left: Expr, right: Expr) -> Self {
        Self::Sum(Box::new(left), Box::new(right))
    }

    /// Creates the product `left * right`.
    pub fn product(left: Expr, right: Expr) -> Self {
        Self::Product(Box::new(left), Box::new(right))
    }

    /// Creates the difference `left - right`.
    pub fn difference(left: Expr, right: Expr) -> Self {
        Self::Difference(Box::new(left), Box::new(right))
    }

    /// Creates the quotient `left / right`.
    pub fn quotient(left: Expr, right: Expr) -> Self {
        Self::Quotient(Box::new(left), Box::new(right))
    }

    /// Creates a composite node performing `op` on the given operands.
    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        match op {
            BinOp::Add => Self::sum(left, right),
            BinOp::Mul => Self::product(left, right),
            BinOp::Sub => Self::difference(left, right),
            BinOp::Div => Self::quotient(left, right),
        }
    }

    /// If the expression is a composite node, returns its operation and both operands.
    pub fn as_binary(&self) -> Option<(BinOp, &Expr, &Expr)> {
        match self {
            Self::Variable | Self::Constant(_) => None,
            Self::Sum(left, right) => Some((BinOp::Add, left, right)),
            Self::Product(left, right) => Some((BinOp::Mul, left, right)),
            Self::Difference(left, right) => Some((BinOp::Sub, left, right)),
            Self::Quotient(left, right) => Some((BinOp::Div, left, right)),
        }
    }

    /// If the expression is a composite node, returns its operation.
    pub fn op(&self) -> Option<BinOp> {
        self.as_binary().map(|(op, _, _)| op)
    }

    /// If the expression is a composite node, returns the operand on the given side.
    pub fn operand(&self, side: Side) -> Option<&Expr> {
        self.as_binary().map(|(_, left, right)| match side {
            Side::Left => left,
            Side::Right => right,
        })
    }

    /// If the expression is a [`Expr::Constant`], returns a reference to the contained integer.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Constant(int) => Some(int),
            _ => None,
        }
    }

    /// If the expression is a [`Expr::Constant`], returns the contained integer.
    pub fn into_integer(self) -> Option<Integer> {
        match self {
            Self::Constant(int) => Some(int),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Expr::Constant`].
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    /// Returns true if the expression is the constant `0`.
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Constant(int) if *int == 0)
    }

    /// Returns true if the expression is the constant `1`.
    pub fn is_one(&self) -> bool {
        matches!(self, Self::Constant(int) if *int == 1)
    }

    /// Returns the number of nodes in the expression.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            count += 1;
            if let Some((_, left, right)) = expr.as_binary() {
                stack.push(left);
                stack.push(right);
            }
        }
        count
    }

    /// Returns the number of nodes on the longest path from this node to a leaf, including both.
    pub fn depth(&self) -> usize {
        match self.as_binary() {
            Some((_, left, right)) => 1 + left.depth().max(right.depth()),
            None => 1,
        }
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::Constant(Integer::from(value))
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Constant(Integer::from(value))
    }
}

impl From<Integer> for Expr {
    fn from(value: Integer) -> Self {
        Self::Constant(value)
    }
}

/// Builds the [`Expr::Sum`] of two expressions. No simplification is done.
impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::sum(self, rhs)
    }
}

/// Builds the [`Expr::Product`] of two expressions. No simplification is done.
impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::product(self, rhs)
    }
}

/// Builds the [`Expr::Difference`] of two expressions. No simplification is done.
impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::difference(self, rhs)
    }
}

/// Builds the [`Expr::Quotient`] of two expressions. No simplification is done.
impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::quotient(self, rhs)
    }
}

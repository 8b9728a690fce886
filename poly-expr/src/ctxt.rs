//! Configuration shared by evaluation and simplification.

use crate::error::DivisionByZero;
use log::debug;
use rug::{ops::DivRounding, Integer};

/// How integer division rounds its quotient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DivMode {
    /// Round toward negative infinity, so `-7 / 2 = -4`.
    ///
    /// This is the default option.
    #[default]
    Floor,

    /// Round toward zero, so `-7 / 2 = -3`.
    Trunc,

    /// Round so that the remainder is never negative, so `-7 / 2 = -4` and `7 / -2 = -3`.
    Euclid,
}

impl DivMode {
    /// Divides `dividend` by `divisor`, rounding the quotient according to this mode.
    pub fn divide(self, dividend: Integer, divisor: Integer) -> Result<Integer, DivisionByZero> {
        if divisor == 0 {
            debug!("division by zero: {} / {}", dividend, divisor);
            return Err(DivisionByZero);
        }

        Ok(match self {
            Self::Floor => dividend.div_floor(divisor),
            Self::Trunc => dividend.div_trunc(divisor),
            Self::Euclid => dividend.div_euc(divisor),
        })
    }
}

impl std::fmt::Display for DivMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DivMode::Floor => write!(f, "floor"),
            DivMode::Trunc => write!(f, "trunc"),
            DivMode::Euclid => write!(f, "euclid"),
        }
    }
}

/// A context to use when evaluating or simplifying an expression.
///
/// Evaluation and simplification of the same expression should use the same context. Otherwise,
/// a quotient folded by the simplifier may not agree with the value the evaluator computes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Ctxt {
    /// How integer division rounds its quotient.
    pub div_mode: DivMode,

    /// When true, the simplifier also rewrites `a / 1` into `a` for any `a`, not only when `a` is
    /// a constant. Disabled by default.
    pub divide_by_one: bool,
}

impl Ctxt {
    /// Wraps the given [`Ctxt`] into a builder for further customization.
    pub fn into_builder(self) -> CtxtBuilder {
        CtxtBuilder(self)
    }
}

/// Helper struct to build a [`Ctxt`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CtxtBuilder(Ctxt);

impl CtxtBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the division mode. See [`DivMode`] for more information.
    pub fn div_mode(mut self, div_mode: DivMode) -> Self {
        self.0.div_mode = div_mode;
        self
    }

    /// Sets whether `a / 1` is simplified to `a`. See [`Ctxt::divide_by_one`].
    pub fn divide_by_one(mut self, divide_by_one: bool) -> Self {
        self.0.divide_by_one = divide_by_one;
        self
    }

    /// Builds the [`Ctxt`].
    pub fn build(self) -> Ctxt {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use crate::primitive::int;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn floor_division() {
        assert_eq!(DivMode::Floor.divide(int(7), int(2)), Ok(int(3)));
        assert_eq!(DivMode::Floor.divide(int(-7), int(2)), Ok(int(-4)));
        assert_eq!(DivMode::Floor.divide(int(7), int(-2)), Ok(int(-4)));
        assert_eq!(DivMode::Floor.divide(int(-7), int(-2)), Ok(int(3)));
    }

    #[test]
    fn trunc_division() {
        assert_eq!(DivMode::Trunc.divide(int(-7), int(2)), Ok(int(-3)));
        assert_eq!(DivMode::Trunc.divide(int(7), int(-2)), Ok(int(-3)));
    }

    #[test]
    fn euclid_division() {
        assert_eq!(DivMode::Euclid.divide(int(-7), int(2)), Ok(int(-4)));
        assert_eq!(DivMode::Euclid.divide(int(7), int(-2)), Ok(int(-3)));
        assert_eq!(DivMode::Euclid.divide(int(-7), int(-2)), Ok(int(4)));
    }

    #[test]
    fn zero_divisor() {
        for mode in [DivMode::Floor, DivMode::Trunc, DivMode::Euclid] {
            assert_eq!(mode.divide(int(7), int(0)), Err(DivisionByZero));
            assert_eq!(mode.divide(int(0), int(0)), Err(DivisionByZero));
        }
    }

    #[test]
    fn builder() {
        let ctxt = CtxtBuilder::new()
            .div_mode(DivMode::Trunc)
            .divide_by_one(true)
            .build();
        assert_eq!(ctxt, Ctxt { div_mode: DivMode::Trunc, divide_by_one: true });
        assert_eq!(Ctxt::default().into_builder().build(), Ctxt::default());
        assert_eq!(ctxt.div_mode.to_string(), "trunc");
    }
}

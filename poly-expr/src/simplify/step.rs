/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `a-0 = a`
    SubtractZero,

    /// `a/1 = a`
    ///
    /// Only taken if [`Ctxt::divide_by_one`](crate::ctxt::Ctxt::divide_by_one) is set.
    DivideOne,

    /// `3+5 = 8`
    AddConstants,

    /// `3*5 = 15`
    MultiplyConstants,

    /// `5-3 = 2`
    SubtractConstants,

    /// `7/2 = 3`
    DivideConstants,
}
